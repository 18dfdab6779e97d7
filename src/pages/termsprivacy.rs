use yew::prelude::*;

fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
                .legal-page {
                    max-width: 820px;
                    margin: 0 auto;
                    padding: 9rem 2rem 5rem 2rem;
                    font-family: 'Halcyon', system-ui, -apple-system, sans-serif;
                    color: #2b2b2b;
                    line-height: 1.7;
                }

                .legal-page h1 {
                    color: #1f3a2c;
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }

                .legal-page .updated {
                    color: #8a8378;
                    font-size: 0.9rem;
                    margin-bottom: 2.5rem;
                }

                .legal-page h2 {
                    color: #1f5c40;
                    font-size: 1.3rem;
                    margin: 2rem 0 0.6rem 0;
                }

                .legal-page p {
                    color: #5c5247;
                    margin: 0 0 1rem 0;
                }
            "#}
        </style>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms & Conditions"}</h1>
            <p class="updated">{"Last updated: March 2026"}</p>

            <h2>{"1. About These Terms"}</h2>
            <p>
                {"These terms govern your use of the Terravita Group website and any \
                 program, event or publication offered through it. By browsing the \
                 site you agree to them."}
            </p>

            <h2>{"2. Educational Content"}</h2>
            <p>
                {"Articles, workshops and program descriptions on this site are \
                 educational. They are not medical advice and do not replace \
                 consultation with a qualified healthcare professional."}
            </p>

            <h2>{"3. Brand Programs"}</h2>
            <p>
                {"Programs run by Terravita brands carry their own enrollment \
                 agreements. Where those agreements differ from these terms, the \
                 program agreement prevails."}
            </p>

            <h2>{"4. Intellectual Property"}</h2>
            <p>
                {"All content on this site, including text, imagery and video, \
                 belongs to Terravita Group or its licensors and may not be \
                 reproduced without written permission."}
            </p>

            <h2>{"5. Contact"}</h2>
            <p>
                {"Questions about these terms can be sent to hello@terravitagroup.com."}
            </p>
            { legal_styles() }
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p class="updated">{"Last updated: March 2026"}</p>

            <h2>{"1. What We Collect"}</h2>
            <p>
                {"The contact form asks for your name, email address, phone number \
                 and message. The newsletter form asks for your email address. We \
                 collect nothing else."}
            </p>

            <h2>{"2. How It Is Used"}</h2>
            <p>
                {"Inquiry details are used solely to respond to you. Newsletter \
                 addresses are used solely to send the updates you signed up for; \
                 every mail includes an unsubscribe link."}
            </p>

            <h2>{"3. What We Don't Do"}</h2>
            <p>
                {"We do not sell, rent or share your details with third parties, \
                 and this site sets no advertising or analytics cookies."}
            </p>

            <h2>{"4. Your Rights"}</h2>
            <p>
                {"You may request a copy or deletion of any personal data we hold \
                 about you by writing to hello@terravitagroup.com."}
            </p>
            { legal_styles() }
        </div>
    }
}
