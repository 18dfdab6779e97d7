use chrono::Datelike;
use serde_json::json;
use yew::prelude::*;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Who We Are", "/#about"),
    ("Our Brands", "/#brands"),
    ("Research", "/#research"),
    ("Get Involved", "/#join"),
    ("Contact", "/#contact"),
];

const SUPPORT_LINKS: &[(&str, &str)] = &[
    ("Terms & Conditions", "/terms"),
    ("Privacy Policy", "/privacy"),
];

fn organization_jsonld() -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Terravita Group",
        "url": "https://terravitagroup.com",
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": "+6561234880",
            "contactType": "customer service",
            "availableLanguage": ["English"]
        },
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "27 Meadow Crescent #08-11",
            "addressLocality": "Singapore",
            "postalCode": "238832",
            "addressCountry": "SG"
        }
    })
    .to_string()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    // Structured data can't live in the rendered tree (Yew escapes text
    // nodes), so inject the script tag into <head> for the footer's lifetime.
    use_effect_with_deps(
        move |_| {
            let script = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let script = document.create_element("script").ok()?;
                    script.set_attribute("type", "application/ld+json").ok()?;
                    script.set_text_content(Some(&organization_jsonld()));
                    document.head()?.append_child(&script).ok()?;
                    Some(script)
                });
            move || {
                if let Some(script) = script {
                    if let Some(parent) = script.parent_node() {
                        let _ = parent.remove_child(&script);
                    }
                }
            }
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="/#home" class="footer-logo">
                            {"terravita"}<span>{"group"}</span>
                        </a>
                        <p class="footer-tagline">
                            {"Research-led wellness, powered by food education and community."}
                        </p>
                    </div>

                    <div class="footer-links">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            {
                                QUICK_LINKS.iter().map(|&(title, href)| html! {
                                    <li key={href}><a href={href}>{title}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-links">
                        <h4>{"Support"}</h4>
                        <ul>
                            {
                                SUPPORT_LINKS.iter().map(|&(title, href)| html! {
                                    <li key={href}><a href={href}>{title}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-contact">
                        <h4>{"Contact Us"}</h4>
                        <ul>
                            <li><a href="mailto:hello@terravitagroup.com">{"hello@terravitagroup.com"}</a></li>
                            <li><a href="tel:+6561234880">{"Singapore: +65 6123 4880"}</a></li>
                            <li><a href="tel:+60377224119">{"Malaysia: +60 3 7722 4119"}</a></li>
                        </ul>
                        <address>
                            {"27 Meadow Crescent #08-11,"}<br />
                            {"Singapore 238832"}
                        </address>
                    </div>

                    <div class="footer-newsletter">
                        <h4>{"Stay Updated"}</h4>
                        <p>{"Join 40,000+ subscribers for clean-health tips, research notes and event invites."}</p>
                        <form>
                            <input type="email" placeholder="Enter your email" />
                            <button type="submit">{"Subscribe"}</button>
                        </form>
                    </div>
                </div>

                <div class="footer-copyright">
                    <p>{format!("© Copyright 2019 - {} Terravita Group. All rights reserved.", year)}</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #1f5c40;
                        color: #ffffff;
                        padding: 4rem 0 2rem 0;
                    }

                    .footer-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1.4fr 1fr 1fr 1.2fr 1.4fr;
                        gap: 2.5rem;
                        margin-bottom: 3rem;
                    }

                    .footer-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        letter-spacing: 0.04em;
                        color: #ffffff;
                        text-decoration: none;
                    }

                    .footer-logo span {
                        font-weight: 300;
                        margin-left: 0.3rem;
                        opacity: 0.8;
                    }

                    .footer-tagline {
                        margin-top: 1rem;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.6;
                        max-width: 260px;
                    }

                    .site-footer h4 {
                        font-size: 1.05rem;
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }

                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .site-footer li {
                        margin-bottom: 0.5rem;
                    }

                    .site-footer a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        font-size: 0.9rem;
                        transition: color 0.2s ease;
                    }

                    .site-footer a:hover {
                        color: #ffffff;
                    }

                    .site-footer address {
                        font-style: normal;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-top: 1rem;
                        line-height: 1.6;
                    }

                    .footer-newsletter p {
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.6;
                        margin: 0 0 1rem 0;
                    }

                    .footer-newsletter form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.7rem;
                    }

                    .footer-newsletter input {
                        padding: 0.6rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        background: rgba(255, 255, 255, 0.1);
                        color: #ffffff;
                        font-size: 0.9rem;
                    }

                    .footer-newsletter input::placeholder {
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .footer-newsletter button {
                        padding: 0.6rem 1rem;
                        border-radius: 8px;
                        border: none;
                        background: #ffffff;
                        color: #1f5c40;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .footer-newsletter button:hover {
                        background: rgba(255, 255, 255, 0.9);
                    }

                    .footer-copyright {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 1.8rem;
                        text-align: center;
                    }

                    .footer-copyright p {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0;
                    }

                    @media (max-width: 1024px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
