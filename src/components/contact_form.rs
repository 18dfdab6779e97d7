use yew::prelude::*;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

// Submission is simulated: there is no inquiry backend yet, so the form
// logs the payload, waits as a real request would, and confirms.
const FAKE_REQUEST_MS: u32 = 500;
const SUCCESS_BANNER_MS: u32 = 3_000;

#[derive(Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    phone: String,
    message: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::default);
    let email = use_state(String::default);
    let phone = use_state(String::default);
    let message = use_state(String::default);
    let is_submitting = use_state(|| false);
    let submit_success = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let is_submitting = is_submitting.clone();
        let submit_success = submit_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            log!(
                "contact form submitted:",
                serde_json::to_string(&submission).unwrap_or_default()
            );

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let is_submitting = is_submitting.clone();
            let submit_success = submit_success.clone();
            spawn_local(async move {
                TimeoutFuture::new(FAKE_REQUEST_MS).await;

                submit_success.set(true);
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                is_submitting.set(false);

                let submit_success = submit_success.clone();
                Timeout::new(SUCCESS_BANNER_MS, move || {
                    submit_success.set(false);
                })
                .forget();
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            {
                if *submit_success {
                    html! {
                        <div class="form-success">
                            {"Thank you for your submission! We will contact you soon."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-field">
                <label for="contact-name">{"Full Name*"}</label>
                <input
                    id="contact-name"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    required=true
                />
            </div>

            <div class="form-field">
                <label for="contact-email">{"Email Address*"}</label>
                <input
                    id="contact-email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                />
            </div>

            <div class="form-field">
                <label for="contact-phone">{"Mobile"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    value={(*phone).clone()}
                    oninput={on_phone_input}
                />
            </div>

            <div class="form-field">
                <label for="contact-message">{"Message*"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    value={(*message).clone()}
                    oninput={on_message_input}
                    required=true
                >
                </textarea>
            </div>

            <button type="submit" class="form-submit" disabled={*is_submitting}>
                { if *is_submitting { "Submitting..." } else { "Submit" } }
            </button>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.1rem;
                    }

                    .form-success {
                        padding: 0.8rem 1rem;
                        border-radius: 8px;
                        background: #e4f7ec;
                        color: #1f5c40;
                        font-size: 0.95rem;
                    }

                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                    }

                    .form-field label {
                        font-size: 0.88rem;
                        font-weight: 500;
                        color: #4a4a4a;
                    }

                    .form-field input,
                    .form-field textarea {
                        padding: 0.6rem 0.8rem;
                        border: 1px solid #d8d8d8;
                        border-radius: 8px;
                        font-size: 0.95rem;
                        font-family: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }

                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #26d07c;
                        box-shadow: 0 0 0 3px rgba(38, 208, 124, 0.15);
                    }

                    .form-submit {
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 8px;
                        background: #26d07c;
                        color: #ffffff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .form-submit:hover {
                        background: #1fb96c;
                    }

                    .form-submit:disabled {
                        background: #9adfbd;
                        cursor: not-allowed;
                    }
                "#}
            </style>
        </form>
    }
}
