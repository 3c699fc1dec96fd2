use log::{debug, info, warn};
use site_core::contact::{ContactForm, ContactPayload, Field, SubmissionStatus};
use site_core::content::CONTACT_DETAILS;
use site_core::{ContactError, ValidationError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_site_config;
use crate::mailer;

#[derive(Default)]
struct FormState {
    form: ContactForm,
    /// Set after a blocked submit; cleared by the next edit.
    invalid: Option<ValidationError>,
}

impl FormState {
    fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.invalid = None;
    }

    /// Moves the form to sending. Only a returned payload may be sent.
    fn submit(&mut self) -> Option<ContactPayload> {
        match self.form.begin_submission() {
            Ok(payload) => {
                self.invalid = None;
                Some(payload)
            }
            Err(ContactError::Invalid(err)) => {
                info!("Contact form blocked: {}", err);
                self.invalid = Some(err);
                None
            }
            Err(ContactError::AlreadySending) => {
                debug!("Ignoring submit while a message is in flight");
                None
            }
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();
    // Shared with the submit handler and the send task, so a second submit
    // sees `Sending` before any re-render.
    let state = use_mut_ref(FormState::default);
    let redraw = use_force_update();

    let on_edit = |field: Field| {
        let state = state.clone();
        let redraw = redraw.clone();
        move |value: String| {
            state.borrow_mut().edit(field, value);
            redraw.force_update();
        }
    };
    let on_name = {
        let edit = on_edit(Field::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = on_edit(Field::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_message = {
        let edit = on_edit(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = state.borrow_mut().submit();
            redraw.force_update();
            let Some(payload) = payload else {
                return;
            };

            let state = state.clone();
            let redraw = redraw.clone();
            let settings = config.mail.clone();
            spawn_local(async move {
                let outcome = mailer::deliver(&settings, &payload).await;
                if let Err(err) = &outcome {
                    warn!("Contact message not delivered: {}", err);
                }
                state.borrow_mut().form.finish_submission(outcome);
                redraw.force_update();
            });
        })
    };

    let on_dismiss = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().form.dismiss();
            redraw.force_update();
        })
    };

    let current = state.borrow();
    let form = &current.form;
    let sending = form.is_sending();
    let field_error = |field: Field| -> Option<String> {
        match &current.invalid {
            Some(ValidationError::Missing(missing)) if *missing == field => {
                Some(format!("{} is required.", field))
            }
            Some(ValidationError::InvalidEmail) if field == Field::Email => {
                Some("Please enter a valid email address.".to_string())
            }
            _ => None,
        }
    };
    let error_line = |field: Field| -> Html {
        match field_error(field) {
            Some(message) => html! { <p class="field-error" role="alert">{message}</p> },
            None => html! {},
        }
    };

    let banner = match form.status() {
        SubmissionStatus::Success => html! {
            <div class="form-banner success" role="status">
                <span>{"Thank you! Your message has been sent. We'll get back to you soon."}</span>
                <button type="button" onclick={on_dismiss} aria-label="Dismiss">{"✕"}</button>
            </div>
        },
        SubmissionStatus::Error(message) => html! {
            <div class="form-banner error" role="alert">
                <span>{message.clone()}</span>
                <button type="button" onclick={on_dismiss} aria-label="Dismiss">{"✕"}</button>
            </div>
        },
        SubmissionStatus::Idle | SubmissionStatus::Sending => html! {},
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 8rem 1.5rem;
                        background: linear-gradient(to bottom, white, rgba(111, 143, 85, 0.08));
                    }
                    .contact-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 3rem;
                    }
                    .contact h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .contact h2 span {
                        color: var(--horizon-orange);
                    }
                    .contact-lead {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .contact-detail {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .contact-detail-icon {
                        width: 48px;
                        height: 48px;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(242, 140, 40, 0.1);
                        font-size: 1.25rem;
                    }
                    .contact-detail h4 {
                        font-weight: 600;
                    }
                    .contact-detail p {
                        color: #4b5563;
                    }
                    .contact-form {
                        background: white;
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.08);
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e5e7eb;
                        font: inherit;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: 2px solid var(--horizon-orange);
                        border-color: transparent;
                    }
                    .contact-form textarea {
                        min-height: 9rem;
                        resize: vertical;
                    }
                    .field-error {
                        color: #dc2626;
                        font-size: 0.875rem;
                        font-weight: 400;
                    }
                    .contact-submit {
                        padding: 0.875rem;
                        border: none;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber));
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .form-banner {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.875rem 1.25rem;
                        border-radius: 0.75rem;
                    }
                    .form-banner button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                    }
                    .form-banner.success {
                        background: #ecfdf5;
                        color: #047857;
                    }
                    .form-banner.error {
                        background: #fef2f2;
                        color: #b91c1c;
                    }
                    @media (max-width: 1023px) {
                        .contact-inner {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="contact-inner">
                <div>
                    <h2>{"Get in "}<span>{"Touch"}</span></h2>
                    <p class="contact-lead">
                        {"Have a project in mind or need support? Send us a message and our team will respond promptly."}
                    </p>
                    { for CONTACT_DETAILS.iter().map(|detail| html! {
                        <div class="contact-detail" key={detail.label}>
                            <div class="contact-detail-icon">{detail.icon}</div>
                            <div>
                                <h4>{detail.label}</h4>
                                <p>{detail.value}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <form class="contact-form" {onsubmit} novalidate={true}>
                    {banner}
                    <label>
                        {Field::Name.to_string()}
                        <input type="text"
                            name="from_name"
                            autocomplete="name"
                            value={form.value(Field::Name).to_string()}
                            oninput={on_name}
                            disabled={sending} />
                        {error_line(Field::Name)}
                    </label>
                    <label>
                        {Field::Email.to_string()}
                        <input type="email"
                            name="from_email"
                            autocomplete="email"
                            value={form.value(Field::Email).to_string()}
                            oninput={on_email}
                            disabled={sending} />
                        {error_line(Field::Email)}
                    </label>
                    <label>
                        {Field::Message.to_string()}
                        <textarea name="message"
                            value={form.value(Field::Message).to_string()}
                            oninput={on_message}
                            disabled={sending} />
                        {error_line(Field::Message)}
                    </label>
                    <button type="submit" class="contact-submit" disabled={sending}>
                        { if sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
        </section>
    }
}
