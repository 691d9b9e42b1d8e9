use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::MailerConfig;
use crate::contact::draft::{completion_delay, ContactDraft, Finished, SubmitStatus};
use crate::contact::mailer::{deliver_if_alive, HttpMailer, MailError, MailTransport};
use crate::utils::liveness::Liveness;

pub const SUCCESS_MESSAGE: &str =
    "Votre message a été envoyé avec succès ! Nous vous répondrons dans les plus brefs délais.";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Runs once, a little after a successful send.
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
    /// Keeps element ids unique when several forms are on the page.
    #[prop_or(AttrValue::from("contact"))]
    pub id_prefix: AttrValue,
}

pub enum ContactFormMsg {
    SetEmail(String),
    SetMessage(String),
    Submit,
    Resolved(Result<(), MailError>),
}

pub struct ContactForm {
    draft: ContactDraft,
    mailer: Rc<dyn MailTransport>,
    liveness: Liveness,
    success_timer: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: ContactDraft::new(),
            mailer: Rc::new(HttpMailer::new(MailerConfig::from_env())),
            liveness: Liveness::new(),
            success_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetEmail(email) => self.draft.set_email(email),
            ContactFormMsg::SetMessage(message) => self.draft.set_message(message),
            ContactFormMsg::Submit => {
                let submission = match self.draft.begin() {
                    Ok(submission) => submission,
                    Err(reason) => {
                        debug!("Contact submit ignored: {}", reason);
                        return false;
                    }
                };
                info!("Sending contact message");
                self.success_timer = None;

                let mailer = self.mailer.clone();
                let probe = self.liveness.probe();
                let on_resolved = ctx.link().callback(ContactFormMsg::Resolved);
                spawn_local(async move {
                    deliver_if_alive(probe, mailer.as_ref(), &submission, |outcome| {
                        on_resolved.emit(outcome)
                    })
                    .await;
                });
                true
            }
            ContactFormMsg::Resolved(outcome) => {
                let finished = self.draft.finish(outcome);
                match &finished {
                    Finished::Succeeded => info!("Contact message sent"),
                    Finished::Failed(reason) => warn!("Contact message failed: {}", reason),
                    Finished::Ignored => return false,
                }

                let on_success = ctx.props().on_success.clone();
                if let (Some(delay), Some(on_success)) =
                    (completion_delay(&finished, on_success.is_some()), on_success)
                {
                    self.success_timer = Some(Timeout::new(delay, move || on_success.emit(())));
                }
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.revoke();
        self.success_timer = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let busy = self.draft.is_busy();
        let prefix = &ctx.props().id_prefix;
        let email_id = format!("{}-email", prefix);
        let message_id = format!("{}-message", prefix);

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetEmail(input.value())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::SetMessage(input.value())
        });

        html! {
            <form class="contact-form" onsubmit={onsubmit}>
                <div class="contact-field">
                    <label for={email_id.clone()}>
                        {"Email "}<span class="required-mark">{"*"}</span>
                    </label>
                    <input
                        type="email"
                        id={email_id}
                        value={self.draft.email().to_string()}
                        oninput={on_email}
                        required={true}
                        disabled={busy}
                        placeholder="votre@email.com"
                    />
                </div>

                <div class="contact-field">
                    <label for={message_id.clone()}>
                        {"Message "}<span class="required-mark">{"*"}</span>
                    </label>
                    <textarea
                        id={message_id}
                        value={self.draft.message().to_string()}
                        oninput={on_message}
                        required={true}
                        disabled={busy}
                        rows="6"
                        placeholder="Votre message..."
                    />
                </div>

                {
                    match self.draft.status() {
                        SubmitStatus::Failed(reason) => html! {
                            <p class="contact-feedback error">{reason}</p>
                        },
                        SubmitStatus::Succeeded => html! {
                            <p class="contact-feedback success">{SUCCESS_MESSAGE}</p>
                        },
                        _ => html! {},
                    }
                }

                <button type="submit" class="contact-submit" disabled={busy}>
                    if busy {
                        <>
                            <span class="spinner"></span>
                            {"Envoi en cours..."}
                        </>
                    } else {
                        {"Envoyer"}
                    }
                </button>

                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        width: 100%;
                    }
                    .contact-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .contact-field label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(61, 52, 45, 0.8);
                    }
                    .required-mark {
                        color: var(--primary);
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid rgba(61, 52, 45, 0.2);
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.8);
                        color: var(--foreground);
                        font: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-field input:focus,
                    .contact-field textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                        box-shadow: 0 0 0 3px rgba(139, 115, 85, 0.2);
                    }
                    .contact-field input:disabled,
                    .contact-field textarea:disabled {
                        opacity: 0.5;
                    }
                    .contact-feedback {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        animation: feedbackIn 0.3s ease-out;
                    }
                    .contact-feedback.error {
                        background: #fef2f2;
                        color: #dc2626;
                    }
                    .contact-feedback.success {
                        background: #f0fdf4;
                        color: #16a34a;
                    }
                    .contact-submit {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--primary);
                        color: white;
                        font-weight: 500;
                        cursor: pointer;
                        transition: box-shadow 0.2s ease, opacity 0.2s ease;
                    }
                    .contact-submit:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .contact-submit:disabled {
                        cursor: not-allowed;
                        opacity: 0.7;
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 3px solid rgba(255, 255, 255, 0.25);
                        border-top-color: white;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes feedbackIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    "#}
                </style>
            </form>
        }
    }
}
