use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::config::MailerConfig;
use crate::contact::draft::Submission;
use crate::utils::liveness::LivenessProbe;

pub const FALLBACK_ERROR: &str = "Une erreur est survenue. Veuillez réessayer.";

/// Wire body expected by the mailer.
#[derive(Serialize, Debug, PartialEq)]
pub struct MailRequest<'a> {
    pub mail: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a Submission> for MailRequest<'a> {
    fn from(submission: &'a Submission) -> Self {
        Self {
            mail: &submission.email,
            message: &submission.message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MailError {
    #[error("{0}")]
    Transport(String),
    #[error("Erreur lors de l'envoi du message")]
    Status(u16),
    #[error("Le serveur ne répond pas, veuillez réessayer plus tard")]
    Timeout(u32),
    #[error("{0}")]
    Encode(String),
}

impl MailError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            text
        }
    }
}

#[async_trait(?Send)]
pub trait MailTransport {
    async fn send(&self, request: &MailRequest<'_>) -> Result<(), MailError>;
}

/// Sends one submission. No retries.
pub async fn deliver<T: MailTransport + ?Sized>(
    transport: &T,
    submission: &Submission,
) -> Result<(), MailError> {
    transport.send(&MailRequest::from(submission)).await
}

/// Sends one submission and hands the outcome to `on_result`, unless the
/// owner of `probe` went away while the request was in flight.
/// Returns whether `on_result` ran.
pub async fn deliver_if_alive<T, F>(
    probe: LivenessProbe,
    transport: &T,
    submission: &Submission,
    on_result: F,
) -> bool
where
    T: MailTransport + ?Sized,
    F: FnOnce(Result<(), MailError>),
{
    let outcome = deliver(transport, submission).await;
    if probe.is_alive() {
        on_result(outcome);
        true
    } else {
        debug!("Contact form gone before the mailer answered, dropping result");
        false
    }
}

/// Extra headers on top of the JSON content type set by the request body.
pub fn request_headers(config: &MailerConfig) -> [(&'static str, String); 1] {
    [("X-API-Key", config.api_key.clone())]
}

pub struct HttpMailer {
    config: MailerConfig,
}

impl HttpMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl MailTransport for HttpMailer {
    async fn send(&self, request: &MailRequest<'_>) -> Result<(), MailError> {
        let mut builder = Request::post(&self.config.send_url());
        for (name, value) in request_headers(&self.config) {
            builder = builder.header(name, &value);
        }
        let builder = builder
            .json(request)
            .map_err(|e| MailError::Encode(e.to_string()))?;

        let pending = Box::pin(builder.send());
        let timer = Box::pin(TimeoutFuture::new(self.config.timeout_ms));

        match select(pending, timer).await {
            Either::Left((Ok(response), _)) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(MailError::Status(response.status()))
                }
            }
            Either::Left((Err(e), _)) => Err(MailError::Transport(e.to_string())),
            Either::Right(_) => Err(MailError::Timeout(self.config.timeout_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::draft::{completion_delay, ContactDraft, Finished, SubmitStatus};
    use crate::utils::liveness::Liveness;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<(String, String)>>,
    }

    #[async_trait(?Send)]
    impl MailTransport for RecordingTransport {
        async fn send(&self, request: &MailRequest<'_>) -> Result<(), MailError> {
            self.sent
                .borrow_mut()
                .push((request.mail.to_string(), request.message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn body_uses_mail_and_message_keys() {
        let submission = Submission {
            email: "a@b.com".to_string(),
            message: "Hello".to_string(),
        };
        let body = serde_json::to_value(MailRequest::from(&submission)).unwrap();
        assert_eq!(body, serde_json::json!({"mail": "a@b.com", "message": "Hello"}));
    }

    #[test]
    fn api_key_header_is_sent_even_when_empty() {
        let headers = request_headers(&MailerConfig::from_values(None, None));
        assert_eq!(headers, [("X-API-Key", String::new())]);
    }

    #[test]
    fn deliver_sends_exactly_once() {
        let transport = RecordingTransport::default();
        let submission = Submission {
            email: "a@b.com".to_string(),
            message: "Hello".to_string(),
        };

        block_on(deliver(&transport, &submission)).unwrap();

        assert_eq!(
            *transport.sent.borrow(),
            vec![("a@b.com".to_string(), "Hello".to_string())]
        );
    }

    struct FailingTransport(&'static str);

    #[async_trait(?Send)]
    impl MailTransport for FailingTransport {
        async fn send(&self, _request: &MailRequest<'_>) -> Result<(), MailError> {
            Err(MailError::Transport(self.0.to_string()))
        }
    }

    fn filled_draft() -> ContactDraft {
        let mut draft = ContactDraft::new();
        draft.set_email("a@b.com".to_string());
        draft.set_message("Hello".to_string());
        draft
    }

    #[test]
    fn successful_send_clears_the_form() {
        let transport = RecordingTransport::default();
        let mut draft = filled_draft();

        let submission = draft.begin().unwrap();
        let finished = draft.finish(block_on(deliver(&transport, &submission)));

        assert_eq!(finished, Finished::Succeeded);
        assert_eq!(draft.status(), &SubmitStatus::Succeeded);
        assert_eq!((draft.email(), draft.message()), ("", ""));
        assert_eq!(completion_delay(&finished, true), Some(2_000));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn network_error_is_shown_and_form_kept() {
        let mut draft = filled_draft();

        let submission = draft.begin().unwrap();
        let finished = draft.finish(block_on(deliver(&FailingTransport("boom"), &submission)));

        assert_eq!(draft.status(), &SubmitStatus::Failed("boom".to_string()));
        assert_eq!((draft.email(), draft.message()), ("a@b.com", "Hello"));
        assert_eq!(completion_delay(&finished, true), None);
    }

    #[test]
    fn user_messages() {
        assert_eq!(MailError::Transport("boom".into()).user_message(), "boom");
        assert_eq!(MailError::Transport(String::new()).user_message(), FALLBACK_ERROR);
        assert_eq!(
            MailError::Status(500).user_message(),
            "Erreur lors de l'envoi du message"
        );
    }

    #[test]
    fn timeout_has_its_own_message() {
        assert_eq!(
            MailError::Timeout(15_000).user_message(),
            "Le serveur ne répond pas, veuillez réessayer plus tard"
        );
    }

    /// Unmounts its owner while the request is still out.
    struct UnmountingTransport {
        owner: RefCell<Option<Liveness>>,
    }

    #[async_trait(?Send)]
    impl MailTransport for UnmountingTransport {
        async fn send(&self, _request: &MailRequest<'_>) -> Result<(), MailError> {
            drop(self.owner.borrow_mut().take());
            Ok(())
        }
    }

    #[test]
    fn result_is_dropped_when_the_form_unmounts_mid_request() {
        let owner = Liveness::new();
        let probe = owner.probe();
        let transport = UnmountingTransport {
            owner: RefCell::new(Some(owner)),
        };
        let mut draft = filled_draft();
        let submission = draft.begin().unwrap();
        let ran = Cell::new(false);

        let delivered = block_on(deliver_if_alive(probe, &transport, &submission, |_| {
            ran.set(true)
        }));

        assert!(!delivered);
        assert!(!ran.get());
        assert!(draft.is_busy());
    }

    #[test]
    fn result_reaches_a_mounted_form() {
        let owner = Liveness::new();
        let transport = RecordingTransport::default();
        let mut draft = filled_draft();
        let submission = draft.begin().unwrap();
        let outcome = RefCell::new(None);

        let delivered = block_on(deliver_if_alive(
            owner.probe(),
            &transport,
            &submission,
            |result| *outcome.borrow_mut() = Some(result),
        ));

        assert!(delivered);
        assert_eq!(outcome.into_inner(), Some(Ok(())));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn sending_again_after_a_success() {
        let transport = RecordingTransport::default();
        let mut draft = filled_draft();

        let first = draft.begin().unwrap();
        draft.finish(block_on(deliver(&transport, &first)));
        assert_eq!(draft.status(), &SubmitStatus::Succeeded);

        draft.set_email("c@d.com".to_string());
        draft.set_message("Encore".to_string());
        let second = draft.begin().unwrap();
        assert_eq!(draft.status(), &SubmitStatus::Submitting);

        draft.finish(block_on(deliver(&transport, &second)));
        assert_eq!(draft.status(), &SubmitStatus::Succeeded);
        assert_eq!(transport.sent.borrow().len(), 2);
    }
}
