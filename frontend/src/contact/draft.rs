//! Contact form state: the two fields plus where the current attempt stands.
//!
//! `Idle -> Submitting -> {Succeeded, Failed} -> Submitting -> ...`
//!
//! Only one attempt may be in flight. The form disables its controls while
//! submitting, but the guard lives here so it holds no matter how the submit
//! was triggered.

use thiserror::Error;

use crate::contact::mailer::MailError;

/// How long the success message stays up before the completion callback runs.
pub const SUCCESS_CALLBACK_DELAY_MS: u32 = 2_000;

/// Snapshot of the fields taken when an attempt starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("email is empty")]
    MissingEmail,
    #[error("message is empty")]
    MissingMessage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Finished {
    Succeeded,
    Failed(String),
    /// Nothing was in flight; the result belongs to no attempt.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    email: String,
    message: String,
    status: SubmitStatus,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Returns whether anything changed.
    pub fn set_email(&mut self, email: String) -> bool {
        if self.is_busy() || self.email == email {
            return false;
        }
        self.email = email;
        true
    }

    pub fn set_message(&mut self, message: String) -> bool {
        if self.is_busy() || self.message == message {
            return false;
        }
        self.message = message;
        true
    }

    /// Starts an attempt and hands back what to send. Any earlier success or
    /// error message is dropped right away.
    pub fn begin(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_busy() {
            return Err(SubmitRejected::InFlight);
        }
        if self.email.is_empty() {
            return Err(SubmitRejected::MissingEmail);
        }
        if self.message.is_empty() {
            return Err(SubmitRejected::MissingMessage);
        }

        self.status = SubmitStatus::Submitting;
        Ok(Submission {
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn finish(&mut self, outcome: Result<(), MailError>) -> Finished {
        if !self.is_busy() {
            return Finished::Ignored;
        }

        match outcome {
            Ok(()) => {
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Succeeded;
                Finished::Succeeded
            }
            Err(e) => {
                let reason = e.user_message();
                self.status = SubmitStatus::Failed(reason.clone());
                Finished::Failed(reason)
            }
        }
    }
}

/// Delay before the completion callback, if one should run at all.
pub fn completion_delay(finished: &Finished, has_callback: bool) -> Option<u32> {
    match finished {
        Finished::Succeeded if has_callback => Some(SUCCESS_CALLBACK_DELAY_MS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::new();
        draft.set_email("a@b.com".to_string());
        draft.set_message("Hello".to_string());
        draft
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut draft = ContactDraft::new();
        assert_eq!(draft.begin(), Err(SubmitRejected::MissingEmail));

        draft.set_email("a@b.com".to_string());
        assert_eq!(draft.begin(), Err(SubmitRejected::MissingMessage));
        assert_eq!(draft.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn whitespace_is_sent_untouched() {
        let mut draft = ContactDraft::new();
        draft.set_email(" a@b.com ".to_string());
        draft.set_message("  ".to_string());

        let submission = draft.begin().unwrap();
        assert_eq!(submission.email, " a@b.com ");
        assert_eq!(submission.message, "  ");
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut draft = filled();
        assert!(draft.begin().is_ok());
        assert!(draft.is_busy());
        assert_eq!(draft.begin(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn edits_are_ignored_while_in_flight() {
        let mut draft = filled();
        draft.begin().unwrap();

        assert!(!draft.set_email("other@b.com".to_string()));
        assert_eq!(draft.email(), "a@b.com");
    }

    #[test]
    fn success_clears_fields() {
        let mut draft = filled();
        draft.begin().unwrap();

        assert_eq!(draft.finish(Ok(())), Finished::Succeeded);
        assert_eq!(draft.email(), "");
        assert_eq!(draft.message(), "");
        assert_eq!(draft.status(), &SubmitStatus::Succeeded);
        assert!(!draft.is_busy());
    }

    #[test]
    fn thrown_error_keeps_fields_and_shows_its_text() {
        let mut draft = filled();
        draft.begin().unwrap();

        let finished = draft.finish(Err(MailError::Transport("boom".to_string())));

        assert_eq!(finished, Finished::Failed("boom".to_string()));
        assert_eq!(draft.status(), &SubmitStatus::Failed("boom".to_string()));
        assert_eq!(draft.email(), "a@b.com");
        assert_eq!(draft.message(), "Hello");
        assert!(!draft.is_busy());
    }

    #[test]
    fn bad_status_is_a_failure() {
        let mut draft = filled();
        draft.begin().unwrap();

        let finished = draft.finish(Err(MailError::Status(502)));
        assert_eq!(
            finished,
            Finished::Failed("Erreur lors de l'envoi du message".to_string())
        );
        assert_eq!(draft.email(), "a@b.com");
    }

    #[test]
    fn retry_clears_stale_error_immediately() {
        let mut draft = filled();
        draft.begin().unwrap();
        draft.finish(Err(MailError::Status(500)));

        draft.begin().unwrap();
        assert_eq!(draft.status(), &SubmitStatus::Submitting);
    }

    #[test]
    fn typing_after_failure_keeps_the_message() {
        let mut draft = filled();
        draft.begin().unwrap();
        draft.finish(Err(MailError::Status(500)));

        assert!(draft.set_message("Hello again".to_string()));
        assert!(matches!(draft.status(), SubmitStatus::Failed(_)));
    }

    #[test]
    fn stray_result_is_ignored() {
        let mut draft = filled();
        assert_eq!(draft.finish(Ok(())), Finished::Ignored);
        assert_eq!(draft.email(), "a@b.com");
    }

    #[test]
    fn callback_delay_only_after_success() {
        assert_eq!(completion_delay(&Finished::Succeeded, true), Some(2_000));
        assert_eq!(completion_delay(&Finished::Succeeded, false), None);
        assert_eq!(completion_delay(&Finished::Failed("x".into()), true), None);
        assert_eq!(completion_delay(&Finished::Ignored, true), None);
    }
}
