use std::{collections::BTreeMap, fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

use crate::mail::{ContactMessage, DeliveryError, MailConfig, MailRelay};

/// How long a success or error banner stays up before the form goes idle.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name / DOM id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("is required")]
    RequiredField,
    #[error("has an invalid format")]
    InvalidFormat,
}

impl ValidationError {
    /// Text shown under the offending input.
    pub fn message(&self, field: Field) -> &'static str {
        match (self, field) {
            (Self::RequiredField, Field::Name) => "Name is required",
            (Self::RequiredField, Field::Email) => "Email is required",
            (Self::RequiredField, Field::Message) => "Message is required",
            (Self::InvalidFormat, _) => "Please enter a valid email",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, ValidationError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Checks every field and reports all failures at once.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::RequiredField);
    }
    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationError::RequiredField);
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, ValidationError::InvalidFormat);
    }
    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, ValidationError::RequiredField);
    }

    errors
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("a message is already being sent")]
    InFlight,
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Identifies the completion a scheduled reset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    status: SubmissionStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message(field))
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Keystroke handler. Editing a field drops its error straight away.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Validates and, if everything passes, moves to `Submitting` and returns
    /// the payload to send. On failure the form stays where it was and
    /// `errors` holds exactly the failing fields.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.status = SubmissionStatus::Submitting;
        Ok(self.fields.to_message())
    }

    /// Records the relay's answer. The returned token must be passed to
    /// [`ContactForm::auto_reset`] once [`RESET_DELAY`] has elapsed.
    ///
    /// Only a submission in flight can complete; in any other state the form
    /// is left untouched and `None` is returned.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) -> Option<ResetToken> {
        if self.status != SubmissionStatus::Submitting {
            log::warn!("ignoring delivery result while {:?}", self.status);
            return None;
        }
        Some(self.finish(outcome))
    }

    fn finish(&mut self, outcome: Result<(), DeliveryError>) -> ResetToken {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = ContactFields::default();
            }
            Err(err) => {
                log::error!("Error sending email: {err}");
                self.status = SubmissionStatus::Error;
            }
        }
        self.generation += 1;
        ResetToken(self.generation)
    }

    /// Returns a finished submission to `Idle`. Tokens from earlier
    /// submissions are ignored. Returns whether anything changed.
    pub fn auto_reset(&mut self, token: ResetToken) -> bool {
        if token.0 != self.generation || !self.status.is_terminal() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Runs a whole submission against `relay`: validation, one send, and the
    /// resulting transition. The caller still owns scheduling the reset.
    pub async fn submit<R: MailRelay>(
        &mut self,
        relay: &R,
        config: &MailConfig,
    ) -> Result<ResetToken, SubmitError> {
        let message = self.begin_submit()?;
        let outcome = relay.send(config, &message).await;
        // begin_submit left us in Submitting and we still hold the form
        let token = self.finish(outcome.clone());
        outcome.map(|()| token).map_err(SubmitError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct RecordingRelay {
        fail_with: Option<DeliveryError>,
        calls: Cell<usize>,
        last: RefCell<Option<ContactMessage>>,
    }

    impl RecordingRelay {
        fn failing(err: DeliveryError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }
    }

    impl MailRelay for RecordingRelay {
        async fn send(
            &self,
            _config: &MailConfig,
            message: &ContactMessage,
        ) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(message.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn config() -> MailConfig {
        MailConfig::new("service_x", "template_y", "pk_z")
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada Lovelace");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Let's build an engine.");
        form
    }

    #[test]
    fn test_validate_reports_each_failure() {
        let fields = ContactFields {
            name: String::new(),
            email: "bad".to_string(),
            message: "hi".to_string(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Name], ValidationError::RequiredField);
        assert_eq!(errors[&Field::Email], ValidationError::InvalidFormat);
    }

    #[test]
    fn test_validate_whitespace_is_empty() {
        let fields = ContactFields {
            name: "  ".to_string(),
            email: "\t".to_string(),
            message: "\n".to_string(),
        };
        let errors = validate(&fields);
        for field in Field::ALL {
            assert_eq!(errors.get(&field), Some(&ValidationError::RequiredField));
        }
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+y@d.io"] {
            assert!(EMAIL_PATTERN.is_match(ok), "{ok} should be accepted");
        }
        for bad in ["bad", "a@b", "a b@c.d", "@b.c", "a@.", "a@@b.c"] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_error_messages() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "nope");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.error(Field::Name), Some("Name is required"));
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email"));
        assert_eq!(form.error(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        form.set_field(Field::Name, "A");
        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Message).is_some());
    }

    #[test]
    fn test_passing_fields_lose_stale_errors() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        // fill name without going through set_field's clearing path
        form.fields.name = "Ada".to_string();
        assert!(form.begin_submit().is_err());
        assert!(!form.errors().contains_key(&Field::Name));
    }

    #[tokio::test]
    async fn test_invalid_submit_never_calls_relay() {
        let relay = RecordingRelay::default();
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "bad");
        form.set_field(Field::Message, "hi");

        let res = form.submit(&relay, &config()).await;

        let errors = match res {
            Err(SubmitError::Invalid(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        };
        assert_eq!(
            errors.into_iter().collect::<Vec<_>>(),
            vec![
                (Field::Name, ValidationError::RequiredField),
                (Field::Email, ValidationError::InvalidFormat),
            ]
        );
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_successful_sequence() {
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let msg = form.begin_submit().expect("fields are valid");
        assert_eq!(msg.name, "Ada Lovelace");
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let token = form.complete(Ok(())).expect("submission in flight");
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ContactFields::default());

        assert!(form.auto_reset(token));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_submit_sends_once_and_clears() {
        let relay = RecordingRelay::default();
        let mut form = filled();

        let token = form.submit(&relay, &config()).await.expect("relay accepts");

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(
            relay.last.borrow().as_ref().map(|m| m.email.as_str()),
            Some("ada@example.com")
        );
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.auto_reset(token));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_fields() {
        let relay = RecordingRelay::failing(DeliveryError::Network("offline".to_string()));
        let mut form = filled();
        let before = form.fields().clone();

        let res = form.submit(&relay, &config()).await;

        assert_eq!(
            res,
            Err(SubmitError::Delivery(DeliveryError::Network(
                "offline".to_string()
            )))
        );
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn test_failed_delivery_auto_resets() {
        let mut form = filled();
        form.begin_submit().expect("fields are valid");
        let token = form
            .complete(Err(DeliveryError::MissingConfig("EMAILJS_SERVICE_ID")))
            .expect("submission in flight");
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(form.auto_reset(token));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Ada Lovelace");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        form.begin_submit().expect("fields are valid");
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut form = filled();
        form.begin_submit().expect("fields are valid");
        let stale = form.complete(Err(DeliveryError::Unavailable)).expect("submission in flight");

        // resubmit from the error banner before the timer fires
        form.begin_submit().expect("fields were kept");
        assert!(!form.auto_reset(stale));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let fresh = form.complete(Ok(())).expect("submission in flight");
        assert!(!form.auto_reset(stale));
        assert!(form.auto_reset(fresh));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_complete_outside_submission_is_ignored() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");

        assert_eq!(form.complete(Ok(())), None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Ada");

        assert_eq!(form.complete(Err(DeliveryError::Unavailable)), None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_late_result_after_success_is_ignored() {
        let mut form = filled();
        form.begin_submit().expect("fields are valid");
        let token = form.complete(Ok(())).expect("submission in flight");
        form.set_field(Field::Name, "Grace");

        assert_eq!(form.complete(Ok(())), None);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields().name, "Grace");
        assert!(form.auto_reset(token));
    }

    #[test]
    fn test_reset_while_idle_is_noop() {
        let mut form = filled();
        form.begin_submit().expect("fields are valid");
        let token = form.complete(Ok(())).expect("submission in flight");
        assert!(form.auto_reset(token));
        assert!(!form.auto_reset(token));
    }

    #[test]
    fn test_submit_error_display() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, ValidationError::RequiredField);
        assert_eq!(
            SubmitError::Invalid(errors).to_string(),
            "1 field(s) failed validation"
        );
        assert_eq!(
            SubmitError::from(DeliveryError::Unavailable).to_string(),
            "mail relay is only reachable from the browser"
        );
    }
}
