use crate::core::submission::{track, Submission, SubmissionPhase, SubmitOutcome};
use crate::core::validation::validate_contact;
use crate::domain::model::{ContactField, ContactFieldUpdate, ContactRequest, FieldErrors};
use crate::domain::ports::{FormRelay, NotificationKind, Notifier};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting us. We will get back to you shortly.";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again.";

const FORM: &str = "contact";

/// Controller behind the contact page form.
///
/// Validates locally, posts the trimmed values to the relay, and reports the
/// result through the notifier. The form stays on the page: a success clears
/// the fields, a failure keeps them.
pub struct ContactForm<R: FormRelay, N: Notifier> {
    relay: R,
    notifier: N,
    endpoint: String,
    request: ContactRequest,
    errors: FieldErrors<ContactField>,
    submission: Submission,
}

impl<R: FormRelay, N: Notifier> ContactForm<R, N> {
    pub fn new(relay: R, notifier: N, endpoint: impl Into<String>) -> Self {
        Self {
            relay,
            notifier,
            endpoint: endpoint.into(),
            request: ContactRequest::default(),
            errors: FieldErrors::new(),
            submission: Submission::new(),
        }
    }

    pub fn apply(&mut self, update: ContactFieldUpdate) {
        self.leave_settled_phase();
        let field = self.request.apply(update);
        self.errors.remove(field);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.leave_settled_phase();
        self.errors.clear();

        let normalized = match validate_contact(&self.request) {
            Ok(normalized) => normalized,
            Err(errors) => {
                tracing::warn!(form = FORM, "Validation failed: {}", errors);
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        if let Err(err) = self.submission.begin() {
            tracing::warn!(form = FORM, "Submit ignored: {}", err);
            return SubmitOutcome::Failed(err.user_friendly_message());
        }

        let payload = match serde_json::to_value(&normalized) {
            Ok(payload) => payload,
            Err(err) => return self.fail(err.to_string()),
        };

        tracing::debug!(form = FORM, "Posting contact message to {}", self.endpoint);
        match self.relay.post_json(&self.endpoint, &payload).await {
            Ok(response) if response.is_success() => {
                tracing::info!(form = FORM, status = response.status, "Contact message sent");
                self.request.clear();
                track(FORM, self.submission.succeed());
                self.notifier
                    .notify(NotificationKind::Success, CONTACT_SUCCESS_MESSAGE);
                SubmitOutcome::Sent
            }
            Ok(response) => {
                self.fail(format!("relay responded with status {}", response.status))
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    fn fail(&mut self, reason: String) -> SubmitOutcome {
        tracing::warn!(form = FORM, "Contact message not sent: {}", reason);
        track(FORM, self.submission.fail());
        self.notifier
            .notify(NotificationKind::Error, CONTACT_FAILURE_MESSAGE);
        track(FORM, self.submission.recover());
        SubmitOutcome::Failed(reason)
    }

    // A cleared form after success is a fresh request.
    fn leave_settled_phase(&mut self) {
        match self.submission.phase() {
            SubmissionPhase::Succeeded => track(FORM, self.submission.reset()),
            SubmissionPhase::Failed => track(FORM, self.submission.recover()),
            SubmissionPhase::Idle | SubmissionPhase::Submitting => {}
        }
    }

    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors<ContactField> {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.submission.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}
