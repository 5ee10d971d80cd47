use crate::core::submission::{track, Submission, SubmissionPhase, SubmitOutcome};
use crate::core::validation::validate_booking;
use crate::domain::catalog::routes;
use crate::domain::model::{BookingField, BookingFieldUpdate, BookingRequest, FieldErrors};
use crate::domain::ports::{FormRelay, Navigator};
use chrono::{DateTime, Utc};
use url::form_urlencoded;

pub const BOOKING_FALLBACK_ERROR: &str = "Submission failed";

const FORM: &str = "booking";

/// Controller behind the service booking form.
///
/// On success it navigates to the thank-you route carrying the chosen service
/// and the visitor's name. On failure the relay's response text is kept as an
/// inline error and every field keeps its value.
pub struct BookingForm<R: FormRelay, V: Navigator> {
    relay: R,
    navigator: V,
    endpoint: String,
    request: BookingRequest,
    errors: FieldErrors<BookingField>,
    inline_error: Option<String>,
    submission: Submission,
}

impl<R: FormRelay, V: Navigator> BookingForm<R, V> {
    pub fn new(relay: R, navigator: V, endpoint: impl Into<String>) -> Self {
        Self {
            relay,
            navigator,
            endpoint: endpoint.into(),
            request: BookingRequest::default(),
            errors: FieldErrors::new(),
            inline_error: None,
            submission: Submission::new(),
        }
    }

    /// Pre-selects the service named by an incoming `?service=` deep link.
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let service = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "service")
            .map(|(_, value)| value.into_owned());

        if let Some(service) = service.filter(|service| !service.is_empty()) {
            tracing::debug!(form = FORM, "Pre-selected service: {}", service);
            self.request.service = service;
        }
        self
    }

    pub fn apply(&mut self, update: BookingFieldUpdate) {
        if self.submission.phase() == SubmissionPhase::Succeeded {
            tracing::debug!(form = FORM, "Edit ignored on a completed booking");
            return;
        }
        if self.submission.phase() == SubmissionPhase::Failed {
            track(FORM, self.submission.recover());
        }
        let field = self.request.apply(update);
        self.errors.remove(field);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Utc::now()).await
    }

    /// Same as [`submit`](Self::submit) with an explicit submission instant.
    pub async fn submit_at(&mut self, submitted_at: DateTime<Utc>) -> SubmitOutcome {
        if self.submission.phase() == SubmissionPhase::Succeeded {
            tracing::warn!(form = FORM, "Booking already submitted");
            return SubmitOutcome::AlreadySubmitted;
        }

        self.inline_error = None;
        self.errors.clear();

        if let Err(errors) = validate_booking(&self.request) {
            tracing::warn!(form = FORM, "Validation failed: {}", errors);
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        if let Err(err) = self.submission.begin() {
            tracing::warn!(form = FORM, "Submit ignored: {}", err);
            return SubmitOutcome::Failed(err.user_friendly_message());
        }

        let payload = match serde_json::to_value(self.request.to_payload(submitted_at)) {
            Ok(payload) => payload,
            Err(err) => return self.fail(err.to_string()),
        };

        tracing::debug!(form = FORM, "Posting booking request to {}", self.endpoint);
        match self.relay.post_json(&self.endpoint, &payload).await {
            Ok(response) if response.is_success() => {
                tracing::info!(form = FORM, status = response.status, "Booking request sent");
                track(FORM, self.submission.succeed());
                let location = confirmation_location(&self.request.service, &self.request.name);
                self.navigator.navigate(&location);
                SubmitOutcome::Sent
            }
            Ok(response) => {
                tracing::warn!(form = FORM, status = response.status, "Booking request rejected");
                self.fail(response.body)
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    fn fail(&mut self, text: String) -> SubmitOutcome {
        let text = if text.is_empty() {
            BOOKING_FALLBACK_ERROR.to_string()
        } else {
            text
        };
        tracing::warn!(form = FORM, "Booking request not sent: {}", text);
        track(FORM, self.submission.fail());
        self.inline_error = Some(text.clone());
        track(FORM, self.submission.recover());
        SubmitOutcome::Failed(text)
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors<BookingField> {
        &self.errors
    }

    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.submission.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting…"
        } else {
            "Request Booking"
        }
    }
}

/// Thank-you route with `service` and `name` set only when non-empty.
pub fn confirmation_location(service: &str, name: &str) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if !service.is_empty() {
        params.append_pair("service", service);
    }
    if !name.is_empty() {
        params.append_pair("name", name);
    }
    format!("{}?{}", routes::THANK_YOU, params.finish())
}
