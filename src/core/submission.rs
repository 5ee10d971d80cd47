use crate::utils::error::{FormError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Idle",
            SubmissionPhase::Submitting => "Submitting",
            SubmissionPhase::Succeeded => "Succeeded",
            SubmissionPhase::Failed => "Failed",
        }
    }

    fn can_move_to(self, next: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, next),
            (Idle, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Failed, Idle)
                | (Succeeded, Idle)
        )
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a submit attempt ended in, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation rejected the request; nothing was sent.
    Invalid,
    Sent,
    /// The relay rejected the request or could not be reached.
    Failed(String),
    /// The form already completed and cannot be sent again.
    AlreadySubmitted,
}

/// Lifecycle of a single form's submission.
///
/// There is no in-flight lock beyond `&mut self`: two form instances may
/// post concurrently, and nothing deduplicates their requests.
#[derive(Debug, Default)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn begin(&mut self) -> Result<()> {
        self.move_to(SubmissionPhase::Submitting)
    }

    pub fn succeed(&mut self) -> Result<()> {
        self.move_to(SubmissionPhase::Succeeded)
    }

    pub fn fail(&mut self) -> Result<()> {
        self.move_to(SubmissionPhase::Failed)
    }

    /// Failed -> Idle.
    pub fn recover(&mut self) -> Result<()> {
        if self.phase != SubmissionPhase::Failed {
            return Err(self.rejected(SubmissionPhase::Idle));
        }
        self.move_to(SubmissionPhase::Idle)
    }

    /// Succeeded -> Idle, for a form that starts a fresh request in place.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase != SubmissionPhase::Succeeded {
            return Err(self.rejected(SubmissionPhase::Idle));
        }
        self.move_to(SubmissionPhase::Idle)
    }

    fn move_to(&mut self, next: SubmissionPhase) -> Result<()> {
        if !self.phase.can_move_to(next) {
            return Err(self.rejected(next));
        }
        tracing::debug!("Submission phase: {} -> {}", self.phase, next);
        self.phase = next;
        Ok(())
    }

    fn rejected(&self, next: SubmissionPhase) -> FormError {
        FormError::InvalidTransition {
            from: self.phase.as_str(),
            to: next.as_str(),
        }
    }
}

/// Logs a transition the controller expected to be valid.
pub(crate) fn track(form: &'static str, result: Result<()>) {
    if let Err(err) = result {
        tracing::warn!(form, "Unexpected submission transition: {}", err);
    }
}
