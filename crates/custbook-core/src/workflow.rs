// ── Submit workflow ──
//
// Every form (create, contact update, address add/update) walks the same
// phases:
//
//   Empty ─▶ Validating ─┬─▶ Empty (rejected, message set)
//                        └─▶ Submitting ─┬─▶ Succeeded(route)
//                                        ├─▶ Empty (failed, message set)
//                                        └─▶ Empty (cancelled or dropped)
//
// A failed submission is reported through the message; the form is back
// in `Empty` and submits again. There is no automatic retry.

use crate::error::CoreError;
use crate::model::AddressIndexError;
use crate::route::Route;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Empty,
    Validating,
    Submitting,
    /// Done; carries the screen to navigate to.
    Succeeded(Route),
}

/// Phase plus the last user-facing message.
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    phase: SubmitPhase,
    message: Option<String>,
}

impl SubmitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// The message from the last rejection or failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Validating | SubmitPhase::Submitting)
    }

    /// Where to go next, once the submission went through.
    pub fn destination(&self) -> Option<&Route> {
        match &self.phase {
            SubmitPhase::Succeeded(route) => Some(route),
            _ => None,
        }
    }

    /// Start a new attempt. Clears the previous message.
    pub fn begin_validation(&mut self) -> Result<(), CoreError> {
        if self.is_submitting() {
            return Err(CoreError::SubmitInFlight);
        }
        self.phase = SubmitPhase::Validating;
        self.message = None;
        Ok(())
    }

    /// Validation failed: back to `Empty` without issuing a request.
    pub fn reject(&mut self, err: ValidationError) {
        self.phase = SubmitPhase::Empty;
        self.message = Some(err.to_string());
    }

    /// The targeted address position does not exist: back to `Empty`.
    pub fn reject_index(&mut self, err: &AddressIndexError) {
        self.phase = SubmitPhase::Empty;
        self.message = Some(err.to_string());
    }

    /// Validation passed; the request is about to go out.
    ///
    /// The returned guard must be resolved with [`InFlight::succeed`] or
    /// [`InFlight::fail`]. Dropping it unresolved, as happens when the
    /// submitting future is dropped, puts the form back in `Empty`.
    pub fn begin_submit(&mut self) -> InFlight<'_> {
        self.phase = SubmitPhase::Submitting;
        InFlight { form: self }
    }

    /// Give up before anything was sent: back to `Empty` without a message.
    pub fn abandon(&mut self) {
        self.phase = SubmitPhase::Empty;
    }

    /// Set a message without changing phase (load errors and the like).
    pub fn notice(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// An outstanding submission, borrowed from its [`SubmitForm`].
#[must_use = "dropping the guard abandons the submission"]
pub struct InFlight<'a> {
    form: &'a mut SubmitForm,
}

impl InFlight<'_> {
    pub fn succeed(self, next: Route) {
        self.form.phase = SubmitPhase::Succeeded(next);
        self.form.message = None;
    }

    /// The store refused: record the message and return to `Empty`.
    pub fn fail(self, message: impl Into<String>) {
        self.form.phase = SubmitPhase::Empty;
        self.form.message = Some(message.into());
    }

    /// Cancelled mid-flight: back to `Empty` without a message.
    pub fn abandon(self) {
        drop(self);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.form.phase == SubmitPhase::Submitting {
            self.form.phase = SubmitPhase::Empty;
        }
    }
}
