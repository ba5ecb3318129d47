//! Contact form aggregate and its submission state machine

use super::field::{Field, FieldValue};
use crate::events::{Effect, FormEvent};
use crate::rules;
use crate::sanitize::sanitize;
use crate::state::Severity;
use std::collections::HashMap;

/// Submission lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// The contact form: an ordered set of fields plus submission state.
///
/// All transitions go through [`ContactForm::apply`]; callers interpret
/// the returned [`Effect`]. While `Submitting`, the wiring shim must
/// treat every field as read-only and the submit control as disabled.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    pub submission: SubmissionState,
    /// Counts accepted submit attempts, for telemetry
    pub submit_count: u64,
    /// Focus index; `fields.len()` is the submit button row
    pub active_index: usize,
}

impl ContactForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            submission: SubmissionState::Idle,
            submit_count: 0,
            active_index: 0,
        }
    }

    /// The standard contact form layout
    pub fn contact() -> Self {
        Self::new(vec![
            Field::text("name", "Name", true, false),
            Field::text("email", "E-Mail", true, false),
            Field::tel("phone", "Phone (optional)", false),
            Field::text("message", "Message", true, true),
            Field::checkbox("privacy", "I accept the privacy policy", true),
        ])
    }

    /// Number of focusable rows (every field plus the submit button)
    pub fn row_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// Returns true if the submit button row is focused
    pub fn is_button_row_active(&self) -> bool {
        self.active_index == self.fields.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn active_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.active_index)
    }

    pub fn active_field(&self) -> Option<&Field> {
        self.fields.get(self.active_index)
    }

    /// Move focus to the next row, wrapping past the button row
    pub fn next_row(&mut self) {
        self.active_index = (self.active_index + 1) % self.row_count();
    }

    /// Move focus to the previous row, wrapping to the button row
    pub fn prev_row(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.row_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// Apply an event to the state machine and return the effect the
    /// caller must carry out.
    pub fn apply(&mut self, event: FormEvent) -> Effect {
        match event {
            FormEvent::FieldBlurred(index) => self.blur_field(index),
            FormEvent::SubmitRequested => self.begin_submit(),
            FormEvent::SubmissionSucceeded => self.complete_submit(true),
            FormEvent::SubmissionFailed => self.complete_submit(false),
        }
    }

    /// Validate a single field in isolation. Does not touch
    /// `submission`; ignored entirely while a submission is in flight.
    fn blur_field(&mut self, index: usize) -> Effect {
        if self.is_submitting() {
            return Effect::None;
        }
        if let Some(field) = self.fields.get_mut(index) {
            field.clear_error();
            if let Err(err) = rules::validate(field) {
                field.show_error(err.to_string());
            }
        }
        Effect::None
    }

    /// Run full validation and, when every field passes, move into
    /// `Submitting` with the sanitized values ready for dispatch.
    ///
    /// A submit request while the form is not `Idle` is ignored: no
    /// transition, no error (re-entrancy guard).
    fn begin_submit(&mut self) -> Effect {
        if self.submission != SubmissionState::Idle {
            return Effect::None;
        }

        self.submission = SubmissionState::Validating;
        self.submit_count += 1;
        tracing::debug!(attempt = self.submit_count, "validating submission");

        let mut all_valid = true;
        for field in &mut self.fields {
            field.clear_error();
            if let Err(err) = rules::validate(field) {
                field.show_error(err.to_string());
                all_valid = false;
            }
        }

        if !all_valid {
            // One aggregate notification, never one per failing field
            self.submission = SubmissionState::Idle;
            return Effect::Notify {
                text: rules::AGGREGATE_INVALID_MESSAGE.to_string(),
                severity: Severity::Danger,
            };
        }

        self.submission = SubmissionState::Submitting;
        Effect::Dispatch(self.sanitized_values())
    }

    /// Resolve an in-flight submission. Failure passes through `Failed`
    /// straight back to `Idle` so the user can retry; success stays in
    /// `Succeeded` because control moves to the post-submission view.
    fn complete_submit(&mut self, success: bool) -> Effect {
        if !self.is_submitting() {
            return Effect::None;
        }

        if success {
            self.submission = SubmissionState::Succeeded;
            Effect::Navigate
        } else {
            self.submission = SubmissionState::Failed;
            self.submission = SubmissionState::Idle;
            Effect::Notify {
                text: rules::CONNECTION_ERROR_MESSAGE.to_string(),
                severity: Severity::Danger,
            }
        }
    }

    /// Every field value passed through the sanitization boundary,
    /// keyed by field identifier
    fn sanitized_values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| {
                let value = match &field.value {
                    FieldValue::Text(s) => sanitize(s.trim()),
                    FieldValue::Checked(c) => c.to_string(),
                };
                (field.identifier.clone(), value)
            })
            .collect()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::contact()
    }
}
