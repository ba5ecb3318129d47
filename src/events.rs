//! Typed events and effects for the form pipeline
//!
//! The wiring shim (key handling, timers, the submission task) translates
//! raw input into `FormEvent`s and interprets the `Effect`s the state
//! machine hands back. The transition logic itself lives in
//! `state::form` and stays free of any UI or async concerns.

use crate::state::Severity;
use std::collections::HashMap;

/// An input event the form state machine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left the field at this index; validate it in isolation
    FieldBlurred(usize),
    /// The user requested submission of the whole form
    SubmitRequested,
    /// The external submission collaborator reported success
    SubmissionSucceeded,
    /// The external submission collaborator failed or timed out
    SubmissionFailed,
}

/// A side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Queue a user-visible notification
    Notify { text: String, severity: Severity },
    /// Hand the sanitized field values to the submission collaborator
    Dispatch(HashMap<String, String>),
    /// Submission succeeded; leave the form for the post-submission view
    Navigate,
}
