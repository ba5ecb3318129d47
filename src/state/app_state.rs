//! Session-scoped application state

use super::form::ContactForm;
use super::notifications::NotificationQueue;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Post-submission destination; the form is never reset once here
    ThankYou,
}

/// Everything that lives for the session. Components receive the pieces
/// they need from here instead of reaching for globals; the notification
/// queue is the single shared entry point for user messaging.
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,
    pub notifications: NotificationQueue,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::Form,
            form: ContactForm::contact(),
            notifications: NotificationQueue::default(),
        }
    }
}
