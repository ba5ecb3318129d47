//! Application wiring: translates terminal input into form events and
//! carries out the effects the state machine requests

use crate::config::AppConfig;
use crate::events::{Effect, FormEvent};
use crate::state::{AppState, ContactForm, Control, NotificationQueue, View};
use crate::submit::Submitter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// External submission collaborator
    submitter: Arc<dyn Submitter>,
    /// Upper bound on how long a submission may stay in flight
    submit_timeout: std::time::Duration,
    /// Receiver for the in-flight submission, if any
    pending: Option<oneshot::Receiver<Result<()>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &AppConfig, submitter: Arc<dyn Submitter>) -> Self {
        let state = AppState {
            current_view: View::Form,
            form: ContactForm::contact(),
            notifications: NotificationQueue::new(
                config.max_notifications(),
                config.dismiss_after(),
            ),
        };

        Self {
            state,
            submitter,
            submit_timeout: config.submit_timeout(),
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is currently in flight
    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(self.state.current_view, View::ThankYou) {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.quit = true;
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        // While Submitting the submit control is disabled and every
        // field is read-only; only quitting gets through.
        if self.state.form.is_submitting() {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.blur_active_field();
                self.state.form.next_row();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_active_field();
                self.state.form.prev_row();
            }
            KeyCode::Enter => {
                if self.state.form.is_button_row_active() {
                    self.request_submit();
                } else if self.state.form.active_field().is_some_and(|f| f.is_multiline()) {
                    if let Some(field) = self.state.form.active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.request_submit();
                }
            }
            KeyCode::Char(' ') => match self.state.form.active_field_mut() {
                Some(field) if field.control == Control::Checkbox => field.toggle(),
                Some(field) => field.push_char(' '),
                None => {}
            },
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Emit a blur for the field losing focus
    fn blur_active_field(&mut self) {
        if !self.state.form.is_button_row_active() {
            let index = self.state.form.active_index;
            let effect = self.state.form.apply(FormEvent::FieldBlurred(index));
            self.run_effect(effect);
        }
    }

    /// Push the submit event through the state machine
    pub fn request_submit(&mut self) {
        let effect = self.state.form.apply(FormEvent::SubmitRequested);
        self.run_effect(effect);
    }

    /// Check whether the in-flight submission has resolved and feed the
    /// outcome back into the state machine. Called from the event loop.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let event = match rx.try_recv() {
            Ok(Ok(())) => FormEvent::SubmissionSucceeded,
            Ok(Err(err)) => {
                tracing::warn!("submission failed: {err:#}");
                FormEvent::SubmissionFailed
            }
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::warn!("submission task dropped without a result");
                FormEvent::SubmissionFailed
            }
        };

        self.pending = None;
        let effect = self.state.form.apply(event);
        self.run_effect(effect);
    }

    /// Remove expired notifications. Called on each event-loop tick.
    pub fn tick(&mut self) {
        self.state.notifications.sweep_expired(Instant::now());
    }

    /// Carry out an effect requested by the state machine
    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Notify { text, severity } => {
                self.state.notifications.notify(&text, severity);
            }
            Effect::Dispatch(fields) => {
                let (tx, rx) = oneshot::channel();
                let submitter = Arc::clone(&self.submitter);
                let timeout = self.submit_timeout;
                tokio::spawn(async move {
                    let result = match tokio::time::timeout(timeout, submitter.submit(fields)).await
                    {
                        Ok(result) => result,
                        Err(_) => Err(anyhow::anyhow!("submission timed out after {timeout:?}")),
                    };
                    let _ = tx.send(result);
                });
                self.pending = Some(rx);
            }
            Effect::Navigate => {
                self.state.current_view = View::ThankYou;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Severity;
    use crate::submit::MockSubmitter;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(submitter: MockSubmitter) -> App {
        App::new(&AppConfig::default(), Arc::new(submitter))
    }

    fn fill_valid(app: &mut App) {
        for (id, value) in [
            ("name", "Anna Schmidt"),
            ("email", "anna@example.com"),
            ("message", "I would like a quote for my project."),
        ] {
            let field = app
                .state
                .form
                .fields
                .iter_mut()
                .find(|f| f.identifier == id)
                .unwrap();
            for c in value.chars() {
                field.push_char(c);
            }
        }
        app.state
            .form
            .fields
            .iter_mut()
            .find(|f| f.identifier == "privacy")
            .unwrap()
            .toggle();
    }

    async fn resolve_submission(app: &mut App) {
        while app.has_pending_submission() {
            app.poll_submission();
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }
    }

    #[tokio::test]
    async fn test_invalid_submit_never_reaches_the_submitter() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().times(0);
        let mut app = app_with(submitter);

        app.request_submit();

        assert!(!app.has_pending_submission());
        assert_eq!(app.state.notifications.len(), 1);
        assert!(matches!(app.state.current_view, View::Form));
    }

    #[tokio::test]
    async fn test_successful_submission_navigates_once() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(submitter);
        fill_valid(&mut app);

        app.request_submit();
        assert!(app.state.form.is_submitting());
        resolve_submission(&mut app).await;

        assert!(matches!(app.state.current_view, View::ThankYou));
        assert_eq!(app.state.notifications.len(), 0);
    }

    #[tokio::test]
    async fn test_failed_submission_reenables_form_and_notifies() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("boom")));
        let mut app = app_with(submitter);
        fill_valid(&mut app);

        app.request_submit();
        resolve_submission(&mut app).await;

        assert!(matches!(app.state.current_view, View::Form));
        assert!(!app.state.form.is_submitting());
        let toast = app.state.notifications.iter().next().unwrap();
        assert_eq!(toast.text, "Connection error. Please try again later.");
        assert_eq!(toast.severity, Severity::Danger);
    }

    #[tokio::test]
    async fn test_second_submit_while_submitting_is_ignored() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(submitter);
        fill_valid(&mut app);

        app.request_submit();
        app.request_submit();
        resolve_submission(&mut app).await;

        assert_eq!(app.state.form.submit_count, 1);
    }

    #[tokio::test]
    async fn test_input_ignored_while_submitting() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(submitter);
        fill_valid(&mut app);

        app.request_submit();
        let before = app.state.form.fields[0].as_text().to_string();
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.form.fields[0].as_text(), before);
        resolve_submission(&mut app).await;
    }

    #[tokio::test]
    async fn test_tab_blur_validates_the_left_field() {
        let mut app = app_with(MockSubmitter::new());

        // Leave the empty required name field
        app.handle_key(key(KeyCode::Tab)).unwrap();

        assert_eq!(
            app.state.form.fields[0].error.as_deref(),
            Some("This field is required.")
        );
        assert_eq!(app.state.form.active_index, 1);
    }

    #[tokio::test]
    async fn test_space_toggles_checkbox() {
        let mut app = app_with(MockSubmitter::new());
        let privacy_index = app
            .state
            .form
            .fields
            .iter()
            .position(|f| f.identifier == "privacy")
            .unwrap();
        app.state.form.active_index = privacy_index;

        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.state.form.fields[privacy_index].is_checked());
    }

    #[tokio::test]
    async fn test_enter_in_multiline_inserts_newline() {
        let mut app = app_with(MockSubmitter::new());
        let message_index = app
            .state
            .form
            .fields
            .iter()
            .position(|f| f.identifier == "message")
            .unwrap();
        app.state.form.active_index = message_index;

        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.fields[message_index].as_text(), "a\n");
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = app_with(MockSubmitter::new());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    /// Submitter that never completes, for exercising the timeout bound
    struct HungSubmitter;

    #[async_trait::async_trait]
    impl Submitter for HungSubmitter {
        async fn submit(&self, _fields: std::collections::HashMap<String, String>) -> Result<()> {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let config = AppConfig {
            submit_timeout_ms: Some(10),
            ..Default::default()
        };
        let mut app = App::new(&config, Arc::new(HungSubmitter));
        fill_valid(&mut app);

        app.request_submit();
        resolve_submission(&mut app).await;

        assert!(!app.state.form.is_submitting());
        let toast = app.state.notifications.iter().next().unwrap();
        assert_eq!(toast.text, "Connection error. Please try again later.");
    }
}
