//! # Actions
//!
//! Everything that can happen in Mindful becomes an `Action`.
//! User types? That's `Action::UpdateText(buffer)`.
//! Backend replies? That's `Action::SummaryReady { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller has to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, BackendHealth};
use crate::service::{HealthStatus, ServiceError};

#[derive(Debug)]
pub enum Action {
    UpdateText(String),
    Submit,
    /// A spawned request finished. `submission` is the id handed out by
    /// `Effect::SpawnRequest`.
    SummaryReady {
        submission: u64,
        result: Result<Option<String>, ServiceError>,
    },
    HealthChecked(Result<HealthStatus, ServiceError>),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send `text` to the backend and report back with `Action::SummaryReady`.
    SpawnRequest { submission: u64, text: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::UpdateText(text) => {
            app.view.update_text(text);
            Effect::None
        }
        Action::Submit => match app.view.begin_submission() {
            Some(text) => {
                app.submissions += 1;
                info!(
                    "Submission #{} started ({} bytes)",
                    app.submissions,
                    text.len()
                );
                Effect::SpawnRequest {
                    submission: app.submissions,
                    text,
                }
            }
            None => {
                info!("Submission rejected: empty input");
                Effect::None
            }
        },
        Action::SummaryReady { submission, result } => {
            if submission != app.submissions {
                debug!(
                    "Submission #{} finished after #{} started",
                    submission, app.submissions
                );
            }
            match &result {
                Ok(Some(summary)) => info!(
                    "Submission #{} succeeded ({} bytes of summary)",
                    submission,
                    summary.len()
                ),
                Ok(None) => info!("Submission #{} succeeded without a summary", submission),
                Err(_) => info!("Submission #{} failed", submission),
            }
            app.view.complete_submission(result);
            Effect::None
        }
        Action::HealthChecked(result) => {
            app.backend = match result {
                Ok(health) if health.is_ok() => BackendHealth::Up,
                Ok(health) => {
                    warn!("Backend reported status {:?}", health.status);
                    BackendHealth::Down
                }
                Err(e) => {
                    warn!("Health check failed: {}", e);
                    BackendHealth::Down
                }
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{EMPTY_INPUT_MESSAGE, REQUEST_FAILED_MESSAGE, Status};
    use crate::test_support::test_app;

    #[test]
    fn test_update_text() {
        let mut app = test_app();
        let effect = update(&mut app, Action::UpdateText("abc".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.view.input, "abc");
    }

    #[test]
    fn test_submit_empty_spawns_nothing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.view.error(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(app.submissions, 0);
    }

    #[test]
    fn test_submit_spawns_request_with_snapshot() {
        let mut app = test_app();
        update(&mut app, Action::UpdateText(" text ".to_string()));
        let effect = update(&mut app, Action::Submit);
        assert_eq!(
            effect,
            Effect::SpawnRequest {
                submission: 1,
                text: " text ".to_string()
            }
        );
        assert!(app.view.is_loading());
    }

    #[test]
    fn test_reducer_does_not_block_second_submit() {
        // The loading guard lives in the UI, not here
        let mut app = test_app();
        update(&mut app, Action::UpdateText("text".to_string()));
        update(&mut app, Action::Submit);
        let effect = update(&mut app, Action::Submit);
        assert!(matches!(effect, Effect::SpawnRequest { submission: 2, .. }));
    }

    #[test]
    fn test_summary_ready_success() {
        let mut app = test_app();
        update(&mut app, Action::UpdateText("text".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::SummaryReady {
                submission: 1,
                result: Ok(Some("short".to_string())),
            },
        );
        assert_eq!(app.view.status, Status::Succeeded(Some("short".to_string())));
    }

    #[test]
    fn test_summary_ready_failure() {
        let mut app = test_app();
        update(&mut app, Action::UpdateText("text".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::SummaryReady {
                submission: 1,
                result: Err(ServiceError::Parse("expected value".to_string())),
            },
        );
        assert_eq!(app.view.error(), Some(REQUEST_FAILED_MESSAGE));
        assert!(!app.view.is_loading());
    }

    #[test]
    fn test_health_checked() {
        let mut app = test_app();
        update(
            &mut app,
            Action::HealthChecked(Ok(HealthStatus {
                status: "OK".to_string(),
                message: None,
            })),
        );
        assert_eq!(app.backend, BackendHealth::Up);

        update(
            &mut app,
            Action::HealthChecked(Err(ServiceError::Network("refused".to_string()))),
        );
        assert_eq!(app.backend, BackendHealth::Down);
    }

    #[test]
    fn test_health_does_not_touch_view() {
        let mut app = test_app();
        update(&mut app, Action::UpdateText("text".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::HealthChecked(Err(ServiceError::Network("refused".to_string()))),
        );
        assert!(app.view.is_loading());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
