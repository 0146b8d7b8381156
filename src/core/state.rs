//! # Application State
//!
//! ```text
//! App
//! ├── service: Arc<dyn SummaryService>  // backend client
//! ├── view: SummarizerView
//! │   ├── input: String                 // InputText, replaced on every keystroke
//! │   └── status: Status                // Idle | Loading | Succeeded | Failed
//! ├── backend: BackendHealth            // result of the startup probe
//! └── submissions: u64                  // counter for log correlation
//! ```
//!
//! Summary, error message and loading flag are all read off `Status`, so a
//! summary and an error can never be shown at the same time.

use std::sync::Arc;

use log::{info, warn};

use crate::service::{ServiceError, SummaryService};

/// Shown when submit is pressed with nothing but whitespace in the input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to summarize.";
/// Shown for every request failure, whatever the cause.
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Where the current (or last) submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    /// The backend replied. `None` when the reply had no usable `summary`.
    Succeeded(Option<String>),
    /// Holds the user-facing message, never the underlying error.
    Failed(String),
}

/// The single view: input text plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizerView {
    pub input: String,
    pub status: Status,
}

impl SummarizerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the input verbatim. Allowed while loading; an in-flight
    /// request already holds its own copy of the text.
    pub fn update_text(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.status {
            Status::Succeeded(Some(summary)) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validates the input and, if it is non-blank, moves to `Loading`.
    ///
    /// Returns the text to send (untrimmed), or `None` when the input was
    /// rejected and no request must be made. Does not refuse to start while
    /// another submission is loading; that guard belongs to the caller.
    pub fn begin_submission(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            self.status = Status::Failed(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }
        self.status = Status::Loading;
        Some(self.input.clone())
    }

    /// Applies the outcome of a request. Always leaves `Loading`.
    pub fn complete_submission(&mut self, result: Result<Option<String>, ServiceError>) {
        self.status = match result {
            Ok(summary) => Status::Succeeded(summary),
            Err(e) => {
                warn!("Summarize request failed: {}", e);
                Status::Failed(REQUEST_FAILED_MESSAGE.to_string())
            }
        };
    }

    /// Runs one whole submission against `service` and waits for it.
    pub async fn submit(&mut self, service: &dyn SummaryService) {
        let Some(text) = self.begin_submission() else {
            info!("Submission rejected: empty input");
            return;
        };
        let result = service.summarize(&text).await;
        self.complete_submission(result);
    }
}

/// What the startup probe of `GET /` found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Up,
    Down,
}

impl BackendHealth {
    pub fn label(&self) -> &'static str {
        match self {
            BackendHealth::Unknown => "checking",
            BackendHealth::Up => "online",
            BackendHealth::Down => "unreachable",
        }
    }
}

pub struct App {
    pub service: Arc<dyn SummaryService>,
    pub view: SummarizerView,
    pub backend: BackendHealth,
    pub submissions: u64,
}

impl App {
    pub fn new(service: Arc<dyn SummaryService>) -> Self {
        Self {
            service,
            view: SummarizerView::new(),
            backend: BackendHealth::default(),
            submissions: 0,
        }
    }
}
