//! One-shot mode: run a single submission without the TUI.
//!
//! Drives the same `SummarizerView` the TUI uses, so validation and error
//! messages are identical.

use std::io::Read;
use std::process::ExitCode;

use log::info;

use crate::core::state::{Status, SummarizerView};
use crate::service::SummaryService;

/// Exit status for a finished submission: 0 success, 1 request failure,
/// 2 rejected input.
pub fn exit_status(view: &SummarizerView, submitted: bool) -> u8 {
    match (&view.status, submitted) {
        (Status::Succeeded(_), _) => 0,
        (Status::Failed(_), false) => 2,
        _ => 1,
    }
}

pub fn exit_code(view: &SummarizerView, submitted: bool) -> ExitCode {
    ExitCode::from(exit_status(view, submitted))
}

/// Submits `text` once and returns the finished view plus whether a request
/// was actually made.
pub async fn summarize_once(service: &dyn SummaryService, text: String) -> (SummarizerView, bool) {
    let mut view = SummarizerView::new();
    view.update_text(text);
    let submitted = !view.input.trim().is_empty();
    view.submit(service).await;
    info!("Headless submission finished: {:?}", view.status);
    (view, submitted)
}

/// Reads all of stdin as the input text.
pub fn read_stdin() -> std::io::Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Prints the outcome: summary to stdout, error to stderr.
pub fn report(view: &SummarizerView) {
    if let Some(summary) = view.summary() {
        println!("{summary}");
    } else if let Some(error) = view.error() {
        eprintln!("{error}");
    }
}
