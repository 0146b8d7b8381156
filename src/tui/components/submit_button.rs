//! # SubmitButton Component
//!
//! The submit trigger. While a request is in flight it is disabled and
//! shows a spinner instead of its label; the event loop ignores Enter for
//! as long as `loading` is set.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LABEL: &str = "Summarize";
pub const BUSY_LABEL: &str = "Summarizing...";

pub struct SubmitButton {
    pub loading: bool,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(loading: bool, spinner_frame: usize) -> Self {
        Self {
            loading,
            spinner_frame,
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = if self.loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Magenta)),
                Span::raw(" "),
                Span::styled(
                    BUSY_LABEL,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("[ Enter ] ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    LABEL,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
