//! # ErrorBanner Component
//!
//! Inline, non-dismissable banner for the view's error message.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

pub struct ErrorBanner {
    pub message: String,
}

impl ErrorBanner {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn paragraph(&self) -> Paragraph<'_> {
        Paragraph::new(format!("⚠ {}", self.message))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Rows needed at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

impl Component for ErrorBanner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
