//! # TitleBar Component
//!
//! One-line header: app name, backend address and backend health.
//!
//! Stateless. All three props come from core state and are rendered as
//! given:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.service.endpoint(), &app.backend);
//! title_bar.render(frame, title_area);
//! ```

use crate::core::state::BackendHealth;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Base URL of the backend
    pub endpoint: String,
    /// Result of the startup probe
    pub backend: BackendHealth,
}

impl TitleBar {
    pub fn new(endpoint: &str, backend: &BackendHealth) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            backend: backend.clone(),
        }
    }

    fn health_color(&self) -> Color {
        match self.backend {
            BackendHealth::Unknown => Color::DarkGray,
            BackendHealth::Up => Color::Green,
            BackendHealth::Down => Color::Red,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "✨ Mindful Summarizer",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.endpoint.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(
                format!("({})", self.backend.label()),
                Style::default().fg(self.health_color()),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
