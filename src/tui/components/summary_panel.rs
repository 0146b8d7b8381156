//! # SummaryPanel Component
//!
//! Labeled block showing the summary text verbatim, scrollable when it is
//! taller than the space left under the input.
//!
//! The scroll position lives in `SummaryPanelState`, persisted in the parent
//! `TuiState`; the panel itself is rebuilt every frame from props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const TITLE: &str = "Your Summary";

#[derive(Default)]
pub struct SummaryPanelState {
    pub scroll_state: ScrollViewState,
    /// Last rendered viewport height
    pub viewport_height: u16,
    /// Last rendered content height
    pub content_height: u16,
}

impl SummaryPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, for a freshly received summary.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Never scroll past the last line.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for SummaryPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        Some(())
    }
}

pub struct SummaryPanel<'a> {
    pub summary: &'a str,
    pub state: &'a mut SummaryPanelState,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a str, state: &'a mut SummaryPanelState) -> Self {
        Self { summary, state }
    }
}

impl Component for SummaryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(TITLE)
            .title_style(
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column reserved for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.summary)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.viewport_height = inner.height;
        self.state.content_height = content_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(summary: &str, state: &mut SummaryPanelState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| SummaryPanel::new(summary, state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_text() {
        let mut state = SummaryPanelState::new();
        let text = render("A fox story.", &mut state, 40, 5);
        assert!(text.contains(TITLE));
        assert!(text.contains("A fox story."));
    }

    #[test]
    fn test_markup_is_not_interpreted() {
        let mut state = SummaryPanelState::new();
        let text = render("**bold** <b>x</b>", &mut state, 40, 5);
        assert!(text.contains("**bold** <b>x</b>"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = SummaryPanelState::new();
        let long = "line\n".repeat(30);
        render(&long, &mut state, 40, 10);
        assert_eq!(state.viewport_height, 8);

        for _ in 0..100 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.scroll_state.offset().y, state.content_height - 8);

        state.reset();
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_short_summary_does_not_scroll() {
        let mut state = SummaryPanelState::new();
        render("short", &mut state, 40, 10);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_ignores_editing_events() {
        let mut state = SummaryPanelState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), None);
    }
}
