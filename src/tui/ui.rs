use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorBanner, SubmitButton, SummaryPanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HINTS: &str = "Enter: summarize · Ctrl+J: newline · PgUp/PgDn: scroll · Esc: quit";

/// Lays out, top to bottom: title, input, button, error banner, summary, hints.
/// The banner and summary take no space when there is nothing to show.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let input_height = tui.input_box.calculate_height(area.width);

    let mut banner = app.view.error().map(ErrorBanner::new);
    let banner_height = banner.as_ref().map_or(0, |b| b.height(area.width));

    let [title_area, input_area, button_area, banner_area, summary_area, hints_area] =
        Layout::vertical([
            Length(1),
            Length(input_height),
            Length(1),
            Length(banner_height),
            Min(0),
            Length(1),
        ])
        .areas(area);

    TitleBar::new(app.service.endpoint(), &app.backend).render(frame, title_area);

    tui.input_box.loading = app.view.is_loading();
    tui.input_box.render(frame, input_area);

    SubmitButton::new(app.view.is_loading(), spinner_frame).render(frame, button_area);

    if let Some(banner) = banner.as_mut() {
        banner.render(frame, banner_area);
    }

    if let Some(summary) = app.view.summary().filter(|s| !s.is_empty())
        && summary_area.height > 2
    {
        SummaryPanel::new(summary, &mut tui.summary_panel).render(frame, summary_area);
    }

    frame.render_widget(
        Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}
