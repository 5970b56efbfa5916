//! Feature views.
//!
//! Each view draws under a bold marker line (`DASHBOARD`, `MOCK EXAM`, ...)
//! so a rendered buffer can be checked for which view is showing.

mod aptitude;
mod dashboard;
mod interview;
mod mock_exam;
mod resume;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::app::View;
use crate::view_state::ShellViewState;

/// Marker line drawn at the top of `view`.
pub fn marker(view: View) -> &'static str {
    match view {
        View::Dashboard => dashboard::MARKER,
        View::Aptitude => aptitude::MARKER,
        View::Resume => resume::MARKER,
        View::Interview => interview::MARKER,
        View::MockExam => mock_exam::MARKER,
    }
}

/// Draw the active view into `area`.
pub fn render_view(frame: &mut Frame, area: Rect, state: &ShellViewState, palette: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(marker(state.view), palette.title())),
        Line::from(""),
    ];
    lines.extend(match state.view {
        View::Dashboard => dashboard::lines(palette),
        View::Aptitude => aptitude::lines(palette),
        View::Resume => resume::lines(palette),
        View::Interview => interview::lines(palette),
        View::MockExam => mock_exam::lines(state, palette),
    });

    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.base())
            .wrap(Wrap { trim: false })
            .scroll((state.scroll_offset, 0)),
        area,
    );
}

/// `title` followed by indented `items`.
fn section<'a>(title: &'a str, items: &[&'a str], palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(title, palette.title()))];
    lines.extend(
        items
            .iter()
            .map(|item| Line::from(vec![Span::styled("  • ", palette.dim()), Span::raw(*item)])),
    );
    lines.push(Line::from(""));
    lines
}
