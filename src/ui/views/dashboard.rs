use ratatui::text::{Line, Span};

use super::section;
use crate::app::View;
use crate::ui::theme::Palette;

pub const MARKER: &str = "DASHBOARD";

pub fn lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("Welcome back. Pick a track to keep your placement prep moving."),
        Line::from(""),
        Line::from(Span::styled("Jump to", palette.title())),
    ];
    lines.extend(View::ALL.into_iter().map(|view| {
        Line::from(vec![
            Span::styled(format!("  [{}] ", view.index() + 1), palette.title()),
            Span::raw(view.label()),
        ])
    }));
    lines.push(Line::from(""));
    lines.extend(section(
        "This week",
        &[
            "Finish one timed aptitude set",
            "Refresh your resume summary",
            "Rehearse three behavioral answers out loud",
        ],
        palette,
    ));
    lines
}
