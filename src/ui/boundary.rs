//! Loading boundary: what the body shows while a view is not ready.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner_frame, truncate_string};
use super::theme::{Palette, COLOR_ERROR};
use crate::app::View;

pub const FALLBACK_TEXT: &str = "Synchronizing Data...";

/// Longest failure reason shown in the panel, in bytes.
const MAX_REASON_LEN: usize = 120;

pub fn render_fallback(frame: &mut Frame, area: Rect, tick_count: u64, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(spinner_frame(tick_count), palette.title())),
        Line::from(""),
        Line::from(Span::styled(
            FALLBACK_TEXT,
            palette.dim().add_modifier(Modifier::BOLD),
        )),
    ];
    let target = centered_rect(area, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        target,
    );
}

pub fn render_failed(frame: &mut Frame, area: Rect, view: View, reason: &str, palette: &Palette) {
    let dialog = centered_rect(area, 56, 7);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} unavailable ", view.label()),
            palette.title().fg(COLOR_ERROR),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style().fg(COLOR_ERROR));

    let lines = vec![
        Line::from(Span::styled(
            truncate_string(reason, MAX_REASON_LEN),
            palette.base(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", palette.title()),
            Span::styled(" retry   ", palette.dim()),
            Span::styled("[1]", palette.title()),
            Span::styled(" dashboard", palette.dim()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        dialog,
    );
}
