//! Header and footer drawn around every view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::view_state::ShellViewState;

pub const BRAND_ACCENT: &str = "Campus";
pub const BRAND_REST: &str = "Connect";
pub const FOOTER_TAGLINE: &str = "Master your placement journey with AI-driven insights.";
pub const FOOTER_COPYRIGHT: &str = "(c) 2025 Campus Connect Suite";

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the footer.
pub const FOOTER_HEIGHT: u16 = 3;

pub fn render_header(frame: &mut Frame, area: Rect, state: &ShellViewState, palette: &Palette) {
    let menu_hint = if state.sidebar_open {
        "[Tab] close"
    } else {
        "[Tab] menu"
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", menu_hint), palette.dim()),
        Span::styled(BRAND_ACCENT, palette.title()),
        Span::styled(
            BRAND_REST,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  /  {}", state.view.label()), palette.dim()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            FOOTER_TAGLINE,
            palette.dim().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(FOOTER_COPYRIGHT, palette.dim())),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(palette.border_style());
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
