//! Sidebar overlay rendering
//!
//! Drawn on top of the active view when open. Rows come from
//! [`SidebarItem::all`], so the highlighted index matches
//! `App::sidebar_cursor`.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::app::SidebarItem;
use crate::document::{MODE_ATTRIBUTE, THEME_ATTRIBUTE};
use crate::view_state::ShellViewState;

const SIDEBAR_WIDTH: u16 = 30;

pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &ShellViewState, palette: &Palette) {
    if !state.sidebar_open {
        return;
    }

    let panel = Rect {
        width: SIDEBAR_WIDTH.min(area.width),
        ..area
    };
    frame.render_widget(Clear, panel);

    let theme_token = state.document.attribute(THEME_ATTRIBUTE).unwrap_or_default();
    let mode_token = state.document.attribute(MODE_ATTRIBUTE).unwrap_or_default();

    let mut lines: Vec<Line> = Vec::new();
    let mut section = "";
    for (index, item) in SidebarItem::all().into_iter().enumerate() {
        let (heading, label, active) = match item {
            SidebarItem::Navigate(view) => (
                "NAVIGATE",
                format!("{} {}", view.index() + 1, view.label()),
                view == state.view,
            ),
            SidebarItem::Theme(theme) => (
                "THEME",
                theme.label().to_string(),
                theme.token() == theme_token,
            ),
            SidebarItem::ToggleMode => ("MODE", format!("Mode: {}", mode_token), false),
        };

        if heading != section {
            if !section.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(heading, palette.dim())));
            section = heading;
        }

        let marker = if active { "● " } else { "  " };
        let style = if index == state.sidebar_cursor {
            Style::default()
                .fg(palette.surface)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if active {
            palette.title()
        } else {
            palette.base()
        };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, label), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Enter] select  [Esc] close", palette.dim())));

    let block = Block::default()
        .title(Span::styled(" Menu ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .style(palette.base());

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
