//! UI rendering for the Campus Connect shell
//!
//! Layout, top to bottom:
//! - Header: menu hint, brand and the active view label
//! - Body: the active view, or the loading boundary while it resolves
//! - Footer: tagline and copyright
//!
//! The sidebar is drawn last, over the body, when open. Colors come from
//! the document root attributes via [`Palette::from_document`].

mod boundary;
mod chrome;
mod helpers;
mod sidebar;
mod theme;
mod views;

pub use boundary::FALLBACK_TEXT;
pub use chrome::{FOOTER_COPYRIGHT, FOOTER_TAGLINE};
pub use theme::Palette;
pub use views::marker;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::registry::ViewSlot;
use crate::view_state::ShellViewState;
use boundary::{render_failed, render_fallback};
use chrome::{render_footer, render_header, FOOTER_HEIGHT, HEADER_HEIGHT};
use helpers::inner_rect;
use sidebar::render_sidebar;
use views::render_view;

/// Render one frame.
pub fn render(frame: &mut Frame, state: &ShellViewState) {
    let palette = Palette::from_document(state.document);
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, chunks[0], state, &palette);

    let body = inner_rect(chunks[1], 1);
    match state.slot {
        ViewSlot::Ready => render_view(frame, body, state, &palette),
        ViewSlot::Failed(reason) => render_failed(frame, body, state.view, reason, &palette),
        ViewSlot::Unloaded | ViewSlot::Loading => {
            render_fallback(frame, body, state.tick_count, &palette)
        }
    }

    render_footer(frame, chunks[2], &palette);
    render_sidebar(frame, chunks[1], state, &palette);
}
