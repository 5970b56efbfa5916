use ratatui::text::Line;

use super::section;
use crate::ui::theme::Palette;

pub const MARKER: &str = "INTERVIEW BANK";

pub fn lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(section(
        "HR",
        &[
            "Tell me about yourself.",
            "Why should we hire you?",
            "Where do you see yourself in five years?",
        ],
        palette,
    ));
    lines.extend(section(
        "Technical",
        &[
            "Explain the difference between a process and a thread.",
            "What happens when you type a URL into a browser?",
            "How does a hash map handle collisions?",
        ],
        palette,
    ));
    lines.extend(section(
        "Behavioral",
        &[
            "Describe a conflict in a team project and how you resolved it.",
            "Tell me about a time you missed a deadline.",
        ],
        palette,
    ));
    lines
}
