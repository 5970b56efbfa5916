use ratatui::text::Line;

use super::section;
use crate::ui::theme::Palette;

pub const MARKER: &str = "APTITUDE PREP";

pub fn lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(section(
        "Quantitative",
        &[
            "Percentages, profit and loss",
            "Time, speed and distance",
            "Ratios and averages",
        ],
        palette,
    ));
    lines.extend(section(
        "Logical reasoning",
        &["Series completion", "Blood relations", "Syllogisms"],
        palette,
    ));
    lines.extend(section(
        "Verbal ability",
        &["Reading comprehension", "Sentence correction"],
        palette,
    ));
    lines.push(Line::from(
        "Generated practice sets are waiting in Mock Exam [5].",
    ));
    lines
}
