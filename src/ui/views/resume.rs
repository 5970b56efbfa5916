use ratatui::text::Line;

use super::section;
use crate::ui::theme::Palette;

pub const MARKER: &str = "RESUME BUILDER";

pub fn lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(section(
        "Sections",
        &[
            "Contact and links",
            "Summary",
            "Education",
            "Projects",
            "Experience",
            "Skills",
        ],
        palette,
    ));
    lines.extend(section(
        "ATS checklist",
        &[
            "One column, standard headings",
            "Quantify impact in every bullet",
            "Mirror keywords from the job description",
        ],
        palette,
    ));
    lines
}
