//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;

/// Spinner frames for the loading fallback
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner advances every this many ticks (16 ms each)
const TICKS_PER_FRAME: u64 = 5;

pub fn spinner_frame(tick_count: u64) -> &'static str {
    let index = (tick_count / TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate a string to approximately max_len bytes, adding "..." if truncated.
/// Safely handles UTF-8 by finding the nearest char boundary.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(TICKS_PER_FRAME), SPINNER_FRAMES[1]);
        let full_cycle = TICKS_PER_FRAME * SPINNER_FRAMES.len() as u64;
        assert_eq!(spinner_frame(full_cycle), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(area, 40, 4);
        assert_eq!(r.width, 20);
        assert_eq!(r.height, 4);
        assert_eq!(r.y, 3);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("short", 10), "short");
        let out = truncate_string("résumé résumé résumé", 8);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 8);
    }
}
