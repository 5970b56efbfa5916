//! Mock exam over the prefetched batch.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::app::PrefetchStatus;
use crate::models::MAX_OPTIONS;
use crate::ui::theme::{Palette, COLOR_ERROR, COLOR_SUCCESS};
use crate::view_state::ShellViewState;

pub const MARKER: &str = "MOCK EXAM";

pub const EMPTY_TEXT: &str = "No questions yet";

const OPTION_KEYS: [char; MAX_OPTIONS] = ['a', 'b', 'c', 'd'];

pub fn lines<'a>(state: &ShellViewState<'a>, palette: &Palette) -> Vec<Line<'a>> {
    if state.batch.is_empty() {
        return empty_lines(&state.prefetch, palette);
    }
    if state.exam.finished {
        return summary_lines(state, palette);
    }

    let exam = state.exam;
    let Some(question) = state.batch.get(exam.current) else {
        return empty_lines(&state.prefetch, palette);
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Question {} of {}", exam.current + 1, state.batch.len()),
                palette.dim(),
            ),
            Span::styled(
                format!("   score {}/{}", exam.correct, exam.answered),
                palette.dim(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            question.question.as_str(),
            palette.base().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, option) in question.options.iter().enumerate() {
        let key = OPTION_KEYS.get(index).copied().unwrap_or(' ');
        let style = match exam.selected {
            Some(_) if question.is_correct(index) => palette.base().fg(COLOR_SUCCESS),
            Some(chosen) if chosen == index => palette.base().fg(COLOR_ERROR),
            _ => palette.base(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  ({}) ", key), palette.title()),
            Span::styled(option.as_str(), style),
        ]));
    }

    if let Some(chosen) = exam.selected {
        lines.push(Line::from(""));
        let verdict = if question.is_correct(chosen) {
            Span::styled("Correct.", palette.base().fg(COLOR_SUCCESS))
        } else {
            Span::styled(
                format!(
                    "Not quite. Answer: {}",
                    question.correct_option().unwrap_or_default()
                ),
                palette.base().fg(COLOR_ERROR),
            )
        };
        lines.push(Line::from(verdict));
        if !question.explanation.is_empty() {
            lines.push(Line::from(Span::styled(
                question.explanation.as_str(),
                palette.dim(),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[a-d] answer  [n] next  [r] new set",
        palette.dim(),
    )));
    lines
}

fn empty_lines<'a>(prefetch: &PrefetchStatus, palette: &Palette) -> Vec<Line<'a>> {
    let status = match prefetch {
        PrefetchStatus::Pending { .. } => "A fresh aptitude set is being generated.".to_string(),
        PrefetchStatus::Failed { reason } => reason.clone(),
        PrefetchStatus::Idle => "Press [r] to generate an aptitude set.".to_string(),
    };
    vec![
        Line::from(Span::styled(EMPTY_TEXT, palette.base().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(status, palette.dim())),
        Line::from(""),
        Line::from(Span::styled("[r] fetch a set", palette.dim())),
    ]
}

fn summary_lines<'a>(state: &ShellViewState<'a>, palette: &Palette) -> Vec<Line<'a>> {
    let pending = matches!(state.prefetch, PrefetchStatus::Pending { .. });
    vec![
        Line::from(Span::styled(
            format!(
                "Set complete: {} of {} correct",
                state.exam.correct,
                state.batch.len()
            ),
            palette.title(),
        )),
        Line::from(Span::styled(
            if pending {
                "Loading the next set..."
            } else {
                "Press [r] for another set."
            },
            palette.dim(),
        )),
    ]
}
