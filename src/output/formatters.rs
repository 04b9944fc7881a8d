//! Formatting utilities for terminal output

use crate::core::PositionalConstraint;
use std::collections::BTreeMap;

/// Widest pattern rendered slot by slot, one row of a Scrabble board
pub const BOARD_WIDTH: usize = 15;

/// Render constraints as a board slot pattern, e.g. `A _ T`
///
/// Slots without a constraint show `_`; slots with conflicting letters show `*`.
/// Constraints reaching past `BOARD_WIDTH` are listed as `A@1 T@30` instead.
#[must_use]
pub fn constraint_pattern(constraints: &[PositionalConstraint]) -> String {
    // Position → letter, `None` when two constraints disagree
    let mut slots: BTreeMap<usize, Option<char>> = BTreeMap::new();
    for constraint in constraints {
        slots
            .entry(constraint.position())
            .and_modify(|slot| {
                if *slot != Some(constraint.letter()) {
                    *slot = None;
                }
            })
            .or_insert(Some(constraint.letter()));
    }

    let reach = slots.keys().next_back().copied().unwrap_or(0);
    let show = |slot: Option<char>| slot.unwrap_or('*');

    if reach > BOARD_WIDTH {
        return slots
            .iter()
            .map(|(position, &slot)| format!("{}@{position}", show(slot)))
            .collect::<Vec<_>>()
            .join(" ");
    }

    (1..=reach)
        .map(|position| slots.get(&position).map_or('_', |&slot| show(slot)))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in left-aligned columns fitting `width` characters
#[must_use]
pub fn columns(words: &[String], width: usize) -> Vec<String> {
    let widest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let column_width = widest + 2;
    let per_row = (width / column_width).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<column_width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Current terminal width, 80 when it cannot be determined
#[must_use]
pub fn terminal_width() -> usize {
    crossterm::terminal::size().map_or(80, |(w, _)| usize::from(w))
}
