//! Pure view builders for the chip row, input line, and detail line.
//!
//! `chip_row` also produces a `ChipLayout` recording which terminal
//! columns each chip occupies, so mouse coordinates can be mapped back to
//! a chip index for click removal and hover.

use crate::ui::theme::colors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Chip labels longer than this are truncated with an ellipsis; the full
/// text stays reachable through the detail line.
pub const MAX_LABEL_WIDTH: usize = 24;

const REMOVE_MARK: &str = "✕";

/// Column spans of the rendered chips, for mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipLayout {
    row: u16,
    spans: Vec<(u16, u16, usize)>,
}

impl ChipLayout {
    pub fn empty() -> Self {
        Self {
            row: 0,
            spans: vec![],
        }
    }

    /// Chip index under the given terminal cell, if any. Spans are
    /// half-open `[start, end)` column ranges on the chip row.
    pub fn chip_at(&self, column: u16, row: u16) -> Option<usize> {
        if row != self.row {
            return None;
        }
        self.spans
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&column))
            .map(|&(_, _, index)| index)
    }
}

/// Build the chip row line and its hit-test layout for the given area.
///
/// Chips that do not fit the width are elided behind a `+N` marker rather
/// than wrapped; elided chips are not clickable.
pub fn chip_row(tokens: &[String], disabled: bool, area: Rect) -> (Line<'static>, ChipLayout) {
    let chip_style = if disabled {
        Style::default().fg(colors::dimmed()).bg(colors::chip())
    } else {
        // the "active" affordance only applies while removal is possible
        Style::default()
            .fg(colors::chip_text())
            .bg(colors::chip())
            .add_modifier(Modifier::BOLD)
    };
    let dim = Style::default().fg(colors::dimmed());

    let mut spans = Vec::new();
    let mut hit_spans = Vec::new();
    let mut col = area.x;
    let right_edge = area.x + area.width;

    for (index, token) in tokens.iter().enumerate() {
        let label = truncate_label(token, MAX_LABEL_WIDTH);
        let text = format!(" {label} {REMOVE_MARK} ");
        let width = UnicodeWidthStr::width(text.as_str()) as u16;
        if col + width > right_edge {
            let hidden = tokens.len() - index;
            spans.push(Span::styled(format!("+{hidden}"), dim));
            break;
        }
        spans.push(Span::styled(text, chip_style));
        hit_spans.push((col, col + width, index));
        spans.push(Span::raw(" "));
        col += width + 1;
    }

    (
        Line::from(spans),
        ChipLayout {
            row: area.y,
            spans: hit_spans,
        },
    )
}

/// The pending-text input line with its prompt.
pub fn input_line(pending: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("❯ ", Style::default().fg(colors::accent())),
        Span::styled(pending.to_string(), Style::default().fg(colors::text())),
    ])
}

/// Bottom line: the hovered chip's full text (the tooltip analog), or a
/// key hint when nothing is hovered.
pub fn detail_line(tokens: &[String], hovered: Option<usize>, disabled: bool) -> Line<'static> {
    if let Some(text) = hovered.and_then(|i| tokens.get(i)) {
        return Line::from(vec![
            Span::styled("chip: ", Style::default().fg(colors::dimmed())),
            Span::styled(text.clone(), Style::default().fg(colors::chip_text())),
        ]);
    }
    let hint = if disabled {
        "Enter/Space/,/;/Tab adds · removal disabled · Esc quits"
    } else {
        "Enter/Space/,/;/Tab adds · Backspace removes last · click a chip to remove · Esc quits"
    };
    Line::from(Span::styled(hint, Style::default().fg(colors::dimmed())))
}

fn truncate_label(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut label = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = UnicodeWidthStr::width(grapheme);
        if used + width > max_width.saturating_sub(1) {
            break;
        }
        label.push_str(grapheme);
        used += width;
    }
    label.push('…');
    label
}
