//! Rendering of the note list and form
//!
//! Pure functions of (notes, form) to lines; the board and `list` command
//! decide how to print them.

use chrono::{DateTime, Datelike, Local};

use crate::cli::ui::{selection_prefix, single_line, truncate};
use crate::models::{Note, SHORT_ID_LEN};
use crate::session::FormState;

pub const EMPTY_PLACEHOLDER: &str = "No notes yet.";

/// One rendered line; `Selected` rows are drawn highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLine {
    Plain(String),
    Selected(String),
}

impl ViewLine {
    pub fn text(&self) -> &str {
        match self {
            ViewLine::Plain(s) | ViewLine::Selected(s) => s,
        }
    }
}

/// Column widths for note rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteLayout {
    pub id_width: usize,
    pub text_width: usize,
    pub age_width: usize,
}

impl NoteLayout {
    pub fn for_width(term_width: usize) -> Self {
        let id_width = SHORT_ID_LEN;
        let age_width = 10;
        // prefix(2) + marker(2) + two column gaps(4)
        let fixed = 2 + 2 + id_width + age_width + 4;
        let text_width = term_width.saturating_sub(fixed).clamp(20, 100);

        Self {
            id_width,
            text_width,
            age_width,
        }
    }
}

/// The form as one line: mode, draft, and the submit label
pub fn form_line(form: &FormState) -> String {
    let draft = if form.draft.is_empty() {
        "Enter a note".to_string()
    } else {
        single_line(&form.draft)
    };

    match form.editing_id() {
        Some(id) => format!(
            "editing {}: {}  [{}]",
            id.chars().take(SHORT_ID_LEN).collect::<String>(),
            draft,
            form.submit_label()
        ),
        None => format!("new: {}  [{}]", draft, form.submit_label()),
    }
}

/// A single note row: `> * 0f8fad5b  text…  5m ago`
pub fn note_row(
    note: &Note,
    layout: &NoteLayout,
    now_millis: i64,
    selected: bool,
    editing: bool,
) -> String {
    let marker = if editing { "* " } else { "  " };
    let text = truncate(&single_line(&note.text), layout.text_width);
    let mut age = format_age(now_millis, note.updated_at);
    if note.is_edited() {
        age.push_str(" (edited)");
    }

    format!(
        "{}{}{:<id_w$}  {:<text_w$}  {}",
        selection_prefix(selected),
        marker,
        note.short_id(),
        text,
        age,
        id_w = layout.id_width,
        text_w = layout.text_width,
    )
    .trim_end()
    .to_string()
}

/// Full screen body: header, form, column header, rows or placeholder
pub fn render(
    notes: &[Note],
    form: &FormState,
    term_width: usize,
    now_millis: i64,
    selected: Option<usize>,
) -> Vec<ViewLine> {
    let layout = NoteLayout::for_width(term_width);
    let mut lines = Vec::with_capacity(notes.len() + 5);

    lines.push(ViewLine::Plain(format!("NOTES ({})", notes.len())));
    lines.push(ViewLine::Plain(form_line(form)));
    lines.push(ViewLine::Plain(String::new()));

    if notes.is_empty() {
        lines.push(ViewLine::Plain(format!("  {}", EMPTY_PLACEHOLDER)));
        return lines;
    }

    lines.push(ViewLine::Plain(format!(
        "    {:<id_w$}  {:<text_w$}  UPDATED",
        "ID",
        "NOTE",
        id_w = layout.id_width,
        text_w = layout.text_width,
    )));

    let editing_id = form.editing_id();
    for (idx, note) in notes.iter().enumerate() {
        let is_selected = selected == Some(idx);
        let is_editing = editing_id == Some(note.id.as_str());
        let row = note_row(note, &layout, now_millis, is_selected, is_editing);
        lines.push(if is_selected {
            ViewLine::Selected(row)
        } else {
            ViewLine::Plain(row)
        });
    }

    lines
}

/// Relative age for recent timestamps, a short date otherwise
pub fn format_age(now_millis: i64, then_millis: i64) -> String {
    let secs = now_millis.saturating_sub(then_millis).max(0) / 1000;

    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        86_400..=604_799 => format!("{}d ago", secs / 86_400),
        _ => match DateTime::from_timestamp_millis(then_millis) {
            Some(dt) => format_short_date(dt.with_timezone(&Local), now_millis),
            None => "?".to_string(),
        },
    }
}

fn format_short_date(dt: DateTime<Local>, now_millis: i64) -> String {
    let this_year = DateTime::from_timestamp_millis(now_millis)
        .map(|now| now.with_timezone(&Local).year())
        .unwrap_or_else(|| dt.year());

    if dt.year() == this_year {
        dt.format("%b %-d").to_string()
    } else {
        dt.format("%b %-d, %Y").to_string()
    }
}
