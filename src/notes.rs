//! Pure operations over the note list
//!
//! Every function takes the current list and returns a new one; nothing here
//! touches storage. The list is ordered newest-created first.

use std::collections::HashSet;

use crate::error::NoteError;
use crate::models::Note;
use crate::platform::{Clock, IdGenerator};

/// Prepend a new note. Whitespace-only text leaves the list unchanged.
pub fn add_note(
    existing: &[Note],
    text: &str,
    clock: &impl Clock,
    ids: &impl IdGenerator,
) -> Vec<Note> {
    let text = text.trim();
    if text.is_empty() {
        return existing.to_vec();
    }

    let note = Note::new(ids.next_id(), text.to_string(), clock.now_millis());
    let mut notes = Vec::with_capacity(existing.len() + 1);
    notes.push(note);
    notes.extend_from_slice(existing);
    notes
}

/// Replace the text of the note with `id`, keeping its position and creation time.
/// No-op for whitespace-only text or an unknown id.
pub fn update_note(existing: &[Note], id: &str, text: &str, clock: &impl Clock) -> Vec<Note> {
    let text = text.trim();
    if text.is_empty() {
        return existing.to_vec();
    }

    let now = clock.now_millis();
    existing
        .iter()
        .map(|note| {
            if note.id == id {
                Note {
                    text: text.to_string(),
                    // updated_at never precedes created_at, even if the clock stepped back
                    updated_at: now.max(note.created_at),
                    ..note.clone()
                }
            } else {
                note.clone()
            }
        })
        .collect()
}

/// Drop the note with `id`. Missing ids are fine.
pub fn remove_note(existing: &[Note], id: &str) -> Vec<Note> {
    existing.iter().filter(|n| n.id != id).cloned().collect()
}

/// Bring an externally supplied list in line with the note invariants:
/// text trimmed and non-empty, ids unique (first wins), `updated_at >= created_at`.
pub fn normalize(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter_map(|mut note| {
            let text = note.text.trim().to_string();
            if text.is_empty() || note.id.is_empty() || !seen.insert(note.id.clone()) {
                return None;
            }
            note.text = text;
            note.updated_at = note.updated_at.max(note.created_at);
            Some(note)
        })
        .collect()
}

pub fn find_note<'a>(notes: &'a [Note], id: &str) -> Option<&'a Note> {
    notes.iter().find(|n| n.id == id)
}

/// Resolve user input to a note: exact id first, then a unique id prefix.
pub fn resolve_id<'a>(notes: &'a [Note], query: &str) -> Result<&'a Note, NoteError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(NoteError::NotFound(String::new()));
    }

    if let Some(note) = find_note(notes, query) {
        return Ok(note);
    }

    let lowered = query.to_lowercase();
    let matches: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id.to_lowercase().starts_with(&lowered))
        .collect();

    match matches.len() {
        0 => Err(NoteError::NotFound(query.to_string())),
        1 => Ok(matches[0]),
        count => Err(NoteError::Ambiguous {
            query: query.to_string(),
            count,
        }),
    }
}
