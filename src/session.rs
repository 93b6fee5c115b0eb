//! The note session: note list, form state, and persistence in one owner
//!
//! Every intent runs to completion (state change, then save) before it
//! returns. The in-memory list is authoritative; the store only ever receives
//! full snapshots of it.

use log::{debug, info};

use crate::error::StoreError;
use crate::models::Note;
use crate::notes::{add_note, find_note, normalize, remove_note, update_note};
use crate::platform::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::store::{KeyValueStore, NoteStore};

/// Which note, if any, the form is bound to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(String),
}

/// Transient input state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub draft: String,
    pub mode: FormMode,
}

impl FormState {
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Editing(id) => Some(id.as_str()),
            FormMode::Creating => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Label of the submit action for the current mode
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Add Note",
            FormMode::Editing(_) => "Update Note",
        }
    }

    fn reset(&mut self) {
        self.draft.clear();
        self.mode = FormMode::Creating;
    }
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was empty after trimming; nothing changed
    Ignored,
    Added(String),
    Updated(String),
    /// The edit target no longer exists; the form was reset
    Discarded,
}

pub struct NoteSession<S, C = SystemClock, I = UuidGenerator> {
    store: NoteStore<S>,
    notes: Vec<Note>,
    form: FormState,
    clock: C,
    ids: I,
}

impl<S: KeyValueStore> NoteSession<S> {
    /// Session on the real clock with random ids
    pub fn open_default(backend: S) -> Self {
        Self::open(backend, SystemClock, UuidGenerator)
    }
}

impl<S: KeyValueStore, C: Clock, I: IdGenerator> NoteSession<S, C, I> {
    /// Load the persisted list once and start in create mode.
    pub fn open(backend: S, clock: C, ids: I) -> Self {
        let store = NoteStore::new(backend);
        let notes = store.load();
        info!("loaded {} notes", notes.len());

        Self {
            store,
            notes,
            form: FormState::default(),
            clock,
            ids,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current time on the session's clock
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn into_store(self) -> NoteStore<S> {
        self.store
    }

    pub fn set_draft(&mut self, text: &str) {
        self.form.draft = text.to_string();
    }

    /// Commit the draft: add in create mode, update in edit mode.
    pub fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.form.draft.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let outcome = match self.form.mode.clone() {
            FormMode::Creating => {
                let next = add_note(&self.notes, &self.form.draft, &self.clock, &self.ids);
                let id = next[0].id.clone();
                self.form.reset();
                self.commit(next)?;
                SubmitOutcome::Added(id)
            }
            FormMode::Editing(id) => {
                let exists = find_note(&self.notes, &id).is_some();
                let next = update_note(&self.notes, &id, &self.form.draft, &self.clock);
                self.form.reset();
                self.commit(next)?;
                if exists {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Discarded
                }
            }
        };

        debug!("submit: {:?}", outcome);
        Ok(outcome)
    }

    /// Bind the form to `id`, replacing the draft with its text.
    /// Returns false (and changes nothing) when no such note exists.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let Some(note) = find_note(&self.notes, id) else {
            return false;
        };

        self.form.draft = note.text.clone();
        self.form.mode = FormMode::Editing(note.id.clone());
        true
    }

    /// Remove `id`; resets the form if it was being edited. Returns whether a note was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.form.editing_id() == Some(id) {
            self.form.reset();
        }

        let next = remove_note(&self.notes, id);
        self.commit(next)
    }

    /// Replace the whole list with an external one. Returns the number of notes kept.
    pub fn import(&mut self, notes: Vec<Note>) -> Result<usize, StoreError> {
        self.notes = normalize(notes);
        self.form.reset();
        self.store.save(&self.notes)?;
        Ok(self.notes.len())
    }

    /// Forget every note and drop the persisted slot.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.notes.clear();
        self.form.reset();
        self.store.clear()
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<bool, StoreError> {
        if next == self.notes {
            return Ok(false);
        }

        self.notes = next;
        self.store.save(&self.notes)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, SequentialIds};
    use crate::store::{MemoryStore, STORAGE_KEY};

    fn session() -> NoteSession<MemoryStore, ManualClock, SequentialIds> {
        NoteSession::open(MemoryStore::new(), ManualClock::at(1_000), SequentialIds::new("n"))
    }

    fn submit_text<S: KeyValueStore, C: Clock, I: IdGenerator>(
        session: &mut NoteSession<S, C, I>,
        text: &str,
    ) -> SubmitOutcome {
        session.set_draft(text);
        session.submit().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert!(s.notes().is_empty());
        assert_eq!(s.form(), &FormState::default());
        assert_eq!(s.form().submit_label(), "Add Note");
    }

    #[test]
    fn test_open_loads_persisted_notes() {
        let raw = r#"[{"id":"x","text":"kept","createdAt":1,"updatedAt":2}]"#;
        let s = NoteSession::open(
            MemoryStore::with_value(STORAGE_KEY, raw),
            ManualClock::at(0),
            SequentialIds::default(),
        );
        assert_eq!(s.notes().len(), 1);
        assert_eq!(s.notes()[0].text, "kept");
    }

    #[test]
    fn test_open_with_corrupt_slot() {
        let s = NoteSession::open(
            MemoryStore::with_value(STORAGE_KEY, "not json"),
            ManualClock::at(0),
            SequentialIds::default(),
        );
        assert!(s.notes().is_empty());
    }

    #[test]
    fn test_submit_empty_is_ignored() {
        let mut s = session();
        assert_eq!(submit_text(&mut s, "   "), SubmitOutcome::Ignored);
        assert!(s.notes().is_empty());
        assert_eq!(s.form().draft, "   ");
        // Nothing was written
        assert_eq!(s.store().backend().raw(STORAGE_KEY), None);
    }

    #[test]
    fn test_submit_persists() {
        let mut s = session();
        assert_eq!(submit_text(&mut s, "Buy milk"), SubmitOutcome::Added("n1".to_string()));
        assert_eq!(s.form().draft, "");
        assert_eq!(s.store().load(), s.notes());
    }

    #[test]
    fn test_edit_scenario() {
        let mut s = session();
        submit_text(&mut s, "Buy milk");
        let note = s.notes()[0].clone();
        assert_eq!(note.text, "Buy milk");

        assert!(s.start_edit(&note.id));
        assert_eq!(s.form().draft, "Buy milk");
        assert_eq!(s.form().editing_id(), Some(note.id.as_str()));
        assert_eq!(s.form().submit_label(), "Update Note");

        s.clock.advance(5_000);
        assert_eq!(
            submit_text(&mut s, "Buy milk and eggs"),
            SubmitOutcome::Updated(note.id.clone())
        );

        assert_eq!(s.notes().len(), 1);
        let edited = &s.notes()[0];
        assert_eq!(edited.id, note.id);
        assert_eq!(edited.text, "Buy milk and eggs");
        assert_eq!(edited.created_at, note.created_at);
        assert!(edited.updated_at > note.updated_at);
        assert_eq!(s.form(), &FormState::default());
        assert_eq!(s.store().load(), s.notes());
    }

    #[test]
    fn test_empty_submit_keeps_edit_mode() {
        let mut s = session();
        submit_text(&mut s, "Buy milk");
        let id = s.notes()[0].id.clone();
        s.start_edit(&id);

        assert_eq!(submit_text(&mut s, "  "), SubmitOutcome::Ignored);
        assert_eq!(s.form().editing_id(), Some(id.as_str()));
        assert_eq!(s.notes()[0].text, "Buy milk");
    }

    #[test]
    fn test_switching_edit_target_replaces_draft() {
        let mut s = session();
        submit_text(&mut s, "one");
        submit_text(&mut s, "two");
        let (two, one) = (s.notes()[0].id.clone(), s.notes()[1].id.clone());

        s.start_edit(&one);
        s.set_draft("one, half edited");
        s.start_edit(&two);
        assert_eq!(s.form().draft, "two");
        assert_eq!(s.form().editing_id(), Some(two.as_str()));
        assert_eq!(s.notes()[1].text, "one");
    }

    #[test]
    fn test_start_edit_unknown_id() {
        let mut s = session();
        s.set_draft("typing");
        assert!(!s.start_edit("missing"));
        assert_eq!(s.form().draft, "typing");
        assert!(!s.is_editing());
    }

    #[test]
    fn test_delete_note_being_edited() {
        let mut s = session();
        submit_text(&mut s, "keep me");
        submit_text(&mut s, "delete me");
        let keep = s.notes()[1].clone();
        let doomed = s.notes()[0].id.clone();

        s.start_edit(&doomed);
        assert!(s.delete(&doomed).unwrap());

        assert_eq!(s.form(), &FormState::default());
        assert_eq!(s.notes(), &[keep]);
        assert_eq!(s.store().load(), s.notes());
    }

    #[test]
    fn test_delete_other_note_keeps_edit() {
        let mut s = session();
        submit_text(&mut s, "a");
        submit_text(&mut s, "b");
        let (b, a) = (s.notes()[0].id.clone(), s.notes()[1].id.clone());

        s.start_edit(&a);
        s.delete(&b).unwrap();
        assert_eq!(s.form().editing_id(), Some(a.as_str()));
        assert_eq!(s.form().draft, "a");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut s = session();
        submit_text(&mut s, "only");
        let id = s.notes()[0].id.clone();

        assert!(s.delete(&id).unwrap());
        assert!(!s.delete(&id).unwrap());
        assert!(s.notes().is_empty());
        // The empty list is persisted, not left stale
        assert_eq!(s.store().backend().raw(STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_state_survives_reopen() {
        let mut s = session();
        submit_text(&mut s, "first");
        submit_text(&mut s, "second");
        let before = s.notes().to_vec();

        let backend = s.into_store().into_backend();
        let reopened = NoteSession::open(backend, ManualClock::at(0), SequentialIds::new("m"));
        assert_eq!(reopened.notes(), before.as_slice());
        assert_eq!(reopened.form(), &FormState::default());
    }

    #[test]
    fn test_import_and_clear() {
        let mut s = session();
        submit_text(&mut s, "old");

        let incoming = vec![
            Note::new("x".to_string(), " imported ".to_string(), 5),
            Note::new("x".to_string(), "dup".to_string(), 6),
        ];
        assert_eq!(s.import(incoming).unwrap(), 1);
        assert_eq!(s.notes()[0].text, "imported");
        assert_eq!(s.store().load(), s.notes());

        s.clear().unwrap();
        assert!(s.notes().is_empty());
        assert_eq!(s.store().backend().raw(STORAGE_KEY), None);
    }
}
