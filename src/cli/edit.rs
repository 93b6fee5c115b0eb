use anyhow::Result;

use crate::cli::ui::{status, text_input};
use crate::error::NoteError;
use crate::notes::resolve_id;
use crate::platform::{Clock, IdGenerator};
use crate::session::{NoteSession, SubmitOutcome};
use crate::store::KeyValueStore;

/// Execute the edit command. With no words given, prompts with the current text.
pub fn run_edit<S, C, I>(
    session: &mut NoteSession<S, C, I>,
    query: &str,
    words: &[String],
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let Some(id) = resolve_or_report(session, query) else {
        return Ok(());
    };

    session.start_edit(&id);

    let text = if words.is_empty() {
        match text_input("edit:", &session.form().draft)? {
            Some(t) => t,
            None => return Ok(()),
        }
    } else {
        words.join(" ")
    };

    session.set_draft(&text);
    status(match session.submit()? {
        SubmitOutcome::Ignored => "Empty.",
        SubmitOutcome::Discarded => "No match.",
        _ => "Saved.",
    });
    Ok(())
}

/// Resolve an id or id prefix, printing why when it cannot be resolved
pub(crate) fn resolve_or_report<S, C, I>(
    session: &NoteSession<S, C, I>,
    query: &str,
) -> Option<String>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    match resolve_id(session.notes(), query) {
        Ok(note) => Some(note.id.clone()),
        Err(NoteError::NotFound(_)) => {
            status("No match.");
            None
        }
        Err(e @ NoteError::Ambiguous { .. }) => {
            status(&format!("{}. Use more of the id.", e));
            None
        }
    }
}
