use anyhow::Result;

use crate::cli::edit::resolve_or_report;
use crate::cli::ui::{confirm, status};
use crate::platform::{Clock, IdGenerator};
use crate::session::NoteSession;
use crate::store::KeyValueStore;

/// Execute the delete command
pub fn run_delete<S, C, I>(session: &mut NoteSession<S, C, I>, query: &str) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let Some(id) = resolve_or_report(session, query) else {
        return Ok(());
    };

    if session.delete(&id)? {
        status("Deleted.");
    }
    Ok(())
}

/// Drop every note and the stored slot. Asks first unless `yes` is set.
pub fn run_reset<S, C, I>(session: &mut NoteSession<S, C, I>, yes: bool) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let count = session.notes().len();
    if !yes && !confirm(&format!("Delete all {} notes?", count))? {
        return Ok(());
    }

    session.clear()?;
    status("Cleared.");
    Ok(())
}
