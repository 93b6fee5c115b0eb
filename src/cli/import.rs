use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ui::{status, warning};
use crate::platform::{Clock, IdGenerator};
use crate::session::NoteSession;
use crate::notes::normalize;
use crate::store::{decode_notes, KeyValueStore};

/// Replace all notes with the contents of a JSON export
pub fn run_import<S, C, I>(session: &mut NoteSession<S, C, I>, path: &Path) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let Some(notes) = decode_notes(&raw) else {
        warning(&format!("{} is not a notes export, nothing imported", path.display()));
        return Ok(());
    };

    let notes = normalize(notes);
    if notes.is_empty() && !session.notes().is_empty() {
        warning(&format!(
            "{} holds no usable notes, nothing imported. Use 'notecmd reset' to clear.",
            path.display()
        ));
        return Ok(());
    }

    let count = session.import(notes)?;
    status(&format!("Imported {} notes.", count));
    Ok(())
}
