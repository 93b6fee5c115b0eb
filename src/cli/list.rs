use anyhow::Result;

use crate::cli::ui::term_width;
use crate::cli::view::render;
use crate::platform::{Clock, IdGenerator};
use crate::session::NoteSession;
use crate::store::KeyValueStore;

/// Execute the list command: the rendered view, or the notes as JSON
pub fn run_list<S, C, I>(session: &NoteSession<S, C, I>, json: bool) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    if json {
        println!("{}", serde_json::to_string_pretty(session.notes())?);
        return Ok(());
    }

    for line in render(session.notes(), session.form(), term_width(), session.now_millis(), None) {
        println!("{}", line.text());
    }
    Ok(())
}

/// Execute the export command: the persisted slot exactly as stored
pub fn run_export<S, C, I>(session: &NoteSession<S, C, I>) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let raw = session.store().export()?.unwrap_or_else(|| "[]".to_string());
    println!("{}", raw);
    Ok(())
}
