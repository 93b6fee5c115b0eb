use anyhow::Result;

use crate::cli::ui::{status, text_input};
use crate::platform::{Clock, IdGenerator};
use crate::session::{NoteSession, SubmitOutcome};
use crate::store::KeyValueStore;

/// Execute the add command. With no words given, prompts for the text.
pub fn run_add<S, C, I>(session: &mut NoteSession<S, C, I>, words: &[String]) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let text = if words.is_empty() {
        match text_input("note:", "")? {
            Some(t) => t,
            None => return Ok(()),
        }
    } else {
        words.join(" ")
    };

    session.set_draft(&text);
    status(match session.submit()? {
        SubmitOutcome::Ignored => "Empty.",
        _ => "Saved.",
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, SequentialIds};
    use crate::store::MemoryStore;

    #[test]
    fn test_add_words() {
        let mut session =
            NoteSession::open(MemoryStore::new(), ManualClock::at(0), SequentialIds::default());
        run_add(&mut session, &["Buy".to_string(), "milk".to_string()]).unwrap();
        assert_eq!(session.notes().len(), 1);
        assert_eq!(session.notes()[0].text, "Buy milk");
    }

    #[test]
    fn test_add_blank_words() {
        let mut session =
            NoteSession::open(MemoryStore::new(), ManualClock::at(0), SequentialIds::default());
        run_add(&mut session, &["  ".to_string()]).unwrap();
        assert!(session.notes().is_empty());
    }
}
