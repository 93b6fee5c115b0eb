//! Interactive note board
//!
//! Draws the list and form, and turns key presses into the three session
//! intents: submit, start-edit, delete.

use anyhow::{anyhow, Result};
use crossterm::{
    event::KeyCode,
    style::{Attribute, SetAttribute},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};

use crate::cli::ui::{
    clear_screen, confirm, read_key, show_help, term_width, text_input, truncate, StatusBar,
};
use crate::cli::view::{render, ViewLine};
use crate::platform::{Clock, IdGenerator};
use crate::session::{NoteSession, SubmitOutcome};
use crate::store::KeyValueStore;

/// What a key press asks the board to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardAction {
    Up,
    Down,
    First,
    Last,
    Write,
    Edit,
    Delete,
    Help,
    Quit,
    Ignore,
}

impl BoardAction {
    fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Home | KeyCode::Char('g') => Self::First,
            KeyCode::End | KeyCode::Char('G') => Self::Last,
            KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('n') => Self::Write,
            KeyCode::Char('e') => Self::Edit,
            KeyCode::Char('d') | KeyCode::Delete => Self::Delete,
            KeyCode::Char('?') => Self::Help,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            _ => Self::Ignore,
        }
    }
}

/// Run the board until the user quits
pub fn run_board<S, C, I>(session: &mut NoteSession<S, C, I>) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    // TTY check: the board needs a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive board requires a terminal. Use subcommands for non-interactive use:\n  \
            notecmd list\n  \
            notecmd add <text>\n  \
            Run 'notecmd --help' for all options."
        ));
    }

    let mut selected_idx: usize = 0;
    let mut message: Option<&'static str> = None;

    loop {
        let count = session.notes().len();
        selected_idx = clamp_selection(selected_idx, count);

        draw(session, selected_idx, message.take())?;

        match BoardAction::from_key(read_key()?) {
            BoardAction::Quit => return Ok(()),
            BoardAction::Up => selected_idx = selected_idx.saturating_sub(1),
            BoardAction::Down => {
                if count > 0 && selected_idx < count - 1 {
                    selected_idx += 1;
                }
            }
            BoardAction::First => selected_idx = 0,
            BoardAction::Last => selected_idx = count.saturating_sub(1),
            BoardAction::Write => {
                let outcome = write_draft(session)?;
                if matches!(outcome, Some(SubmitOutcome::Added(_))) {
                    selected_idx = 0;
                }
                message = outcome.as_ref().and_then(feedback);
            }
            BoardAction::Edit => {
                let Some(id) = session.notes().get(selected_idx).map(|n| n.id.clone()) else {
                    continue;
                };
                if session.start_edit(&id) {
                    message = write_draft(session)?.as_ref().and_then(feedback);
                }
            }
            BoardAction::Delete => {
                let Some(note) = session.notes().get(selected_idx).cloned() else {
                    continue;
                };
                let _ = clear_screen();
                if confirm(&format!("Delete \"{}\"?", truncate(&note.text, 40)))? {
                    session.delete(&note.id)?;
                    message = Some("Deleted.");
                }
            }
            BoardAction::Help => show_help()?,
            BoardAction::Ignore => {}
        }
    }
}

fn clamp_selection(selected: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        selected.min(count - 1)
    }
}

fn draw<S, C, I>(
    session: &NoteSession<S, C, I>,
    selected_idx: usize,
    message: Option<&str>,
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    clear_screen()?;
    let mut stdout = io::stdout();

    let notes = session.notes();
    let selected = if notes.is_empty() { None } else { Some(selected_idx) };

    for line in render(notes, session.form(), term_width(), session.now_millis(), selected) {
        match line {
            ViewLine::Plain(text) => println!("{}", text),
            ViewLine::Selected(text) => {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
                print!("{}", text);
                stdout.execute(SetAttribute(Attribute::Reset))?;
                println!();
            }
        }
    }

    println!();
    if let Some(msg) = message {
        println!("{}", msg);
    }

    let status = StatusBar::new()
        .counter(if notes.is_empty() { 0 } else { selected_idx + 1 }, notes.len())
        .action("a", write_label(session.is_editing()))
        .action("e", "dit")
        .action("d", "el")
        .action("↑/↓", "")
        .action("?", "")
        .action("q", "uit")
        .render();
    println!("{}", status);
    stdout.flush()?;
    Ok(())
}

/// Prompt with the current draft and submit it. Esc leaves the form untouched.
fn write_draft<S, C, I>(session: &mut NoteSession<S, C, I>) -> Result<Option<SubmitOutcome>>
where
    S: KeyValueStore,
    C: Clock,
    I: IdGenerator,
{
    let prompt = if session.is_editing() { "edit:" } else { "note:" };
    let draft = session.form().draft.clone();

    let _ = clear_screen();
    let Some(text) = text_input(prompt, &draft)? else {
        return Ok(None);
    };

    session.set_draft(&text);
    Ok(Some(session.submit()?))
}

/// Status bar label for the `a` key: `[a]dd`, or `[a] update` while editing
fn write_label(editing: bool) -> &'static str {
    if editing {
        " update"
    } else {
        "dd"
    }
}

fn feedback(outcome: &SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Added(_) | SubmitOutcome::Updated(_) => Some("Saved."),
        SubmitOutcome::Discarded => Some("Note no longer exists."),
        SubmitOutcome::Ignored => None,
    }
}
