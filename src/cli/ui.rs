//! Shared terminal primitives
//!
//! Conventions:
//! - Prompts: lowercase with colon: `note:`
//! - Navigation hints: arrows in brackets: `[↑/↓]`
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, Text};
use std::io::{self, Write};

// ============================================================================
// Status Bar
// ============================================================================

/// Maximum actions a status bar can hold
const MAX_STATUS_ACTIONS: usize = 10;

/// Builder for the bottom status line.
///
/// Example output: "2/7  [a]dd [e]dit [d]el [q]uit"
pub struct StatusBar<'a> {
    counter: Option<(usize, usize)>,
    actions: [Option<(&'a str, &'a str)>; MAX_STATUS_ACTIONS],
    action_count: usize,
}

impl<'a> StatusBar<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            counter: None,
            actions: [None; MAX_STATUS_ACTIONS],
            action_count: 0,
        }
    }

    /// Add a counter (current/total)
    #[inline]
    pub fn counter(mut self, current: usize, total: usize) -> Self {
        self.counter = Some((current, total));
        self
    }

    /// Add an action hint. `.action("e", "dit")` renders as `[e]dit`
    #[inline]
    pub fn action(mut self, key: &'a str, label: &'a str) -> Self {
        if self.action_count < MAX_STATUS_ACTIONS {
            self.actions[self.action_count] = Some((key, label));
            self.action_count += 1;
        }
        self
    }

    /// Render for the current terminal width
    pub fn render(&self) -> String {
        self.render_for_width(term_width())
    }

    /// Full single line when it fits, otherwise counter and actions on two lines
    pub fn render_for_width(&self, width: usize) -> String {
        let count = self
            .counter
            .map(|(current, total)| counter(current, total))
            .unwrap_or_default();

        let actions = self.actions[..self.action_count]
            .iter()
            .flatten()
            .map(|(key, label)| format!("[{}]{}", key, label))
            .collect::<Vec<_>>()
            .join(" ");

        let full = match (count.is_empty(), actions.is_empty()) {
            (true, _) => actions.clone(),
            (false, true) => count.clone(),
            (false, false) => format!("{} {}", count, actions),
        };

        let too_wide = full.chars().count() > width.saturating_sub(5);
        if too_wide && !count.is_empty() && !actions.is_empty() {
            format!("{}\n{}", count, actions)
        } else {
            full
        }
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Layout Primitives
// ============================================================================

/// Return selection prefix for list items
#[inline]
pub fn selection_prefix(selected: bool) -> &'static str {
    if selected { "> " } else { "  " }
}

/// Truncate to at most `max_chars` characters, ending in an ellipsis when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }

    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", kept)
}

/// Collapse newlines and runs of whitespace so a note fits on one row
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a counter string (e.g., "12/345")
#[inline]
pub fn counter(current: usize, total: usize) -> String {
    format!("{}/{}", current, total)
}

/// Terminal width, 80 when unavailable (pipes, non-TTY)
pub fn term_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(80)
}

// ============================================================================
// Messages
// ============================================================================

#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

// ============================================================================
// Raw Mode
// ============================================================================

/// RAII guard that ensures raw mode is disabled on drop
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until a key press. Ctrl+C is reported as `Esc`.
pub fn read_key() -> Result<KeyCode> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read()? {
            // Windows reports releases too
            if kind != KeyEventKind::Press {
                continue;
            }
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(KeyCode::Esc);
            }
            return Ok(code);
        }
    }
}

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

// ============================================================================
// Prompts
// ============================================================================

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for text, pre-filled with `initial` so it can be edited in place.
/// Returns None on Esc.
pub fn text_input(prompt: &str, initial: &str) -> Result<Option<String>> {
    let result = Text::new(prompt)
        .with_render_config(minimal_render_config())
        .with_initial_value(initial)
        .prompt_skippable()?;
    Ok(result)
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

const BOARD_HELP: &str = r#"
NOTES

  j / ↓         Move down
  k / ↑         Move up
  g / G         Jump to first / last

ACTIONS

  a / Enter     Write in the form (adds, or updates while editing)
  e             Edit selected note
  d             Delete selected note

EXIT

  q / Esc       Quit
  ?             This help screen
"#;

/// Display the key reference and wait for any key
pub fn show_help() -> Result<()> {
    clear_screen()?;
    println!("{}", BOARD_HELP);
    println!("\nPress any key to return...");
    read_key()?;
    Ok(())
}
