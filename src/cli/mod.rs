use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod import;
pub mod list;
pub mod ui;
pub mod view;

pub use add::run_add;
pub use board::run_board;
pub use delete::{run_delete, run_reset};
pub use edit::run_edit;
pub use import::run_import;
pub use list::{run_export, run_list};

#[derive(Parser)]
#[command(name = "notecmd")]
#[command(about = "Quick notes for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (overrides NOTECMD_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes, newest first
    List(ListArgs),
    /// Add a note
    Add(AddArgs),
    /// Change the text of a note
    Edit(EditArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Print the stored notes as JSON
    Export,
    /// Replace all notes with a JSON export
    Import(ImportArgs),
    /// Delete every note
    Reset(ResetArgs),
    /// Print the database location
    Path,
}

#[derive(Args)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Note text; prompts when omitted
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Note id or unique id prefix
    pub id: String,
    /// New text; prompts with the current text when omitted
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id or unique id prefix
    pub id: String,
}

#[derive(Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}
