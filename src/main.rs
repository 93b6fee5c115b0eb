use clap::Parser;
use notecmd::cli::{
    run_add, run_board, run_delete, run_edit, run_export, run_import, run_list, run_reset, Cli,
    Commands,
};
use notecmd::config::AppConfig;
use notecmd::db::Database;
use notecmd::session::NoteSession;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.db, cli.verbose)?;
    config.init_logging();

    if let Some(Commands::Path) = cli.command {
        println!("{}", config.db_path.display());
        return Ok(());
    }

    let db = Database::open_at(config.db_path)?;
    let mut session = NoteSession::open_default(db);

    match cli.command {
        None => {
            // No subcommand provided - show the interactive board
            run_board(&mut session)?;
        }
        Some(Commands::List(args)) => {
            run_list(&session, args.json)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&mut session, &args.text)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&mut session, &args.id, &args.text)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&mut session, &args.id)?;
        }
        Some(Commands::Export) => {
            run_export(&session)?;
        }
        Some(Commands::Import(args)) => {
            run_import(&mut session, &args.file)?;
        }
        Some(Commands::Reset(args)) => {
            run_reset(&mut session, args.yes)?;
        }
        Some(Commands::Path) => {}
    }

    Ok(())
}
