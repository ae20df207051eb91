mod app;
mod cli;
mod clock;
mod db;
mod event;
mod format;
mod logging;
mod session;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let db_path = cli_opts.db.unwrap_or_else(db::default_db_path);
    if let Err(err) = logging::init(&logging::log_path_for(&db_path)) {
        eprintln!("daytimer: file logging disabled: {err:#}");
    }

    let conn = db::init(&db_path)?;
    let mut session = session::Session::load(db::SqliteStore::new(conn))?;
    if let Some(command) = cli_opts.command {
        return cli::run(command, &mut session, &mut std::io::stdout());
    }

    let mut app = app::App::new(session);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
