/// CLI argument parsing and command handling.
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::db::KeyValueStore;
use crate::format::format_time;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "daytimer",
    version,
    about = "Daytimer - A terminal countdown dashboard that resets at midnight"
)]
pub struct Cli {
    /// Database file holding the session (defaults to the user data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print target, current and remaining time
    Status,
    /// Set the target time; missing or non-numeric values count as 0
    Target {
        hours: Option<String>,
        minutes: Option<String>,
        seconds: Option<String>,
    },
    /// Reset elapsed time to zero and stop the timer
    Reset,
    /// Forget the stored session; the next start asks for a target
    Clear,
}

/// Execute a headless command against the stored session.
pub fn run<S: KeyValueStore>(
    command: Command,
    session: &mut Session<S>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Status => print_status(session, out)?,
        Command::Target {
            hours,
            minutes,
            seconds,
        } => {
            let total =
                session.commit_target(hours.as_deref(), minutes.as_deref(), seconds.as_deref())?;
            writeln!(out, "Target set to {}", format_time(total))?;
        }
        Command::Reset => {
            session.midnight_reset()?;
            writeln!(out, "Timer reset.")?;
        }
        Command::Clear => {
            session.clear()?;
            writeln!(out, "Session cleared.")?;
        }
    }
    Ok(())
}

fn print_status<S: KeyValueStore>(session: &Session<S>, out: &mut impl Write) -> Result<()> {
    if session.is_editing() {
        writeln!(out, "No target set.")?;
        return Ok(());
    }
    writeln!(out, "Target Time:    {}", format_time(session.target()))?;
    writeln!(out, "Current Time:   {}", format_time(session.elapsed()))?;
    writeln!(out, "Remaining Time: {}", format_time(session.remaining()))?;
    let state = if session.is_running() { "running" } else { "paused" };
    writeln!(out, "State:          {state}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::session::{KEY_ELAPSED, KEY_RUNNING, KEY_TARGET};

    fn run_with(command: Command, session: &mut Session<MemoryStore>) -> String {
        let mut out = Vec::new();
        run(command, session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_target_with_omitted_fields() {
        let cli = Cli::try_parse_from(["daytimer", "target", "1"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Target {
                hours: Some("1".to_string()),
                minutes: None,
                seconds: None,
            })
        );
    }

    #[test]
    fn parses_global_db_flag() {
        let cli = Cli::try_parse_from(["daytimer", "status", "--db", "/tmp/t.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
        assert_eq!(cli.command, Some(Command::Status));

        let cli = Cli::try_parse_from(["daytimer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn target_command_commits() {
        let mut session = Session::load(MemoryStore::default()).unwrap();
        let output = run_with(
            Command::Target {
                hours: Some("25".to_string()),
                minutes: Some("x".to_string()),
                seconds: None,
            },
            &mut session,
        );
        assert_eq!(session.target(), 90000);
        assert_eq!(output, "Target set to 25:00:00\n");
    }

    #[test]
    fn status_prints_readouts() {
        let mut session = Session::load(MemoryStore::with(&[
            (KEY_ELAPSED, "10"),
            (KEY_TARGET, "70"),
            (KEY_RUNNING, "true"),
        ]))
        .unwrap();
        let output = run_with(Command::Status, &mut session);
        assert!(output.contains("Target Time:    00:01:10"));
        assert!(output.contains("Current Time:   00:00:10"));
        assert!(output.contains("Remaining Time: 00:01:00"));
        assert!(output.contains("running"));
    }

    #[test]
    fn status_without_target() {
        let mut session = Session::load(MemoryStore::default()).unwrap();
        assert_eq!(run_with(Command::Status, &mut session), "No target set.\n");
    }

    #[test]
    fn reset_and_clear() {
        let mut session = Session::load(MemoryStore::with(&[
            (KEY_ELAPSED, "10"),
            (KEY_TARGET, "70"),
            (KEY_RUNNING, "true"),
        ]))
        .unwrap();
        run_with(Command::Reset, &mut session);
        assert_eq!(session.elapsed(), 0);
        assert!(!session.is_running());
        assert_eq!(session.target(), 70);

        run_with(Command::Clear, &mut session);
        assert!(session.is_editing());
        assert_eq!(session.target(), 0);
    }
}
