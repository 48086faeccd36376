use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use finance_tracker::{App, Config, run_app, utils::logging::init_tracing};

const USAGE: &str = "Usage: finance-tracker [--config <path>]";

fn parse_args() -> Result<Option<PathBuf>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(None),
        [flag, path] if flag == "--config" => Ok(Some(PathBuf::from(path))),
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{USAGE}");
            std::process::exit(0);
        }
        _ => bail!("Unrecognised arguments\n{USAGE}"),
    }
}

/// Blocking terminal events. Stops at the first read error, which is logged.
fn terminal_events() -> impl Iterator<Item = Event> {
    std::iter::from_fn(|| match event::read() {
        Ok(event) => Some(event),
        Err(err) => {
            error!(%err, "failed to read terminal event");
            None
        }
    })
}

/// Runs the interactive session. Raw mode must already be on.
fn run(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    run_app(&mut terminal, &mut app, terminal_events())?;
    Ok(())
}

/// Undoes everything `run` and raw mode set up, whichever step failed.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

fn main() -> Result<()> {
    let config_path = parse_args()?;
    let config =
        Config::resolve(config_path.as_deref()).context("Failed to load configuration")?;
    init_tracing(config.log_file.as_deref(), &config.log_filter)
        .context("Failed to set up logging")?;
    info!(currency = %config.currency_symbol, "starting finance tracker");

    enable_raw_mode().context("Failed to enable raw mode")?;
    with_restore(|| run(&config), restore_terminal)?;

    info!("finance tracker stopped");
    Ok(())
}

/// Runs `session`, then `restore` however the session ended. A session
/// error is reported ahead of a restore error.
fn with_restore<T>(
    session: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let res = session();
    let restored = restore();

    if let Err(err) = &res {
        error!(%err, "terminal session failed");
    }
    let value = res.context("Terminal session failed")?;
    restored.context("Failed to restore terminal")?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_session_still_restores_and_errors() {
        let restored = Cell::new(false);
        let res: Result<()> = with_restore(
            || bail!("terminal went away"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "Terminal session failed");
        assert_eq!(err.root_cause().to_string(), "terminal went away");
    }

    #[test]
    fn restore_failure_is_reported() {
        let res = with_restore(
            || Ok(7),
            || Err(io::Error::other("tty closed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "Failed to restore terminal");
    }

    #[test]
    fn clean_session_returns_its_value() {
        let value = with_restore(|| Ok("done"), || Ok(())).unwrap();
        assert_eq!(value, "done");
    }
}
