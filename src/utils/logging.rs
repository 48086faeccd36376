use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{FinanceError, Result};

static TRACING_INIT: Once = Once::new();

/// Sends tracing output to `log_file`, appending.
///
/// `RUST_LOG` takes precedence over `default_filter`. Later calls are no-ops.
/// Nothing is installed without a file, as the terminal is owned by the UI.
pub fn init_tracing(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| FinanceError::LogInit(e.to_string()))?;

    let mut outcome = Ok(());
    TRACING_INIT.call_once(|| {
        outcome = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| FinanceError::LogInit(e.to_string()));
    });
    outcome
}
