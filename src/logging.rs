//! Process-wide logger bootstrap.
//!
//! Logs go to stderr in the detailed format. `RUST_LOG` takes precedence over
//! the configured level. Initialization happens at most once per process;
//! later calls with the same level are no-ops.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<(String, LoggerHandle)> = OnceCell::new();

pub fn init_logging(level: &str) -> Result<(), String> {
    let level = level.trim();
    if level.is_empty() {
        return Err("log level must not be empty".to_string());
    }

    if let Some((active, _)) = LOGGER.get() {
        if active != level {
            return Err(format!(
                "logging already initialized with level `{active}`; refusing to switch to `{level}`"
            ));
        }
        return Ok(());
    }

    LOGGER.get_or_try_init(|| -> Result<(String, LoggerHandle), String> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        log::info!(
            "event=app_start platform={} version={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION")
        );
        Ok((level.to_string(), handle))
    })?;
    Ok(())
}
