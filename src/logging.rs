use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for TUI mode.
pub const LOG_ENV_VAR: &str = "HUMANIZE_AI_LOG";

/// Log to the file named by `HUMANIZE_AI_LOG`, or not at all.
///
/// The TUI owns the terminal, so there is no stderr fallback. Each run gets
/// its own `{path}.{timestamp}.{pid}` file.
pub fn init_file_tracing() {
    let Ok(base) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    match std::fs::File::create(&path) {
        Ok(file) => install(file, "info", false),
        Err(err) => eprintln!("Warning: cannot create log file {}: {err}", path.display()),
    }
}

/// Log to stderr for the headless `rewrite` command.
pub fn init_stderr_tracing() {
    install(std::io::stderr, "warn", true);
}

/// `RUST_LOG` wins over `default_level` when set.
fn install<W>(writer: W, default_level: &str, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn log_file_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{timestamp}.{pid}"))
}
