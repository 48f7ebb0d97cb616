//! File-based decision logging via the `log` facade.
//!
//! Best-effort: if the log directory or file cannot be opened, the logger
//! simply stays uninitialized and the macros are no-ops. Logging must
//! never block or fail the hook.

use simplelog::{LevelFilter, WriteLogger};

use crate::eval::Evaluation;

/// Initialize the file logger at ~/.local/share/cc-chaingate/hook.log.
pub fn init() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/cc-chaingate");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("hook.log"))
    else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
}

/// Record one decision.
pub fn log_decision(command: &str, result: &Evaluation) {
    // Compact single-line reason (replace newlines with "; ")
    let reason = result.reason.replace('\n', "; ");
    let cmd: String = command.chars().take(200).collect();
    log::info!("{}\t{cmd}\t{reason}", result.verdict.label());
}
