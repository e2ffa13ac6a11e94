//! `contactbook` command-line entry point.
//!
//! # Responsibility
//! - Parse process flags and optionally start file logging.
//! - Hand stdin/stdout to the prompt loop.

mod session;

use chrono::Local;
use clap::Parser;
use contactbook_core::{core_version, default_log_level, init_logging};
use std::io;
use std::process::ExitCode;

/// In-memory address book assistant.
#[derive(Debug, Parser)]
#[command(name = "contactbook", version = core_version())]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "CONTACTBOOK_LOG_LEVEL", default_value = default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "CONTACTBOOK_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("contactbook: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session::run_session(stdin.lock(), &mut stdout, || Local::now().date_naive()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_end module=cli status=error kind={:?}", err.kind());
            eprintln!("contactbook: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};
    use contactbook_core::core_version;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_logging_flags() {
        let cli = Cli::try_parse_from([
            "contactbook",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/contactbook-logs",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.log_dir.as_deref(), Some("/tmp/contactbook-logs"));
    }

    #[test]
    fn version_flag_reports_core_version() {
        let err = Cli::try_parse_from(["contactbook", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(core_version()));
    }
}
