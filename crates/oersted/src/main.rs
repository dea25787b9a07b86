//! Oersted teaching aid: interactive electromagnetism demos.

use std::io::IsTerminal;
use std::process::ExitCode;

use oersted_cli::ui::print_error;
use oersted_core::constants::exit_codes;
use oersted_lib::{app, config, errors};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();
    init_tracing(&config);

    let code = match app::run(&config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn init_tracing(config: &config::AppConfig) {
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Log lines tear the alternate screen; the TUI only logs to a
    // redirected stderr.
    let writer = if config.is_interactive() && std::io::stderr().is_terminal() {
        BoxMakeWriter::new(std::io::sink)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(writer)
        .init();
}
