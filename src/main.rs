//! Trainkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use trainkit::cli::{dispatch, Cli};
use trainkit::ui::Theme;
use trainkit::TrainkitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trainkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trainkit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("trainkit starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = Theme::auto();

    match dispatch(&cli, &theme) {
        Ok(outcome) => exit_code_from(outcome.exit_code),
        Err(TrainkitError::InstallFailed { code }) => {
            eprintln!("{}", theme.error.apply_to(format!(
                "✗ Installation failed with error code {}",
                code
            )));
            exit_code_from(code)
        }
        Err(e) => {
            eprintln!("{}", theme.error.apply_to(format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}

/// Clamp an i32 exit code into the u8 range, keeping failures non-zero.
fn exit_code_from(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::from(1),
    }
}
