//! Command implementations and dispatch.

pub mod check;
pub mod install;

use crate::error::Result;
use crate::ui::Theme;

use super::{Cli, Commands};

/// Result of executing a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandOutcome {
    /// Process exit code to return.
    pub exit_code: i32,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    pub fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Dispatch the parsed CLI to the matching command.
///
/// `check` is the default when no subcommand is given.
pub fn dispatch(cli: &Cli, theme: &Theme) -> Result<CommandOutcome> {
    match &cli.command {
        Some(Commands::Check(args)) => check::run(args, theme),
        Some(Commands::Install) => install::run(theme),
        None => check::run(&super::CheckArgs::default(), theme),
    }
}
