//! Shell command execution.

pub mod command;

pub use command::{
    execute, execute_interactive, run_with_timeout, CommandOptions, CommandResult, ProbeStatus,
};
