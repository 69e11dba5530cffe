//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod add_device;
pub mod config_cmd;
pub mod devices;
pub mod fmt;
pub mod new;
pub mod normalize;
pub mod show;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a backup-file command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Show(args) => show::handle(&args, settings),
        Command::Devices(args) => devices::handle(&args, settings),
        Command::New(args) => new::handle(&args, settings),
        Command::AddDevice(args) => add_device::handle(&args, settings),
        Command::Fmt(args) => fmt::handle(&args, settings),
        Command::Normalize(args) => normalize::handle(&args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
