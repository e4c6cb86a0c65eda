pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod grid;
pub mod import;
pub mod logging;
pub mod parser;
pub mod ui;

use crate::command::command_parser::CommandParser;
use crate::core::cli::CliArgs;
use crate::core::context::AppContext;
use crate::errors::Result;

/// Runs one command line against `ctx`. No command means `help`.
pub fn run(ctx: &mut AppContext, cli: &CliArgs) -> Result<()> {
    let command = cli.command.as_deref().unwrap_or("help");
    CommandParser::new().parse(command, &cli.args)?.execute(ctx)
}
