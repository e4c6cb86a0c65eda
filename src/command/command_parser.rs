use crate::command::commands::{
    CommandDyn, ConfigCommand, EntryCommand, HelpCommand, ImportCommand, ShowCommand,
};
use crate::core::types::GlobalCommand;
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let kind = GlobalCommand::try_from(command)?;
        Ok(match kind {
            GlobalCommand::Show => Box::new(ShowCommand::new(kind, args)),
            GlobalCommand::List
            | GlobalCommand::Add
            | GlobalCommand::Edit
            | GlobalCommand::Delete
            | GlobalCommand::Clear => Box::new(EntryCommand::new(kind, args)),
            GlobalCommand::Import | GlobalCommand::ImportItems | GlobalCommand::Parse => {
                Box::new(ImportCommand::new(kind, args))
            }
            GlobalCommand::Config => Box::new(ConfigCommand::new(kind, args)),
            GlobalCommand::Help => Box::new(HelpCommand::new(kind, args)),
        })
    }
}
