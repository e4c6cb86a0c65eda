use crate::core::aliases::EntryId;
use crate::core::context::AppContext;
use crate::core::models::EntryDraft;
use crate::core::types::{ClockTime, GlobalCommand, PaletteColor, Weekday};
use crate::errors::{Error, Result};
use crate::grid::export::{ExportOptions, export_view};
use crate::import::color::ColorAssigner;
use crate::import::payload::{decode_item_payload, decode_schedule_payload};
use crate::import::pipeline::{
    ImportOutcome, import_calendar_items, import_raw_entries, import_schedule_text,
};
use crate::logging::LogTarget;
use crate::ui::display_manager::DisplayManager;
use std::fs;
use strum::IntoEnumIterator;

const AUTO_FIT_FLAG: &str = "--auto-fit";
const COLOR_FLAG: &str = "--color";

pub struct CommandCore<'a> {
    pub args: &'a [String],
    pub kind: GlobalCommand,
}

impl<'a> CommandCore<'a> {
    pub fn new(kind: GlobalCommand, args: &'a [String]) -> Self {
        Self { args, kind }
    }

    fn wants_help(&self) -> bool {
        matches!(
            self.args.first().map(String::as_str),
            Some("-h") | Some("--help")
        )
    }

    /// Positional argument `idx`, named `name` in the error.
    fn arg(&self, idx: usize, name: &str) -> Result<&'a str> {
        self.args.get(idx).map(String::as_str).ok_or_else(|| {
            Error::parse(format!(
                "Missing {name}. Usage: {}",
                self.kind.usage()
            ))
        })
    }

    fn optional_arg(&self, idx: usize) -> Option<&'a str> {
        self.args
            .get(idx)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    fn expect_at_most(&self, count: usize) -> Result<()> {
        if self.args.len() > count {
            return Err(Error::parse(format!(
                "Too many arguments. Usage: {}",
                self.kind.usage()
            )));
        }
        Ok(())
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    fn usage(&self) -> String {
        format!("Usage: weekgrid {}", self.core().kind.usage())
    }

    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        if self.core().wants_help() {
            ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
            return Ok(());
        }
        self.perform(ctx)
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

macro_rules! command_struct {
    ($name:ident) => {
        pub struct $name<'a> {
            core: CommandCore<'a>,
        }

        impl<'a> $name<'a> {
            pub fn new(kind: GlobalCommand, args: &'a [String]) -> Self {
                Self {
                    core: CommandCore::new(kind, args),
                }
            }
        }

        impl<'a> sealed::Sealed<'a> for $name<'a> {
            fn core(&self) -> &CommandCore<'a> {
                &self.core
            }
        }
    };
}

command_struct!(EntryCommand);
command_struct!(ImportCommand);
command_struct!(ShowCommand);
command_struct!(ConfigCommand);
command_struct!(HelpCommand);

/// Manual entry management: list, add, edit, delete, clear.
impl<'a> EntryCommand<'a> {
    /// Positional arguments with `--color COLOR` taken out, plus that color.
    fn split_color(&self) -> Result<(Vec<String>, Option<PaletteColor>)> {
        let mut positional = Vec::new();
        let mut color = None;
        let mut args = self.core.args.iter();
        while let Some(arg) = args.next() {
            if arg == COLOR_FLAG {
                let raw = args.next().ok_or_else(|| {
                    Error::parse(format!(
                        "Missing COLOR after {COLOR_FLAG}. Usage: {}",
                        self.core.kind.usage()
                    ))
                })?;
                color = Some(PaletteColor::try_from(raw)?);
            } else {
                positional.push(arg.clone());
            }
        }
        Ok((positional, color))
    }

    fn draft_from(&self, offset: usize) -> Result<(EntryDraft, Option<PaletteColor>)> {
        let (positional, color) = self.split_color()?;
        let core = CommandCore::new(self.core.kind, &positional);
        let subject = core.arg(offset, "SUBJECT")?;
        let day = Weekday::try_from(core.arg(offset + 1, "DAY")?)?;
        let start = ClockTime::try_from_loose(core.arg(offset + 2, "START")?)?;
        let end = ClockTime::try_from_loose(core.arg(offset + 3, "END")?)?;
        core.expect_at_most(offset + 5)?;

        let draft = EntryDraft::new(
            subject,
            day,
            start,
            end,
            color.unwrap_or(PaletteColor::PALETTE[0]),
        );
        let draft = match core.optional_arg(offset + 4) {
            Some(room) => draft.with_room(room),
            None => draft,
        };
        Ok((draft, color))
    }

    fn id_at(&self, idx: usize) -> Result<EntryId> {
        let raw = self.core.arg(idx, "ID")?;
        raw.trim()
            .parse::<EntryId>()
            .map_err(|_| Error::parse(format!("Invalid entry id: '{raw}'.")))
    }

    fn handle_add(&self, ctx: &mut AppContext) -> Result<()> {
        let (mut draft, color) = self.draft_from(0)?;
        if color.is_none() {
            draft.color = ColorAssigner::for_new_entry(ctx.store.list(), &draft.subject);
        }
        let id = ctx.store.try_add(draft)?;
        ctx.logger
            .info(format!("Added entry {id}."), LogTarget::ConsoleAndFile);
        Ok(())
    }

    fn handle_edit(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id_at(0)?;
        let (mut draft, color) = self.draft_from(1)?;
        let current = ctx
            .store
            .get(id)
            .ok_or_else(|| Error::parse(format!("No entry with id {id}.")))?;
        draft.color = color.unwrap_or(current.color);
        ctx.store.try_update(id, draft)?;
        ctx.logger
            .info(format!("Updated entry {id}."), LogTarget::ConsoleAndFile);
        Ok(())
    }

    fn handle_delete(&self, ctx: &mut AppContext) -> Result<()> {
        let id = self.id_at(0)?;
        self.core.expect_at_most(1)?;
        if !ctx.store.delete(id) {
            return Err(Error::parse(format!("No entry with id {id}.")));
        }
        ctx.logger
            .info(format!("Deleted entry {id}."), LogTarget::ConsoleAndFile);
        Ok(())
    }

    fn handle_clear(&self, ctx: &mut AppContext) -> Result<()> {
        self.core.expect_at_most(0)?;
        let removed = ctx.store.len();
        ctx.store.clear();
        ctx.logger.info(
            format!("Removed {removed} entries."),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }
}

impl<'a> Command<'a> for EntryCommand<'a> {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.core.kind {
            GlobalCommand::Add => self.handle_add(ctx),
            GlobalCommand::Edit => self.handle_edit(ctx),
            GlobalCommand::Delete => self.handle_delete(ctx),
            GlobalCommand::Clear => self.handle_clear(ctx),
            _ => {
                self.core.expect_at_most(0)?;
                DisplayManager::new().display_entries(&ctx.store.list());
                Ok(())
            }
        }
    }
}

/// Collaborator payloads from a file, or schedule text given inline.
impl<'a> ImportCommand<'a> {
    fn read_file(&self) -> Result<String> {
        let path = self.core.arg(0, "FILE")?;
        self.core.expect_at_most(1)?;
        Ok(fs::read_to_string(path)?)
    }

    fn report(ctx: &AppContext, outcome: ImportOutcome) {
        let line = match outcome {
            ImportOutcome::NothingFound => "No schedule entries found.".to_string(),
            ImportOutcome::Imported(report) => format!(
                "Imported {} entries ({} duplicates skipped, {} rejected).",
                report.added.len(),
                report.duplicates,
                report.rejected
            ),
        };
        ctx.logger.info(line, LogTarget::ConsoleAndFile);
    }
}

impl<'a> Command<'a> for ImportCommand<'a> {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let outcome = match self.core.kind {
            GlobalCommand::ImportItems => {
                let items = decode_item_payload(&self.read_file()?)?;
                import_calendar_items(&mut ctx.store, &items)
            }
            GlobalCommand::Parse => {
                let subject = self.core.arg(0, "SUBJECT")?;
                let text = self.core.arg(1, "TEXT")?;
                self.core.expect_at_most(3)?;
                import_schedule_text(&mut ctx.store, subject, text, self.core.optional_arg(2))
            }
            _ => {
                let rows = decode_schedule_payload(&self.read_file()?)?;
                import_raw_entries(&mut ctx.store, &rows)
            }
        };
        Self::report(ctx, outcome);
        Ok(())
    }
}

/// The week grid, optionally limited to some days and cropped to its entries.
impl<'a> Command<'a> for ShowCommand<'a> {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let mut options = ExportOptions {
            days: Vec::new(),
            auto_fit: ctx.config.export_auto_fit(),
        };
        for arg in self.core.args {
            if arg == AUTO_FIT_FLAG {
                options.auto_fit = true;
            } else {
                options.days.push(Weekday::try_from(arg)?);
            }
        }

        let grid = ctx.grid()?;
        let entries = ctx.store.list();
        let view = export_view(entries.iter().copied(), &grid, &options);
        DisplayManager::new().display_week(&view, entries);
        Ok(())
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match self.core.args.len() {
            0 => {
                DisplayManager::new().display_config(&ctx.config);
                Ok(())
            }
            2 => {
                ctx.config.set(&self.core.args[0], &self.core.args[1])?;
                ctx.logger
                    .set_file_logging_enabled(ctx.config.file_logging_enabled());
                if let Some((key, old, new)) = ctx.config.take_last_change() {
                    ctx.logger.info(
                        format!("Config {key} changed from {old} to {new}."),
                        LogTarget::ConsoleAndFile,
                    );
                }
                Ok(())
            }
            _ => Err(Error::parse(format!(
                "Expected no arguments or KEY VALUE. {}",
                self.usage()
            ))),
        }
    }
}

impl<'a> Command<'a> for HelpCommand<'a> {
    fn usage(&self) -> String {
        let mut text = String::from(
            "Usage: weekgrid [--config PATH] [--store PATH] [--logs DIR] <command>\n\nCommands:\n",
        );
        for kind in GlobalCommand::iter() {
            text.push_str(&format!("  {}\n", kind.usage()));
        }
        text
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
        Ok(())
    }
}
