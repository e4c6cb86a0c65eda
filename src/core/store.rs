use crate::core::aliases::EntryId;
use crate::core::models::{EntryDraft, ScheduleEntry};
use crate::core::persist::EntryPersistence;
use crate::core::repository::Repository;
use crate::core::types::{ClockTime, Weekday};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};

/// The schedule's entries. Every mutation writes the whole list through the
/// persistence port before returning.
pub struct ScheduleEntryStore {
    entries: Repository<ScheduleEntry>,
    persistence: Box<dyn EntryPersistence>,
    logger: Logger,
}

impl ScheduleEntryStore {
    /// An empty store; nothing is read from `persistence`.
    pub fn new(persistence: Box<dyn EntryPersistence>, logger: Logger) -> Self {
        Self {
            entries: Repository::new(),
            persistence,
            logger,
        }
    }

    /// Restores the entries `persistence` holds.
    pub fn open(persistence: Box<dyn EntryPersistence>, logger: Logger) -> Result<Self> {
        let mut store = Self::new(persistence, logger);
        for entry in store.persistence.load()? {
            store.entries.insert_with_id(entry)?;
        }
        store.logger.info(
            format!("Loaded {} schedule entries.", store.entries.len()),
            LogTarget::FileOnly,
        );
        Ok(store)
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot in insertion order.
    pub fn list(&self) -> Vec<&ScheduleEntry> {
        self.entries.values()
    }

    pub fn get(&self, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries.get(id)
    }

    /// Whether some entry already sits on exactly this day and time range.
    pub fn has_slot(&self, day: Weekday, start: ClockTime, end: ClockTime) -> bool {
        self.entries
            .query()
            .r#where(|e| e.occupies(day, start, end))
            .exists()
    }

    /// Adds an entry, or returns `None` without touching the list when the
    /// draft is invalid.
    pub fn add(&mut self, draft: EntryDraft) -> Option<EntryId> {
        match self.try_add(draft) {
            Ok(id) => Some(id),
            Err(err) => {
                self.logger
                    .warn(format!("Entry not added. {err}"), LogTarget::FileOnly);
                None
            }
        }
    }

    /// Like [`add`](Self::add), but hands back the validation failure.
    pub fn try_add(&mut self, draft: EntryDraft) -> Result<EntryId> {
        draft.validate()?;
        let entry = self.entries.insert(ScheduleEntry::from_draft(draft));
        let (id, line) = (entry.id, format!("Added {entry}"));
        self.logger.info(line, LogTarget::FileOnly);
        self.flush();
        Ok(id)
    }

    /// Replaces every field but the id. `false` for unknown ids and invalid
    /// drafts, in which case nothing changes.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> bool {
        match self.try_update(id, draft) {
            Ok(()) => true,
            Err(err) => {
                self.logger
                    .warn(format!("Entry {id} not updated. {err}"), LogTarget::FileOnly);
                false
            }
        }
    }

    pub fn try_update(&mut self, id: EntryId, draft: EntryDraft) -> Result<()> {
        draft.validate()?;
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| Error::parse(format!("No entry with id {id}.")))?;
        let line = format!("Updated {}", entry.modify(draft));
        self.logger.info(line, LogTarget::FileOnly);
        self.flush();
        Ok(())
    }

    pub fn delete(&mut self, id: EntryId) -> bool {
        match self.entries.delete(id) {
            Some(entry) => {
                self.logger
                    .info(format!("Deleted {entry}"), LogTarget::FileOnly);
                self.flush();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.logger.info(
            format!("Cleared {removed} schedule entries."),
            LogTarget::FileOnly,
        );
        self.flush();
    }

    fn flush(&self) {
        let snapshot: Vec<ScheduleEntry> = self.list().into_iter().cloned().collect();
        if let Err(err) = self.persistence.save(&snapshot) {
            self.logger.warn(
                format!("Schedule changes could not be saved: {err}"),
                LogTarget::ConsoleAndFile,
            );
        }
    }
}
