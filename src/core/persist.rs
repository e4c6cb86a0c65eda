use crate::core::models::ScheduleEntry;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const SCHEMA_VERSION: u32 = 1;

/// Port the entry store writes through. Every call carries the whole list.
pub trait EntryPersistence {
    fn load(&self) -> Result<Vec<ScheduleEntry>>;
    fn save(&self, entries: &[ScheduleEntry]) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<ScheduleEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSchedule {
    Versioned(SaveFile),
    // Written before the envelope existed: a bare array.
    Legacy(Vec<ScheduleEntry>),
}

pub fn encode_entries(entries: &[ScheduleEntry]) -> Result<String> {
    let file = SaveFile {
        version: SCHEMA_VERSION,
        entries: entries.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub fn decode_entries(text: &str) -> Result<Vec<ScheduleEntry>> {
    match serde_json::from_str::<StoredSchedule>(text)? {
        StoredSchedule::Legacy(entries) => Ok(entries),
        StoredSchedule::Versioned(file) if file.version <= SCHEMA_VERSION => Ok(file.entries),
        StoredSchedule::Versioned(file) => Err(Error::Storage(format!(
            "schedule was saved with schema version {}, this build reads up to {}",
            file.version, SCHEMA_VERSION
        ))),
    }
}

/// Single JSON file holding the whole schedule.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<ScheduleEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        decode_entries(&contents)
    }

    fn save(&self, entries: &[ScheduleEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encode_entries(entries)?)?;
        Ok(())
    }
}

/// Process-local key-value slot. Clones share the slot, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<String>>>,
    fail_saves: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot whose saves always fail, for exercising the warning path.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn with_contents(raw: impl Into<String>) -> Self {
        let persistence = Self::default();
        *persistence.slot.borrow_mut() = Some(raw.into());
        persistence
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl EntryPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<ScheduleEntry>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode_entries(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[ScheduleEntry]) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "storage quota exceeded",
            )));
        }
        *self.slot.borrow_mut() = Some(encode_entries(entries)?);
        Ok(())
    }
}
