use crate::config::Config;
use crate::core::persist::{EntryPersistence, JsonFilePersistence};
use crate::core::store::ScheduleEntryStore;
use crate::errors::Result;
use crate::grid::time_grid::TimeGrid;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything a command runs against: settings, the schedule and the logger.
pub struct AppContext {
    pub config: Config,
    pub store: ScheduleEntryStore,
    pub logger: Logger,
    pub store_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        store_path: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let persistence = JsonFilePersistence::new(store_path.clone());
        let store = ScheduleEntryStore::open(Box::new(persistence), logger.clone())?;

        Ok(Self {
            config,
            store,
            logger,
            store_path,
            logs_dir,
        })
    }

    /// Context over an arbitrary persistence backend. The logger is used as
    /// given, file switch included.
    pub fn with_persistence(
        config: Config,
        persistence: Box<dyn EntryPersistence>,
        logger: Logger,
    ) -> Result<Self> {
        let store = ScheduleEntryStore::open(persistence, logger.clone())?;
        Ok(Self {
            config,
            store,
            logger,
            store_path: PathBuf::new(),
            logs_dir: PathBuf::new(),
        })
    }

    /// The configured grid window split into half-hour slots.
    pub fn grid(&self) -> Result<TimeGrid> {
        TimeGrid::from_window(self.config.grid_window())
    }
}
