use crate::core::types::{Bool, TimeRange};
use crate::errors::Error;
use crate::grid::time_grid::TimeGrid;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridWindowConfigItem {
    pub value: TimeRange,
    pub description: String,
}

impl Default for GridWindowConfigItem {
    fn default() -> Self {
        Self {
            value: TimeGrid::standard().window(),
            description: "Hours covered by the weekly grid (HH:MM-HH:MM, half-hour aligned).".into(),
        }
    }
}

impl ConfigItem<TimeRange> for GridWindowConfigItem {
    fn get_value(&self) -> &TimeRange {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let range = TimeRange::try_from_str(new_value)?;
        TimeGrid::from_window(&range)?;
        self.value = range;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoFitConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for AutoFitConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Crop exported grids to the hours that hold entries.".into(),
        }
    }
}

impl ConfigItem<Bool> for AutoFitConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
