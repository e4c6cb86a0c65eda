use crate::core::types::PaletteColor;
use std::collections::HashMap;

pub type EntryId = i32;
pub type SubjectColors = HashMap<String, PaletteColor>;
