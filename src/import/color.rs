use crate::core::aliases::SubjectColors;
use crate::core::models::ScheduleEntry;
use crate::core::types::PaletteColor;

/// Picks a palette color per subject for one import batch.
pub struct ColorAssigner;

impl ColorAssigner {
    /// Subjects already on the schedule keep the first color seen for them
    /// (exact, case-sensitive names). Each unseen subject takes
    /// `palette[counter % 8]`, the counter starting at zero and advancing
    /// only on such new assignments.
    pub fn assign<'a, E, S>(existing: E, new_subjects: &[S]) -> SubjectColors
    where
        E: IntoIterator<Item = &'a ScheduleEntry>,
        S: AsRef<str>,
    {
        let mut colors = SubjectColors::new();
        for entry in existing {
            colors.entry(entry.subject.clone()).or_insert(entry.color);
        }

        let mut counter = 0;
        for subject in new_subjects {
            let subject = subject.as_ref();
            if !colors.contains_key(subject) {
                colors.insert(subject.to_string(), PaletteColor::cycle(counter));
                counter += 1;
            }
        }
        colors
    }

    /// Color for one manually added entry. A subject already on the schedule
    /// keeps its color; a new one takes the first palette color no entry
    /// uses, cycling by distinct subject count once every color is taken.
    pub fn for_new_entry<'a, E>(existing: E, subject: &str) -> PaletteColor
    where
        E: IntoIterator<Item = &'a ScheduleEntry>,
    {
        let mut colors = SubjectColors::new();
        let mut used = Vec::new();
        for entry in existing {
            colors.entry(entry.subject.clone()).or_insert(entry.color);
            used.push(entry.color);
        }
        if let Some(color) = colors.get(subject) {
            return *color;
        }

        PaletteColor::PALETTE
            .iter()
            .copied()
            .find(|color| !used.contains(color))
            .unwrap_or_else(|| PaletteColor::cycle(colors.len()))
    }
}
