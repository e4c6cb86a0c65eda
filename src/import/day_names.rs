use crate::core::types::Weekday;
use crate::extensions::string::ToCommaSeparators;
use crate::parser::day_code::{DayCodeResolver, is_day_code_letter};

/// Weekdays named in a collaborator's `day` field: long or short names joined
/// by commas, "and", slashes, dashes or spaces ("Monday, Thursday",
/// "Tue and Fri", "Mon-Wed"),
/// or a day code ("MWF"). Order of first appearance, no duplicates; words
/// that name no day are dropped.
pub fn normalize_day_list(raw: &str) -> Vec<Weekday> {
    let joined = raw.to_comma_separators();
    let mut days = Vec::new();

    for word in joined
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|w| !w.is_empty())
    {
        let resolved = match Weekday::try_from(word) {
            Ok(day) => vec![day],
            Err(_) if word.chars().all(is_day_code_letter) => DayCodeResolver::resolve(word),
            Err(_) => Vec::new(),
        };
        for day in resolved {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}
