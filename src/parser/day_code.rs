use crate::core::types::Weekday;

/// Compact day-code notation ("MWF", "TTh", "MTH", "SU") to weekdays.
///
/// The scan runs left to right. At each position a two-character code wins
/// over a one-character one: `TH` is Thursday and `SU` is Sunday, in any case.
/// Otherwise `M`, `T`, `W`, `F`, `S` map to Monday, Tuesday, Wednesday, Friday
/// and Saturday. A `T` that is not directly followed by `H` is always Tuesday.
/// Other characters are skipped.
pub struct DayCodeResolver;

impl DayCodeResolver {
    /// Weekdays in order of first appearance, without duplicates. Empty when
    /// nothing in the token is a day code.
    pub fn resolve(token: &str) -> Vec<Weekday> {
        let chars: Vec<char> = token.chars().collect();
        let mut days = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (day, width) = match chars.get(i..i + 2).and_then(two_char_code) {
                Some(day) => (Some(day), 2),
                None => (one_char_code(chars[i]), 1),
            };
            if let Some(day) = day {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            i += width;
        }
        days
    }
}

fn two_char_code(pair: &[char]) -> Option<Weekday> {
    match (pair[0].to_ascii_uppercase(), pair[1].to_ascii_uppercase()) {
        ('T', 'H') => Some(Weekday::Thursday),
        ('S', 'U') => Some(Weekday::Sunday),
        _ => None,
    }
}

fn one_char_code(c: char) -> Option<Weekday> {
    match c.to_ascii_uppercase() {
        'M' => Some(Weekday::Monday),
        'T' => Some(Weekday::Tuesday),
        'W' => Some(Weekday::Wednesday),
        'F' => Some(Weekday::Friday),
        'S' => Some(Weekday::Saturday),
        _ => None,
    }
}

/// Letters that may appear inside a day-code token.
pub(crate) fn is_day_code_letter(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'M' | 'T' | 'W' | 'H' | 'F' | 'S' | 'U'
    )
}
