pub trait ToCommaSeparators {
    /// Returns a copy where the list joiners `/`, `-`, `&`, `;` and the word `and`
    /// are replaced by `,`, trimmed of surrounding whitespace.
    fn to_comma_separators(&self) -> String;
}

impl ToCommaSeparators for str {
    fn to_comma_separators(&self) -> String {
        self.trim()
            .split_whitespace()
            .map(|word| {
                if word.eq_ignore_ascii_case("and") {
                    ","
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
            .replace(['/', '-', '&', ';'], ",")
    }
}

impl ToCommaSeparators for String {
    fn to_comma_separators(&self) -> String {
        self.as_str().to_comma_separators()
    }
}
