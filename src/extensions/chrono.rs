use crate::core::types::Weekday;

pub trait WeekdayExt {
    fn to_weekday(self) -> Weekday;
}

impl WeekdayExt for chrono::Weekday {
    fn to_weekday(self) -> Weekday {
        match self {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
