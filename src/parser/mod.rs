pub mod day_code;
pub mod schedule_text;
