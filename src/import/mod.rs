pub mod color;
pub mod day_names;
pub mod payload;
pub mod pipeline;
