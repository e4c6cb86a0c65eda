pub mod drag;
pub mod export;
pub mod placement;
#[cfg(test)]
mod tests;
pub mod time_grid;
