mod cli;
mod common;
mod config;
mod import;
mod store;
