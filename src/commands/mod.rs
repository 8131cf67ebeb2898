//! Command handlers for the chatcsv binary

pub mod completions;
pub mod config;
pub mod convert;
