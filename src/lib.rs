// Library interface for funcsort
// This allows benchmarks and tests to access internal modules

pub mod extract;
pub mod dedup;
pub mod groups;
pub mod layout;
pub mod assemble;
pub mod organizer;
pub mod config;
pub mod output;
pub mod error;
