//! Report rendering and interactive search for the heroes CLI.

pub mod logging;
pub mod prompt;
pub mod report;
pub mod tables;
