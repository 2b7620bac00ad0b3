#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod report;
pub mod roster_file;
