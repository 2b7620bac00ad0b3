#![forbid(unsafe_code)]

pub mod clock;
pub mod directory;
mod engine;
mod error;
pub mod ranking;
pub mod render;

pub use engine::{Analysis, Analyzer, Pick, Services};
pub use error::Error;
