#![forbid(unsafe_code)]

mod cache;
mod source;
mod types;

pub use cache::CachedDirectory;
pub use source::{RaceDirectory, StaticDirectory, UnavailableDirectory};
pub use types::{LookupError, RaceContext, RaceDistance};
