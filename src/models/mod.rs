//! Data models

pub mod flight;
pub mod prediction;
pub mod status;

pub use flight::*;
pub use prediction::*;
pub use status::*;
