//! Paths, constants and dialogue strings

pub mod constants;
pub mod dialogue;
mod paths;

pub use self::paths::Paths;
