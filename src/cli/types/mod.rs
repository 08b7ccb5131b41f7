//! Type-safe wrappers and enums for league match data.

pub mod ids;
pub mod time;
pub mod toggles;
