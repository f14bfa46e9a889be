//! Core types, classifiers, and the timestamp-aligned merge for the weather
//! photo-journal pipeline
//!
//! Everything in this crate is pure and synchronous: the networking and
//! persistence layers feed it fully-decoded, ascending-by-timestamp series
//! and store whatever it produces.

pub mod classify;
pub mod current;
pub mod merge;
pub mod types;
pub mod units;

pub use classify::*;
pub use current::*;
pub use merge::*;
pub use types::*;
pub use units::*;
