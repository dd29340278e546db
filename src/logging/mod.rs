//! Public logging API.
//!
//! The [`Logger`] with its six leveled entry points, and the matching
//! variadic macros.

pub mod logger;
pub mod macros;

pub use logger::*;
