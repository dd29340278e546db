//! Process context and logger configuration.
//!
//! Everything the logger needs to know about its environment, resolved
//! once at startup:
//! - `process` - primary/worker role and worker identity
//! - `config` - color and timestamp settings

pub mod config;
pub mod process;

pub use config::*;
pub use process::*;
