//! Argument normalization.
//!
//! Turns heterogeneous log arguments into display strings:
//! - `message` - join arguments, JSON for structured values
//! - `errors` - render error values with their cause chain

pub mod errors;
pub mod message;

pub use errors::*;
pub use message::*;
