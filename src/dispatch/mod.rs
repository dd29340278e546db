//! Dispatch module.
//!
//! Decides where a leveled message goes:
//! - Primary process -> output sink
//! - Worker process -> inter-process channel to the primary
//!
//! Also holds the wire format shared by both sides and the stock sinks and
//! channels.

pub mod channel;
pub mod dispatcher;
pub mod payload;
pub mod sink;

pub use channel::*;
pub use dispatcher::*;
pub use payload::*;
pub use sink::*;
