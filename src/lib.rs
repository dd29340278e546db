//! relaylog - process-aware leveled logging
//!
//! Formats leveled, colorized log lines and routes them by process role:
//! the primary process writes them to its output sink, worker processes
//! forward them to the primary over an inter-process channel.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `context` - Process role/identity and logger configuration
//! - `normalize` - Argument and error normalization
//! - `format` - Level decoration and timestamped line formatting
//! - `dispatch` - Routing decision, wire format, sinks and channels
//! - `logging` - The `Logger` API and its macros
//!
//! ## Example
//!
//! ```no_run
//! use relaylog::{Arg, Logger, ProcessContext};
//!
//! # fn main() -> relaylog::Result<()> {
//! let logger = Logger::builder(ProcessContext::from_env()?).build()?;
//! logger.info(&[Arg::from("server started")])?;
//! relaylog::warn!(logger, "disk low", 93, "%")?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod logging;
pub mod normalize;

pub use context::{ColorChoice, LoggerConfig, ProcessContext, ProcessRole, WorkerIdentity};
pub use dispatch::{
    decode_envelope, read_envelopes, Channel, Envelope, ForwardPayload, JsonLinesChannel,
    MemoryChannel, MemorySink, Sink, StderrSink, StdoutSink,
};
pub use error::{LogError, Result};
pub use format::{Level, LineFormatter, Styler};
pub use logging::{Logger, LoggerBuilder};
pub use normalize::{Arg, ErrorArg};

/// Install an `env_logger` backend for the crate's own diagnostics.
///
/// Defaults to `Info`; `RUST_LOG` overrides. Safe to call more than once.
pub fn init_diagnostics() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
