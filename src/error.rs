//! Error types for the logging facade.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while normalizing, routing or relaying a
/// log line.
#[derive(Error, Debug)]
pub enum LogError {
    /// A structured argument could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The worker could not hand a payload to the primary process.
    #[error("Forwarding to primary failed: {0}")]
    Forwarding(#[source] io::Error),

    /// The primary could not read from the inter-process channel.
    #[error("Receiving from worker failed: {0}")]
    Receive(#[source] io::Error),

    /// A line on the inter-process channel was not a valid envelope.
    #[error("Invalid forward payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The output sink rejected a write.
    #[error("Sink write failed: {0}")]
    Sink(#[source] io::Error),

    /// Process context or logger configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LogError>;
