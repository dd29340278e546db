//! Inter-process channels for forwarding worker output.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LogError, Result};

use super::payload::Envelope;

/// Send side of the worker → primary channel.
///
/// Sends are fire-and-forget: success means the payload was handed off,
/// not that the primary wrote it.
pub trait Channel: Send + Sync {
    fn send(&self, envelope: &Envelope) -> Result<()>;
}

/// Writes one JSON envelope per line to any writer (a pipe, a socket, the
/// worker's stdout).
#[derive(Debug)]
pub struct JsonLinesChannel<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesChannel<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesChannel<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Channel for JsonLinesChannel<W> {
    fn send(&self, envelope: &Envelope) -> Result<()> {
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, envelope)
            .map_err(|e| LogError::Forwarding(e.into()))?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(LogError::Forwarding)
    }
}

/// Keeps every sent envelope in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryChannel {
    sent: Arc<Mutex<Vec<Envelope>>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

impl Channel for MemoryChannel {
    fn send(&self, envelope: &Envelope) -> Result<()> {
        self.sent.lock().push(envelope.clone());
        Ok(())
    }
}
