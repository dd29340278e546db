//! Routing decision: write locally or forward to the primary.

use crate::context::{ProcessContext, ProcessRole, WorkerIdentity};
use crate::error::{LogError, Result};
use crate::format::LineFormatter;

use super::channel::Channel;
use super::payload::Envelope;
use super::sink::Sink;

/// Routes leveled messages according to the process role.
///
/// # Decision Tree
/// 1. Primary -> timestamp the message and write it to the sink
/// 2. Worker -> wrap the message in an envelope and send it to the primary
///
/// A worker never touches the sink.
pub struct Dispatcher {
    context: ProcessContext,
    formatter: LineFormatter,
    sink: Box<dyn Sink>,
    channel: Box<dyn Channel>,
}

impl Dispatcher {
    pub fn new(
        context: ProcessContext,
        formatter: LineFormatter,
        sink: Box<dyn Sink>,
        channel: Box<dyn Channel>,
    ) -> Self {
        Self {
            context,
            formatter,
            sink,
            channel,
        }
    }

    pub fn context(&self) -> &ProcessContext {
        &self.context
    }

    pub fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    /// Route one leveled message. Forwarding and sink failures are returned
    /// as-is.
    pub fn dispatch(&self, message: &str) -> Result<()> {
        match self.context.role {
            ProcessRole::Primary => self.write(message),
            ProcessRole::Worker(identity) => self.forward(message, identity),
        }
    }

    /// Route an envelope received from a worker.
    ///
    /// The primary timestamps and writes the carried message; a worker
    /// passes the envelope on unchanged.
    pub fn relay(&self, envelope: &Envelope) -> Result<()> {
        match self.context.role {
            ProcessRole::Primary => {
                let Envelope::Logging(payload) = envelope;
                log::debug!(
                    "{} DISPATCH_RELAY worker_id={} pid={}",
                    self.context,
                    payload.worker_id,
                    payload.pid
                );
                self.write(&payload.message)
            }
            ProcessRole::Worker(_) => self.send(envelope),
        }
    }

    fn write(&self, message: &str) -> Result<()> {
        self.sink
            .write_line(&self.formatter.format(message))
            .map_err(LogError::Sink)
    }

    fn forward(&self, message: &str, identity: WorkerIdentity) -> Result<()> {
        log::trace!(
            "{} DISPATCH_FORWARD worker_id={} pid={}",
            self.context,
            identity.worker_id,
            identity.pid
        );
        self.send(&Envelope::logging(message, identity))
    }

    fn send(&self, envelope: &Envelope) -> Result<()> {
        self.channel.send(envelope).map_err(|e| {
            log::debug!("{} DISPATCH_FORWARD_FAILED error={}", self.context, e);
            e
        })
    }
}
