//! Worker → primary wire format.
//!
//! One envelope per message:
//! `{"type":"logging","data":{"message":"…","workerID":3,"pid":4471}}`

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::context::WorkerIdentity;
use crate::error::{LogError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardPayload {
    pub message: String,
    #[serde(rename = "workerID")]
    pub worker_id: u32,
    pub pid: u32,
}

/// Tagged message sent over the inter-process channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Envelope {
    Logging(ForwardPayload),
}

impl Envelope {
    pub fn logging(message: &str, identity: WorkerIdentity) -> Self {
        Envelope::Logging(ForwardPayload {
            message: message.to_string(),
            worker_id: identity.worker_id,
            pid: identity.pid,
        })
    }
}

/// Parse one line of the channel stream.
pub fn decode_envelope(line: &str) -> Result<Envelope> {
    serde_json::from_str(line).map_err(LogError::Decode)
}

/// Iterate the envelopes in a JSON-lines stream, skipping blank lines.
pub fn read_envelopes<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Envelope>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(decode_envelope(&line)),
        Err(e) => Some(Err(LogError::Receive(e))),
    })
}
