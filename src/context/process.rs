//! Process role and identity.
//!
//! Built once at startup and handed to the logger, so routing never has
//! to consult ambient state.

use std::env;
use std::fmt;

use crate::error::{LogError, Result};

/// Environment variable that marks a process as a worker and carries its
/// logical worker id.
pub const WORKER_ID_ENV: &str = "RELAYLOG_WORKER_ID";

/// Identity a worker reports alongside every forwarded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerIdentity {
    pub worker_id: u32,
    pub pid: u32,
}

/// Whether this process writes log lines itself or forwards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessRole {
    Primary,
    Worker(WorkerIdentity),
}

/// Context for the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessContext {
    pub role: ProcessRole,
}

impl ProcessContext {
    pub fn primary() -> Self {
        Self {
            role: ProcessRole::Primary,
        }
    }

    pub fn worker(worker_id: u32, pid: u32) -> Self {
        Self {
            role: ProcessRole::Worker(WorkerIdentity { worker_id, pid }),
        }
    }

    /// Detect the role from [`WORKER_ID_ENV`].
    ///
    /// Unset means primary. A numeric value means worker, with the OS pid
    /// of this process.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ProcessContext::from_env`] with a caller-supplied variable
    /// lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = match lookup(WORKER_ID_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Self::primary()),
        };

        let worker_id = raw.trim().parse::<u32>().map_err(|e| {
            LogError::Config(format!("{}={:?} is not a worker id: {}", WORKER_ID_ENV, raw, e))
        })?;

        Ok(Self::worker(worker_id, std::process::id()))
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.role, ProcessRole::Primary)
    }

    pub fn worker_identity(&self) -> Option<WorkerIdentity> {
        match self.role {
            ProcessRole::Primary => None,
            ProcessRole::Worker(identity) => Some(identity),
        }
    }
}

impl fmt::Display for ProcessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            ProcessRole::Primary => write!(f, "[role=primary]"),
            ProcessRole::Worker(id) => {
                write!(f, "[role=worker] [worker={}] [pid={}]", id.worker_id, id.pid)
            }
        }
    }
}
