//! Message normalization.
//!
//! Reduces an ordered argument list to the single string that gets
//! leveled, formatted and dispatched.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::LogError;

/// Separator placed between arguments.
pub const DELIMITER: &str = "|";

/// Stand-in for an argument whose serialization failed.
pub const UNSERIALIZABLE: &str = "<unserializable>";

/// One argument to a log call.
#[derive(Debug)]
pub enum Arg {
    /// Already text; used verbatim.
    Text(String),
    /// Structured value captured for JSON rendering.
    Structured(Result<Value, LogError>),
}

impl Arg {
    /// Capture a structured value. Serialization errors are kept and
    /// reported when the message is normalized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        Arg::Structured(serde_json::to_value(value).map_err(LogError::Serialization))
    }
}

impl<T: fmt::Display> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Text(value.to_string())
    }
}

/// Join `args` with [`DELIMITER`].
///
/// Structured arguments render as compact JSON, except JSON strings which
/// render as their contents. When a structured argument failed to
/// serialize, `on_failure` receives the error and the argument renders as
/// [`UNSERIALIZABLE`]; normalization itself never fails.
pub fn normalize_message<F>(args: &[Arg], mut on_failure: F) -> String
where
    F: FnMut(&LogError),
{
    args.iter()
        .map(|arg| render_arg(arg, &mut on_failure))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

fn render_arg<F>(arg: &Arg, on_failure: &mut F) -> String
where
    F: FnMut(&LogError),
{
    match arg {
        Arg::Text(text) => text.clone(),
        Arg::Structured(Ok(Value::String(text))) => text.clone(),
        Arg::Structured(Ok(value)) => value.to_string(),
        Arg::Structured(Err(e)) => {
            log::debug!("NORMALIZE_SERIALIZE_FAILED error={}", e);
            on_failure(e);
            UNSERIALIZABLE.to_string()
        }
    }
}
