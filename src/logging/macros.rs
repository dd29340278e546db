//! Variadic front-ends for the [`Logger`](crate::Logger) entry points.
//!
//! Each argument goes through `Arg::from` (or `ErrorArg::from` for
//! `error!`), so anything `Display` can be passed directly; wrap
//! structured values in `Arg::json(&value)`.

/// Log a success message.
#[macro_export]
macro_rules! success {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.success(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log errors or error messages.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::ErrorArg::from($arg)),*])
    };
}

/// Log a fatal message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log an undecorated message.
#[macro_export]
macro_rules! log {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::Arg::from($arg)),*])
    };
}
