//! The leveled logging API.

use crate::context::{LoggerConfig, ProcessContext};
use crate::dispatch::{Channel, Dispatcher, Envelope, JsonLinesChannel, Sink, StderrSink, StdoutSink};
use crate::error::Result;
use crate::format::{Level, LineFormatter};
use crate::normalize::{normalize_errors, normalize_message, Arg, ErrorArg};

/// Process-aware logger.
///
/// On the primary process every call produces exactly one sink line; on a
/// worker every call produces exactly one forwarded envelope.
pub struct Logger {
    dispatcher: Dispatcher,
    fallback: Box<dyn Sink>,
}

impl Logger {
    pub fn builder(context: ProcessContext) -> LoggerBuilder {
        LoggerBuilder::new(context)
    }

    /// Role from [`ProcessContext::from_env`], settings from
    /// [`LoggerConfig::from_env`], stock sinks and channel.
    pub fn from_env() -> Result<Self> {
        Self::builder(ProcessContext::from_env()?)
            .config(LoggerConfig::from_env()?)
            .build()
    }

    pub fn context(&self) -> &ProcessContext {
        self.dispatcher.context()
    }

    pub fn success(&self, args: &[Arg]) -> Result<()> {
        self.emit(Level::Success, args)
    }

    pub fn info(&self, args: &[Arg]) -> Result<()> {
        self.emit(Level::Info, args)
    }

    pub fn warn(&self, args: &[Arg]) -> Result<()> {
        self.emit(Level::Warn, args)
    }

    pub fn fatal(&self, args: &[Arg]) -> Result<()> {
        self.emit(Level::Fatal, args)
    }

    pub fn log(&self, args: &[Arg]) -> Result<()> {
        self.emit(Level::Log, args)
    }

    /// Log errors, each rendered with its cause chain.
    ///
    /// Never fails: if the line cannot be dispatched, the fallback sink
    /// receives the error text together with the dispatch failure.
    pub fn error(&self, errors: &[ErrorArg]) {
        let args: Vec<Arg> = normalize_errors(errors).into_iter().map(Arg::Text).collect();
        let message = self.normalize(&args);

        if let Err(e) = self.dispatch(Level::Error, &message) {
            log::debug!("{} ERROR_PATH_FALLBACK error={}", self.context(), e);
            let report = format!("{:?}", anyhow::Error::new(e).context(message));
            // Nothing left to report a fallback failure to.
            let _ = self.fallback.write_line(&report);
        }
    }

    /// Normalize `args`, decorate for `level` and dispatch.
    ///
    /// [`Level::Error`] goes through the same text path here; use
    /// [`Logger::error`] for error values.
    pub fn emit(&self, level: Level, args: &[Arg]) -> Result<()> {
        let message = self.normalize(args);
        self.dispatch(level, &message)
    }

    /// Hand an envelope received from a worker to the dispatcher.
    pub fn relay(&self, envelope: &Envelope) -> Result<()> {
        self.dispatcher.relay(envelope)
    }

    fn dispatch(&self, level: Level, message: &str) -> Result<()> {
        let styler = self.dispatcher.formatter().styler();
        self.dispatcher.dispatch(&level.decorate(message, styler))
    }

    fn normalize(&self, args: &[Arg]) -> String {
        normalize_message(args, |e| {
            self.error(&[ErrorArg::Text(e.to_string())]);
        })
    }
}

/// Assembles a [`Logger`]; unset collaborators fall back to stdout for the
/// sink, JSON lines on stdout for the channel and stderr for the fallback.
pub struct LoggerBuilder {
    context: ProcessContext,
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
    channel: Option<Box<dyn Channel>>,
    fallback: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new(context: ProcessContext) -> Self {
        Self {
            context,
            config: LoggerConfig::default(),
            sink: None,
            channel: None,
            fallback: None,
        }
    }

    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn channel<C: Channel + 'static>(mut self, channel: C) -> Self {
        self.channel = Some(Box::new(channel));
        self
    }

    pub fn fallback<S: Sink + 'static>(mut self, fallback: S) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Color is resolved here, once per logger; `ColorChoice::Auto`
    /// follows the environment at build time.
    pub fn build(self) -> Result<Logger> {
        let formatter = LineFormatter::from_config(&self.config)?;

        log::debug!(
            "{} LOGGER_BUILT color={:?} ansi={} timestamp_format={:?}",
            self.context,
            self.config.color,
            formatter.styler().is_enabled(),
            self.config.timestamp_format
        );

        let dispatcher = Dispatcher::new(
            self.context,
            formatter,
            self.sink.unwrap_or_else(|| Box::new(StdoutSink)),
            self.channel
                .unwrap_or_else(|| Box::new(JsonLinesChannel::stdout())),
        );

        Ok(Logger {
            dispatcher,
            fallback: self.fallback.unwrap_or_else(|| Box::new(StderrSink)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ColorChoice;
    use crate::dispatch::{MemoryChannel, MemorySink};
    use crate::error::LogError;
    use serde::ser::{Error as _, Serializer};
    use serde::Serialize;
    use std::io;

    struct Cyclic;

    impl Serialize for Cyclic {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cyclic structure"))
        }
    }

    struct BrokenChannel;

    impl Channel for BrokenChannel {
        fn send(&self, _envelope: &Envelope) -> Result<()> {
            Err(LogError::Forwarding(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "primary went away",
            )))
        }
    }

    fn config() -> LoggerConfig {
        LoggerConfig {
            color: ColorChoice::Always,
            ..LoggerConfig::default()
        }
    }

    fn primary() -> (Logger, MemorySink, MemorySink) {
        let sink = MemorySink::new();
        let fallback = MemorySink::new();
        let logger = Logger::builder(ProcessContext::primary())
            .config(config())
            .sink(sink.clone())
            .channel(MemoryChannel::new())
            .fallback(fallback.clone())
            .build()
            .unwrap();
        (logger, sink, fallback)
    }

    #[test]
    fn test_each_level_writes_one_line() {
        let (logger, sink, _) = primary();

        logger.success(&[Arg::from("a")]).unwrap();
        logger.info(&[Arg::from("b")]).unwrap();
        logger.warn(&[Arg::from("c")]).unwrap();
        logger.error(&[ErrorArg::from("d")]);
        logger.fatal(&[Arg::from("e")]).unwrap();
        logger.log(&[Arg::from("f")]).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("\x1b[32mSuccess: a\x1b[0m"));
        assert!(lines[1].contains("\x1b[34mInfo: b\x1b[0m"));
        assert!(lines[2].contains("\x1b[33mWarn: c\x1b[0m"));
        assert!(lines[3].contains("\x1b[31md\x1b[0m"));
        assert!(lines[4].contains("\x1b[31mFatal: e\x1b[0m"));
        assert!(lines[5].ends_with("] f"));
    }

    #[test]
    fn test_serialization_failure_goes_through_error_path() {
        let (logger, sink, fallback) = primary();

        logger.info(&[Arg::from("state"), Arg::json(&Cyclic)]).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\x1b[31mSerialization failed: cyclic structure"));
        assert!(lines[1].contains("Info: state|<unserializable>"));
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_forwarding_failure_propagates() {
        let logger = Logger::builder(ProcessContext::worker(1, 10))
            .config(config())
            .sink(MemorySink::new())
            .channel(BrokenChannel)
            .fallback(MemorySink::new())
            .build()
            .unwrap();

        let err = logger.warn(&[Arg::from("unsent")]).unwrap_err();
        assert!(matches!(err, LogError::Forwarding(_)));
    }

    #[test]
    fn test_error_failure_goes_to_fallback() {
        let sink = MemorySink::new();
        let fallback = MemorySink::new();
        let logger = Logger::builder(ProcessContext::worker(1, 10))
            .config(config())
            .sink(sink.clone())
            .channel(BrokenChannel)
            .fallback(fallback.clone())
            .build()
            .unwrap();

        logger.error(&[ErrorArg::from("boom")]);

        assert!(sink.is_empty());
        let reported = fallback.lines();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].starts_with("boom"));
        assert!(reported[0].contains("Forwarding to primary failed"));
        assert!(reported[0].contains("primary went away"));
    }

    #[test]
    fn test_fallback_keeps_error_chain() {
        let fallback = MemorySink::new();
        let logger = Logger::builder(ProcessContext::worker(1, 10))
            .config(config())
            .sink(MemorySink::new())
            .channel(BrokenChannel)
            .fallback(fallback.clone())
            .build()
            .unwrap();

        logger.error(&[ErrorArg::from(anyhow::anyhow!("disk gone").context("flush failed"))]);

        let reported = fallback.lines();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].contains("flush failed"));
        assert!(reported[0].contains("disk gone"));
        assert!(reported[0].contains("primary went away"));
    }

    #[test]
    fn test_never_color_has_no_escapes() {
        let sink = MemorySink::new();
        let logger = Logger::builder(ProcessContext::primary())
            .config(LoggerConfig {
                color: ColorChoice::Never,
                ..LoggerConfig::default()
            })
            .sink(sink.clone())
            .build()
            .unwrap();

        logger.info(&[Arg::from("x")]).unwrap();
        logger.error(&[ErrorArg::from("y")]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(!line.contains('\x1b'), "unexpected escape in {:?}", line);
        }
        assert!(lines[0].ends_with("] Info: x"));
        assert!(lines[1].ends_with("] y"));
    }

    #[test]
    fn test_color_choice_is_per_logger() {
        let plain_sink = MemorySink::new();
        let never = Logger::builder(ProcessContext::primary())
            .config(LoggerConfig {
                color: ColorChoice::Never,
                ..LoggerConfig::default()
            })
            .sink(plain_sink.clone())
            .build()
            .unwrap();

        let ansi_sink = MemorySink::new();
        let always = Logger::builder(ProcessContext::primary())
            .config(config())
            .sink(ansi_sink.clone())
            .build()
            .unwrap();

        never.info(&[Arg::from("x")]).unwrap();
        always.info(&[Arg::from("x")]).unwrap();
        never.info(&[Arg::from("x")]).unwrap();

        for line in plain_sink.lines() {
            assert!(!line.contains('\x1b'), "unexpected escape in {:?}", line);
        }
        assert!(ansi_sink.lines()[0].contains("\x1b[34mInfo: x\x1b[0m"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Logger::builder(ProcessContext::primary())
            .config(LoggerConfig {
                color: ColorChoice::Always,
                timestamp_format: "%Q".to_string(),
            })
            .build();

        assert!(matches!(result, Err(LogError::Config(_))));
    }
}
