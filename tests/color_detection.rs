//! `ColorChoice::Auto` follows `NO_COLOR` / `CLICOLOR_FORCE`.
//!
//! Kept in its own test binary with a single test: it mutates process
//! environment variables.

use std::env;

use relaylog::{Arg, ColorChoice, Logger, LoggerConfig, MemorySink, ProcessContext};

fn auto_logger(sink: &MemorySink) -> Logger {
    Logger::builder(ProcessContext::primary())
        .config(LoggerConfig {
            color: ColorChoice::Auto,
            ..LoggerConfig::default()
        })
        .sink(sink.clone())
        .build()
        .unwrap()
}

#[test]
fn test_auto_follows_environment() {
    env::remove_var("CLICOLOR_FORCE");
    env::remove_var("CLICOLOR");
    env::set_var("NO_COLOR", "1");

    let plain_sink = MemorySink::new();
    auto_logger(&plain_sink).info(&[Arg::from("y")]).unwrap();
    assert!(!plain_sink.lines()[0].contains('\x1b'));
    assert!(plain_sink.lines()[0].ends_with("] Info: y"));

    env::remove_var("NO_COLOR");
    env::set_var("CLICOLOR_FORCE", "1");

    let forced_sink = MemorySink::new();
    auto_logger(&forced_sink).info(&[Arg::from("y")]).unwrap();
    assert!(forced_sink.lines()[0].contains("\x1b[34mInfo: y\x1b[0m"));

    // Loggers built earlier keep the choice they resolved at build time.
    auto_logger(&plain_sink);
    assert_eq!(plain_sink.len(), 1);
}
