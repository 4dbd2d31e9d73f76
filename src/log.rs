//! Logger setup shared by the binaries. All records go to stderr; stdout carries the protocol.

use ::log::{Level, LevelFilter};
use env_logger::{Builder, Target, WriteStyle};
use std::io::Write;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs a stderr logger with the given level; `RUST_LOG` takes precedence if set.
/// Calling it again after a logger has been installed has no effect.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env("RUST_LOG")
        .target(Target::Stderr)
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:>5}] {}: {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    // tests may install the logger more than once
    let _ = builder.try_init();
}

/// Like [`build_logger_for_level`], with `default` raised by one step per `-v`
pub fn build_logger_for_verbosity(default: LevelFilter, verbose: usize) {
    build_logger_for_level(raise_level(default, verbose));
}

fn raise_level(default: LevelFilter, steps: usize) -> LevelFilter {
    LEVELS[(default as usize + steps).min(LEVELS.len() - 1)]
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
