//! Logger initialization for the binary

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};
use log::Level;

/// Default filter: `debug` for this crate when `debug` is set, else `level`.
/// `RUST_LOG` always takes precedence.
pub fn default_filter(level: &str, debug: bool) -> String {
    let level = if debug { "debug" } else { level };
    format!("starscan={},actix_web=info", level)
}

/// Install the global logger. Later calls are ignored.
pub fn init(level: &str, debug: bool) {
    let _ = builder(level, debug).try_init();
}

fn builder(level: &str, debug: bool) -> Builder {
    let env = Env::default().filter_or("RUST_LOG", default_filter(level, debug));

    let mut builder = Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level_label(record.level()),
            record.target(),
            record.args()
        )
    });
    builder
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
