// Forwards `log` records to the browser console, one console method per level.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line: JsValue = line.into();
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{:>5}] {}: {}", level, target, message)
}

pub fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the console logger. A second call keeps the first logger.
pub fn init(debug_mode: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(debug_mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_mode_raises_verbosity() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }

    #[test]
    fn records_carry_level_and_target() {
        assert_eq!(
            format_record(Level::Warn, "shorts_frontend::feed", "slow"),
            "[ WARN] shorts_frontend::feed: slow"
        );
    }
}
