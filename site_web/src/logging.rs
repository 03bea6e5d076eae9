//! Tracing output to the browser console.
//!
//! `tracing-subscriber`'s fmt layer writes to stdout, which goes nowhere in
//! the browser, so events are forwarded to `console.*` by [`ConsoleLayer`].

use std::fmt::{self, Write as _};

use site_core::settings::LogLevel;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Layer that writes each event as one console line
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        let line = JsValue::from_str(&format_line(metadata.target(), &visitor.message, &visitor.fields));

        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

/// `[target] message key=value ...`
pub fn format_line(target: &str, message: &str, fields: &str) -> String {
    format!("[{}] {}{}", target, message, fields)
}

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    }
}

/// Install the console subscriber. A second call is a no-op.
pub fn init_console_logger(level: LogLevel) {
    let result = tracing_subscriber::registry()
        .with(level_filter(level))
        .with(ConsoleLayer)
        .try_init();

    if result.is_err() {
        tracing::debug!("console logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("site_web::components::pricing", "quote rendered", " tier=basic"),
            "[site_web::components::pricing] quote rendered tier=basic"
        );
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(LogLevel::default()), LevelFilter::INFO);
    }
}
