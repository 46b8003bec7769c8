//! Custom tracing Layer that writes to the browser console.
//!
//! This layer integrates with the `tracing` crate to capture log events and
//! route them to `console.error` / `warn` / `info` / `log` / `debug` by level.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use wasm_bindgen::JsValue;

use super::entry::ConsoleEntry;

/// A tracing Layer that writes events to the browser console.
pub struct ConsoleLayer {
    max_level: LevelFilter,
}

impl ConsoleLayer {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Build the entry for an event.
    fn entry_for(event: &Event<'_>, spans: Option<String>) -> ConsoleEntry {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut entry = ConsoleEntry::new(
            *metadata.level(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        for (name, value) in visitor.fields {
            entry = entry.with_field(name, value);
        }
        if let Some(spans) = spans {
            entry = entry.with_field("span", spans);
        }
        entry
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if *event.metadata().level() > self.max_level {
            return;
        }

        let spans = ctx.event_scope(event).map(|scope| {
            scope
                .from_root()
                .map(|span| span.name().to_string())
                .collect::<Vec<_>>()
                .join(" > ")
        });
        let spans = spans.filter(|s| !s.is_empty());

        write_console(&Self::entry_for(event, spans));
    }
}

fn write_console(entry: &ConsoleEntry) {
    let line = JsValue::from_str(&entry.to_line());
    match entry.level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        Level::DEBUG => web_sys::console::log_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Visitor that extracts the message and fields from tracing events.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        self.record_string(field, buf);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_string(field, value.to_string());
    }
}

impl FieldVisitor {
    fn record_string(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}
