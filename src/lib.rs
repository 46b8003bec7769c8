//! Chronicle of Living Artists - page interactions
//!
//! Browser side of the CoLA static site, compiled to WebAssembly. On load it
//! discovers the page's markup, attaches the controllers from `cola-core`
//! and wires their events:
//!
//! - mobile navigation menu
//! - light/dark theme toggle (persisted in `localStorage`)
//! - scroll-triggered reveals
//! - modal video player
//! - portal link transitions
//!
//! Features whose markup is missing stay inert. The attach summary is logged
//! to the console at `info`.

pub mod app;
pub mod driver;
pub mod listeners;
pub mod logging;
pub mod page;
pub mod storage;

use std::cell::RefCell;

use cola_core::{AttachReport, Feature};
use gloo::events::EventListener;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::app::App;
use crate::listeners::Wiring;
use crate::page::Page;

thread_local! {
    /// Page runtime, kept alive for the lifetime of the document.
    static RUNTIME: RefCell<Option<(App, Wiring)>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

/// Discover the page and attach every feature. Runs once.
fn boot() {
    if RUNTIME.with(|rt| rt.borrow().is_some()) {
        return;
    }
    let document = gloo::utils::document();

    let (config, config_error) = page::load_config(&document);
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "ignoring invalid page config, using defaults");
    }

    let page = Page::discover(&document, &config);
    let app = App::new(page.clone(), config.clone());
    let mut wiring = Wiring::new();

    listeners::wire_navigation(&mut wiring, &app);
    let theme_status = listeners::wire_theme(&mut wiring, &page, &config);
    let reveal_status = listeners::wire_reveal(&mut wiring, &page, &config);
    listeners::wire_video(&mut wiring, &app, &document);
    listeners::wire_portals(&mut wiring, &app);

    let mut report: AttachReport = app.report();
    report.record(Feature::Theme, theme_status);
    report.record(Feature::Reveal, reveal_status);
    info!(
        features = report.attached().count(),
        listeners = wiring.listener_count(),
        observing = wiring.is_observing(),
        "page attached: {}",
        report
    );

    RUNTIME.with(|rt| *rt.borrow_mut() = Some((app, wiring)));
}

/// Format an ISO date or timestamp as `March 15, 2024`.
///
/// Returns `"Invalid Date"` when the input cannot be parsed.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(input: &str) -> String {
    cola_core::format_long_date(input).unwrap_or_else(|_| "Invalid Date".to_string())
}

/// Smoothly scroll the first element matching `selector` into view.
///
/// Returns false when nothing matches.
#[wasm_bindgen(js_name = scrollToElement)]
pub fn scroll_to_element(selector: &str) -> bool {
    let Some(element) = page::query(&gloo::utils::document(), selector) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Readable text for a thrown JS value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
