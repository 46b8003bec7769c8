//! Event wiring.
//!
//! Each `wire_*` function attaches the listeners for one feature. Theme and
//! reveal own their state here and return their attach status; the other
//! features report through the coordinator. Listeners are collected into
//! [`Wiring`], which lives for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use cola_core::reveal::Intersection;
use cola_core::{AttachStatus, Attachment, RevealTracker, SiteConfig, ThemeSettings, UiEvent};
use gloo::events::EventListener;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use crate::app::App;
use crate::js_error_message;
use crate::page::Page;
use crate::storage::LocalStore;

/// Shared theme settings backed by `localStorage`.
pub type SharedTheme = Rc<RefCell<ThemeSettings<LocalStore>>>;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Everything that must stay alive for the listeners to keep firing.
#[derive(Default)]
pub struct Wiring {
    listeners: Vec<EventListener>,
    theme: Option<SharedTheme>,
    reveal: Option<(IntersectionObserver, RevealCallback)>,
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn theme(&self) -> Option<&SharedTheme> {
        self.theme.as_ref()
    }

    pub fn is_observing(&self) -> bool {
        self.reveal.is_some()
    }

    fn on_click(&mut self, target: &EventTarget, app: &App, event: UiEvent) {
        let app = app.clone();
        self.listeners.push(EventListener::new(target, "click", move |_| {
            app.dispatch(event.clone());
        }));
    }
}

/// Menu toggle, overlay, links and logo.
pub fn wire_navigation(wiring: &mut Wiring, app: &App) {
    if app.page().menu_toggle.is_none() || app.page().nav_menu.is_none() {
        return;
    }
    let page = app.page().clone();

    if let Some(toggle) = &page.menu_toggle {
        wiring.on_click(toggle, app, UiEvent::MenuToggleClicked);
    }
    if let Some(overlay) = &page.menu_overlay {
        wiring.on_click(overlay, app, UiEvent::MenuOverlayClicked);
    }
    for link in &page.nav_links {
        wiring.on_click(link, app, UiEvent::MenuLinkClicked);
    }
    if let Some(logo) = &page.nav_logo {
        wiring.on_click(logo, app, UiEvent::LogoClicked);
    }
}

/// Theme toggle. The document attribute and button label follow the
/// settings through a subscription.
pub fn wire_theme(wiring: &mut Wiring, page: &Page, config: &SiteConfig) -> AttachStatus {
    let settings = ThemeSettings::attach(
        page.theme_toggle.is_some(),
        LocalStore::new(),
        config.theme_storage_key.clone(),
    );
    let status = settings.status();
    let (Attachment::Attached(mut settings), Some(toggle)) = (settings, page.theme_toggle.clone())
    else {
        return status;
    };

    let root = page.root.clone();
    let attribute = config.theme_attribute.clone();
    let label_target = toggle.clone();
    settings.subscribe(move |theme| {
        if let Some(root) = &root {
            if let Err(e) = root.set_attribute(&attribute, theme.as_str()) {
                warn!(error = %js_error_message(&e), "could not set theme attribute");
            }
        }
        label_target.set_text_content(Some(&theme.label().to_string()));
    });

    let settings: SharedTheme = Rc::new(RefCell::new(settings));
    let handle = settings.clone();
    wiring
        .listeners
        .push(EventListener::new(&toggle, "click", move |_| {
            if let Err(e) = handle.borrow_mut().toggle() {
                warn!(error = %e, "theme change not persisted");
            }
        }));
    wiring.theme = Some(settings);
    status
}

/// Scroll reveals through an `IntersectionObserver`.
pub fn wire_reveal(wiring: &mut Wiring, page: &Page, config: &SiteConfig) -> AttachStatus {
    let targets = page.reveal_targets.clone();
    let tracker = RevealTracker::attach(0..targets.len());
    let status = tracker.status();
    let Attachment::Attached(tracker) = tracker else {
        return status;
    };

    let tracker = Rc::new(RefCell::new(tracker));
    let visible = config.markers.visible.clone();
    let callback_targets = targets.clone();
    let callback: RevealCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let reports = entries.iter().filter_map(|value| {
            let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
            let target = entry.target();
            let index = callback_targets.iter().position(|el| *el == target)?;
            Some(Intersection::new(index, entry.is_intersecting()))
        });

        let mut tracker = tracker.borrow_mut();
        for index in tracker.on_intersections(reports) {
            let el: &Element = &callback_targets[index];
            let _ = el.class_list().add_1(&visible);
            observer.unobserve(el);
        }
        if tracker.is_complete() {
            debug!("all reveal targets shown");
            observer.disconnect();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.reveal.threshold.into());
    options.set_root_margin(&config.reveal.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            wiring.reveal = Some((observer, callback));
            status
        }
        Err(e) => {
            // Without an observer the elements would stay hidden; show them now.
            warn!(error = %js_error_message(&e), "IntersectionObserver unavailable, revealing all");
            for target in &targets {
                let _ = target.class_list().add_1(&config.markers.visible);
            }
            AttachStatus::NotApplicable("intersection observer")
        }
    }
}

/// Video slots, close control, backdrop and the Escape key.
pub fn wire_video(wiring: &mut Wiring, app: &App, document: &Document) {
    let page = app.page().clone();
    let Some(overlay) = page.video_overlay.clone() else {
        return;
    };
    if page.video_media.is_none() {
        return;
    }

    for (slot_el, slot) in &page.video_slots {
        let source = slot.source().map(str::to_string);
        wiring.on_click(slot_el, app, UiEvent::SlotClicked { source });
    }
    if let Some(close) = &page.video_close {
        wiring.on_click(close, app, UiEvent::VideoCloseClicked);
    }

    let backdrop: EventTarget = overlay.clone().into();
    let handle = app.clone();
    wiring
        .listeners
        .push(EventListener::new(&overlay, "click", move |event| {
            let on_backdrop = event.target().as_ref() == Some(&backdrop);
            handle.dispatch(UiEvent::VideoOverlayClicked { on_backdrop });
        }));

    let handle = app.clone();
    wiring
        .listeners
        .push(EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handle.dispatch(UiEvent::KeyDown { key: event.key() });
            }
        }));
}

/// Portal links.
pub fn wire_portals(wiring: &mut Wiring, app: &App) {
    let page = app.page().clone();
    for (el, trigger) in &page.portals {
        wiring.on_click(el, app, UiEvent::PortalClicked(trigger.clone()));
    }
}
