//! Shared page runtime.
//!
//! `App` is a cheap handle to the discovered page, the configuration and the
//! coordinator. Every event listener holds a clone and routes through
//! [`App::dispatch`].

use std::cell::RefCell;
use std::rc::Rc;

use cola_core::{AttachReport, Coordinator, SiteConfig, UiEvent};

use crate::driver;
use crate::page::Page;

struct AppInner {
    page: Page,
    config: SiteConfig,
    coordinator: RefCell<Coordinator>,
}

/// Handle to the page runtime.
#[derive(Clone)]
pub struct App {
    inner: Rc<AppInner>,
}

impl App {
    pub fn new(page: Page, config: SiteConfig) -> Self {
        let coordinator = Coordinator::attach(&page.inventory(), &config);
        Self {
            inner: Rc::new(AppInner {
                page,
                config,
                coordinator: RefCell::new(coordinator),
            }),
        }
    }

    pub fn page(&self) -> &Page {
        &self.inner.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    pub fn report(&self) -> AttachReport {
        self.inner.coordinator.borrow().report()
    }

    /// Run an event through the coordinator and apply the resulting effects.
    ///
    /// The coordinator borrow ends before effects are applied, so effects
    /// that feed events back (playback outcomes) never re-enter a borrow.
    pub fn dispatch(&self, event: UiEvent) {
        let effects = self.inner.coordinator.borrow_mut().dispatch(event);
        if !effects.is_empty() {
            driver::apply(self, &effects);
        }
    }
}
