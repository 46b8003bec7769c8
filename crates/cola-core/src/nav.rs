//! Mobile navigation menu.
//!
//! The open/closed state is mirrored on three elements (toggle control, menu
//! panel and, when present, the dimming overlay). Every transition emits the
//! marker for all of them together so they can never drift apart.

use tracing::debug;

use crate::attach::Attachment;
use crate::effect::{Effect, Effects, Part};
use crate::scroll_lock::{LockHolder, ScrollLock};

/// Which navigation elements were found on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavElements {
    pub toggle: bool,
    pub panel: bool,
    pub overlay: bool,
    pub logo: bool,
}

/// Menu open/closed state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    open: bool,
    has_overlay: bool,
    has_logo: bool,
    home_path: String,
}

impl NavigationController {
    /// Attach to the discovered elements. Toggle and panel are required.
    pub fn attach(elements: NavElements, home_path: impl Into<String>) -> Attachment<Self> {
        if !elements.toggle {
            return Attachment::not_applicable("menu toggle");
        }
        if !elements.panel {
            return Attachment::not_applicable("menu panel");
        }
        Attachment::Attached(Self {
            open: false,
            has_overlay: elements.overlay,
            has_logo: elements.logo,
            home_path: home_path.into(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle control clicked: flip the menu.
    pub fn toggle(&mut self, lock: &mut ScrollLock) -> Effects {
        self.set_open(!self.open, lock)
    }

    /// Overlay or menu link clicked: force closed.
    ///
    /// Link navigation is not prevented; the visual state is reset and the
    /// browser proceeds.
    pub fn close(&mut self, lock: &mut ScrollLock) -> Effects {
        self.set_open(false, lock)
    }

    /// Logo clicked: go home. Inert when the page has no logo control.
    pub fn logo_clicked(&self) -> Effects {
        if !self.has_logo {
            return Vec::new();
        }
        vec![Effect::Navigate(self.home_path.clone())]
    }

    fn set_open(&mut self, open: bool, lock: &mut ScrollLock) -> Effects {
        self.open = open;
        debug!(open, "menu state changed");

        let mut effects = vec![
            Effect::SetActive {
                part: Part::MenuToggle,
                active: open,
            },
            Effect::SetActive {
                part: Part::MenuPanel,
                active: open,
            },
        ];
        if self.has_overlay {
            effects.push(Effect::SetActive {
                part: Part::MenuOverlay,
                active: open,
            });
        }
        if let Some(locked) = lock.set(LockHolder::Menu, open) {
            effects.push(Effect::ScrollLock(locked));
        }
        effects
    }
}
