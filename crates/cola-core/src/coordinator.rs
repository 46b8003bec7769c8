//! Interaction-state coordinator.
//!
//! Owns the controllers that share the scroll lock (menu and video) plus the
//! portal handler, and routes page events to them.
//!
//! ```text
//!  DOM event ──► UiEvent ──► Coordinator::dispatch ──► Vec<Effect> ──► driver
//!                               │
//!                               ├── NavigationController ─┐
//!                               ├── VideoController ──────┼── ScrollLock
//!                               └── PortalTrigger         ┘
//! ```
//!
//! The controllers never see each other. Their only shared state is the
//! [`ScrollLock`], where each can only release its own hold.

use tracing::{debug, trace};

use crate::attach::{AttachReport, AttachStatus, Attachment, Feature};
use crate::config::{PortalConfig, SiteConfig};
use crate::effect::Effects;
use crate::nav::{NavElements, NavigationController};
use crate::portal::PortalTrigger;
use crate::scroll_lock::ScrollLock;
use crate::video::{PlaybackOutcome, VideoController, VideoElements};

/// Elements discovered on the page at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInventory {
    pub nav: NavElements,
    pub video: VideoElements,
    /// Portals that are not marked disabled.
    pub wired_portals: usize,
}

/// A page event, already stripped of DOM details.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MenuToggleClicked,
    MenuOverlayClicked,
    MenuLinkClicked,
    LogoClicked,
    SlotClicked { source: Option<String> },
    VideoCloseClicked,
    /// Click that reached the video overlay; `on_backdrop` is true when the
    /// overlay itself was the target.
    VideoOverlayClicked { on_backdrop: bool },
    KeyDown { key: String },
    PlaybackSettled { source: String, outcome: PlaybackOutcome },
    PortalClicked(PortalTrigger),
}

/// Routes events to the attached controllers.
#[derive(Debug, Clone)]
pub struct Coordinator {
    nav: Attachment<NavigationController>,
    video: Attachment<VideoController>,
    portals: Attachment<usize>,
    portal_config: PortalConfig,
    lock: ScrollLock,
}

impl Coordinator {
    pub fn attach(inventory: &PageInventory, config: &SiteConfig) -> Self {
        let portals = if inventory.wired_portals > 0 {
            Attachment::Attached(inventory.wired_portals)
        } else {
            Attachment::not_applicable("portal links")
        };

        let coordinator = Self {
            nav: NavigationController::attach(inventory.nav, config.home_path.clone()),
            video: VideoController::attach(inventory.video),
            portals,
            portal_config: config.portal.clone(),
            lock: ScrollLock::new(),
        };
        debug!(report = %coordinator.report(), "coordinator attached");
        coordinator
    }

    /// Attach status of the features this coordinator owns.
    pub fn report(&self) -> AttachReport {
        let mut report = AttachReport::new();
        report.record(Feature::Navigation, self.nav.status());
        report.record(Feature::Video, self.video.status());
        report.record(Feature::Portal, self.portals.status());
        report
    }

    pub fn status(&self, feature: Feature) -> Option<AttachStatus> {
        self.report().status(feature)
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn navigation(&self) -> Option<&NavigationController> {
        self.nav.as_ref().into_option()
    }

    pub fn video(&self) -> Option<&VideoController> {
        self.video.as_ref().into_option()
    }

    pub fn menu_open(&self) -> bool {
        self.navigation().is_some_and(NavigationController::is_open)
    }

    pub fn video_open(&self) -> bool {
        self.video().is_some_and(VideoController::is_open)
    }

    /// Handle one event. Events for features that did not attach are ignored.
    pub fn dispatch(&mut self, event: UiEvent) -> Effects {
        trace!(?event, "dispatch");
        let lock = &mut self.lock;

        match event {
            UiEvent::MenuToggleClicked => match &mut self.nav {
                Attachment::Attached(nav) => nav.toggle(lock),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::MenuOverlayClicked | UiEvent::MenuLinkClicked => match &mut self.nav {
                Attachment::Attached(nav) => nav.close(lock),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::LogoClicked => match &self.nav {
                Attachment::Attached(nav) => nav.logo_clicked(),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::SlotClicked { source } => match (&mut self.video, source) {
                (Attachment::Attached(video), Some(source)) => video.open(&source, lock),
                _ => Vec::new(),
            },
            UiEvent::VideoCloseClicked => match &mut self.video {
                Attachment::Attached(video) => video.close(lock),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::VideoOverlayClicked { on_backdrop } => match &mut self.video {
                Attachment::Attached(video) => video.overlay_clicked(on_backdrop, lock),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::KeyDown { key } => match &mut self.video {
                Attachment::Attached(video) => video.key_pressed(&key, lock),
                Attachment::NotApplicable { .. } => Vec::new(),
            },
            UiEvent::PlaybackSettled { source, outcome } => {
                if let Attachment::Attached(video) = &mut self.video {
                    video.playback_settled(&source, outcome);
                }
                Vec::new()
            }
            UiEvent::PortalClicked(trigger) => trigger.clicked(&self.portal_config),
        }
    }
}
