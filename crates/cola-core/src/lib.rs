//! CoLA Core Library
//!
//! Interaction state for the Chronicle of Living Artists site: the mobile
//! menu, the light/dark theme, scroll reveals, the modal video player and
//! portal links.
//!
//! ## Overview
//!
//! Nothing in this crate touches a browser. Controllers are small state
//! machines that consume [`UiEvent`]s and return [`Effect`]s; the
//! `cola-site` crate translates DOM events into `UiEvent`s and applies the
//! effects to the page.
//!
//! ## Shared State
//!
//! - **Scroll lock**: a set of holders ([`ScrollLock`]); the menu and the video
//!   can each only release their own hold
//! - **Theme**: a settings object ([`ThemeSettings`]) with subscribers
//!
//! ## Quick Start
//!
//! ```
//! use cola_core::{Coordinator, Effect, PageInventory, SiteConfig, UiEvent};
//! use cola_core::nav::NavElements;
//!
//! let inventory = PageInventory {
//!     nav: NavElements { toggle: true, panel: true, overlay: true, logo: false },
//!     ..PageInventory::default()
//! };
//! let mut coordinator = Coordinator::attach(&inventory, &SiteConfig::default());
//!
//! let effects = coordinator.dispatch(UiEvent::MenuToggleClicked);
//! assert!(effects.contains(&Effect::ScrollLock(true)));
//! ```

pub mod attach;
pub mod config;
pub mod coordinator;
pub mod effect;
pub mod error;
pub mod format;
pub mod nav;
pub mod portal;
pub mod reveal;
pub mod scroll_lock;
pub mod theme;
pub mod video;

// Re-exports
pub use attach::{AttachReport, AttachStatus, Attachment, Feature};
pub use config::SiteConfig;
pub use coordinator::{Coordinator, PageInventory, UiEvent};
pub use effect::{Effect, Effects, Part};
pub use error::{ColaError, ColaResult};
pub use format::format_long_date;
pub use portal::PortalTrigger;
pub use reveal::{Intersection, RevealTracker};
pub use scroll_lock::{LockHolder, ScrollLock};
pub use theme::{KeyValueStore, MemoryStore, Theme, ThemeLabel, ThemeSettings};
pub use video::{Playback, PlaybackOutcome, VideoSlot, VideoState};
