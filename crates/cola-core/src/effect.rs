//! DOM mutations requested by the controllers.
//!
//! Controllers never touch the page. They return effects, and the browser
//! driver applies them in order.

use std::time::Duration;

/// Elements whose `active` marker a controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    MenuToggle,
    MenuPanel,
    MenuOverlay,
    VideoOverlay,
}

/// A single DOM mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add or remove the `active` marker on a part.
    SetActive { part: Part, active: bool },
    /// Lock (`overflow: hidden`) or unlock page scrolling.
    ScrollLock(bool),
    /// Assign the media element's source. Empty clears it.
    SetMediaSource(String),
    /// Request playback; the outcome is reported back as a `UiEvent`.
    PlayMedia,
    PauseMedia,
    /// Navigate immediately.
    Navigate(String),
    /// Set the body transition and fade it to transparent.
    FadeOutBody { transition: String },
    /// Navigate once the delay elapses. Not cancellable.
    NavigateAfter { href: String, delay: Duration },
}

/// Collected effects for one event.
pub type Effects = Vec<Effect>;
