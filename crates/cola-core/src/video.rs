//! Modal video player.
//!
//! ## States
//!
//! ```text
//!            slot click (source)                 close / backdrop / Escape
//! Closed ───────────────────────► Open{source} ───────────────────────────► Closed
//!                                   │    ▲
//!                                   └────┘ slot click (another source)
//! ```
//!
//! The source is non-empty exactly while the overlay is open.
//!
//! ## Autoplay
//!
//! Starting playback can be refused by the browser. That refusal is ignored
//! on purpose: the overlay stays open with a paused player and the visitor
//! starts it by hand. The outcome is still recorded as [`Playback::Blocked`].

use tracing::debug;

use crate::attach::Attachment;
use crate::effect::{Effect, Effects, Part};
use crate::scroll_lock::{LockHolder, ScrollLock};

/// Key that dismisses the overlay.
pub const CLOSE_KEY: &str = "Escape";

/// A clickable slot discovered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSlot {
    source: Option<String>,
    marked_empty: bool,
}

impl VideoSlot {
    pub fn new(source: Option<String>, marked_empty: bool) -> Self {
        Self {
            source,
            marked_empty,
        }
    }

    /// Slots marked empty are never wired to a click handler.
    pub fn is_wired(&self) -> bool {
        !self.marked_empty
    }

    /// The source to open, if the slot carries a non-empty one.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// Which video elements were found on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoElements {
    pub overlay: bool,
    pub media: bool,
    pub close: bool,
}

/// Playback status while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Play was requested, no outcome yet.
    Pending,
    Playing,
    /// The browser refused to start playback; the player waits for the visitor.
    Blocked,
}

/// Result of a play request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Started,
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoState {
    Closed,
    Open { source: String, playback: Playback },
}

/// Overlay open/closed state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoController {
    state: VideoState,
    has_close: bool,
}

impl VideoController {
    /// Attach to the discovered elements. Overlay and media are required.
    pub fn attach(elements: VideoElements) -> Attachment<Self> {
        if !elements.overlay {
            return Attachment::not_applicable("video overlay");
        }
        if !elements.media {
            return Attachment::not_applicable("media element");
        }
        Attachment::Attached(Self {
            state: VideoState::Closed,
            has_close: elements.close,
        })
    }

    pub fn state(&self) -> &VideoState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, VideoState::Open { .. })
    }

    pub fn has_close_control(&self) -> bool {
        self.has_close
    }

    /// Current source; empty while closed.
    pub fn source(&self) -> &str {
        match &self.state {
            VideoState::Open { source, .. } => source,
            VideoState::Closed => "",
        }
    }

    /// Slot clicked. Empty sources leave the player untouched.
    pub fn open(&mut self, source: &str, lock: &mut ScrollLock) -> Effects {
        if source.is_empty() {
            return Vec::new();
        }
        debug!(source, "opening video overlay");
        self.state = VideoState::Open {
            source: source.to_string(),
            playback: Playback::Pending,
        };

        let mut effects = vec![
            Effect::SetMediaSource(source.to_string()),
            Effect::SetActive {
                part: Part::VideoOverlay,
                active: true,
            },
            Effect::PlayMedia,
        ];
        if let Some(locked) = lock.acquire(LockHolder::Video) {
            effects.push(Effect::ScrollLock(locked));
        }
        effects
    }

    /// Close control clicked. No-op while closed.
    pub fn close(&mut self, lock: &mut ScrollLock) -> Effects {
        if !self.is_open() {
            return Vec::new();
        }
        debug!("closing video overlay");
        self.state = VideoState::Closed;

        let mut effects = vec![
            Effect::PauseMedia,
            Effect::SetMediaSource(String::new()),
            Effect::SetActive {
                part: Part::VideoOverlay,
                active: false,
            },
        ];
        if let Some(locked) = lock.release(LockHolder::Video) {
            effects.push(Effect::ScrollLock(locked));
        }
        effects
    }

    /// Click inside the overlay. Only a click on the backdrop itself closes;
    /// clicks on the player bubble up with a different target.
    pub fn overlay_clicked(&mut self, target_is_backdrop: bool, lock: &mut ScrollLock) -> Effects {
        if !target_is_backdrop {
            return Vec::new();
        }
        self.close(lock)
    }

    /// Key pressed anywhere on the page.
    pub fn key_pressed(&mut self, key: &str, lock: &mut ScrollLock) -> Effects {
        if key != CLOSE_KEY || !self.is_open() {
            return Vec::new();
        }
        self.close(lock)
    }

    /// Record the outcome of a play request for `source`.
    ///
    /// Outcomes for a source that is no longer showing are dropped. A
    /// rejection never closes the overlay.
    pub fn playback_settled(&mut self, source: &str, outcome: PlaybackOutcome) {
        if let VideoState::Open {
            source: current,
            playback,
        } = &mut self.state
        {
            if current.as_str() != source {
                return;
            }
            *playback = match outcome {
                PlaybackOutcome::Started => Playback::Playing,
                PlaybackOutcome::Rejected(reason) => {
                    debug!(source, reason = %reason, "autoplay refused, waiting for manual play");
                    Playback::Blocked
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> VideoController {
        VideoController::attach(VideoElements {
            overlay: true,
            media: true,
            close: true,
        })
        .into_option()
        .unwrap()
    }

    #[test]
    fn test_requires_overlay_and_media() {
        assert!(!VideoController::attach(VideoElements {
            overlay: true,
            ..Default::default()
        })
        .is_attached());
        assert!(!VideoController::attach(VideoElements {
            media: true,
            close: true,
            ..Default::default()
        })
        .is_attached());
    }

    #[test]
    fn test_slot_source_rules() {
        assert_eq!(VideoSlot::new(Some("a.mp4".into()), false).source(), Some("a.mp4"));
        assert_eq!(VideoSlot::new(Some(String::new()), false).source(), None);
        assert_eq!(VideoSlot::new(None, false).source(), None);
        assert!(!VideoSlot::new(Some("a.mp4".into()), true).is_wired());
    }

    #[test]
    fn test_open_then_close() {
        let mut video = player();
        let mut lock = ScrollLock::new();

        let effects = video.open("video1.mp4", &mut lock);
        assert_eq!(
            effects,
            vec![
                Effect::SetMediaSource("video1.mp4".into()),
                Effect::SetActive {
                    part: Part::VideoOverlay,
                    active: true
                },
                Effect::PlayMedia,
                Effect::ScrollLock(true),
            ]
        );
        assert_eq!(video.source(), "video1.mp4");

        let effects = video.close(&mut lock);
        assert_eq!(
            effects,
            vec![
                Effect::PauseMedia,
                Effect::SetMediaSource(String::new()),
                Effect::SetActive {
                    part: Part::VideoOverlay,
                    active: false
                },
                Effect::ScrollLock(false),
            ]
        );
        assert_eq!(video.source(), "");
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_empty_source_is_inert() {
        let mut video = player();
        let mut lock = ScrollLock::new();
        assert!(video.open("", &mut lock).is_empty());
        assert!(!video.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut video = player();
        let mut lock = ScrollLock::new();
        assert!(video.key_pressed("Escape", &mut lock).is_empty());

        video.open("clip.mp4", &mut lock);
        assert!(video.key_pressed("Enter", &mut lock).is_empty());
        assert!(video.is_open());
        assert!(!video.key_pressed("Escape", &mut lock).is_empty());
        assert!(!video.is_open());
    }

    #[test]
    fn test_click_on_player_does_not_close() {
        let mut video = player();
        let mut lock = ScrollLock::new();
        video.open("clip.mp4", &mut lock);
        assert!(video.overlay_clicked(false, &mut lock).is_empty());
        assert!(video.is_open());
        assert!(!video.overlay_clicked(true, &mut lock).is_empty());
        assert!(!video.is_open());
    }

    #[test]
    fn test_rejected_playback_keeps_overlay_open() {
        let mut video = player();
        let mut lock = ScrollLock::new();
        video.open("clip.mp4", &mut lock);
        video.playback_settled("clip.mp4", PlaybackOutcome::Rejected("NotAllowedError".into()));
        assert_eq!(
            video.state(),
            &VideoState::Open {
                source: "clip.mp4".into(),
                playback: Playback::Blocked
            }
        );
        assert!(lock.is_locked());
    }

    #[test]
    fn test_stale_outcome_dropped() {
        let mut video = player();
        let mut lock = ScrollLock::new();
        video.open("first.mp4", &mut lock);
        video.open("second.mp4", &mut lock);
        video.playback_settled("first.mp4", PlaybackOutcome::Started);
        assert_eq!(
            video.state(),
            &VideoState::Open {
                source: "second.mp4".into(),
                playback: Playback::Pending
            }
        );

        video.close(&mut lock);
        video.playback_settled("second.mp4", PlaybackOutcome::Started);
        assert_eq!(video.state(), &VideoState::Closed);
    }
}
