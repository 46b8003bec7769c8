//! Property-based tests for the interaction coordinator
//!
//! Uses proptest to drive random event sequences and check the invariants
//! that must hold after every step.

use std::collections::HashSet;

use cola_core::nav::NavElements;
use cola_core::video::VideoElements;
use cola_core::{
    Coordinator, Effect, Intersection, MemoryStore, PageInventory, Part, RevealTracker,
    SiteConfig, Theme, ThemeSettings, UiEvent,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn source_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => prop::string::string_regex("[a-z0-9]{1,12}\\.mp4")
            .expect("valid regex")
            .prop_map(Some),
        1 => Just(Some(String::new())),
        1 => Just(None),
    ]
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("Escape".to_string()),
        1 => Just("Enter".to_string()),
        1 => Just("a".to_string()),
    ]
}

/// Events a visitor can trigger on a furnished page
fn event_strategy() -> impl Strategy<Value = UiEvent> {
    prop_oneof![
        4 => Just(UiEvent::MenuToggleClicked),
        1 => Just(UiEvent::MenuOverlayClicked),
        1 => Just(UiEvent::MenuLinkClicked),
        3 => source_strategy().prop_map(|source| UiEvent::SlotClicked { source }),
        1 => Just(UiEvent::VideoCloseClicked),
        1 => any::<bool>().prop_map(|on_backdrop| UiEvent::VideoOverlayClicked { on_backdrop }),
        2 => key_strategy().prop_map(|key| UiEvent::KeyDown { key }),
    ]
}

fn inventory_strategy() -> impl Strategy<Value = PageInventory> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(overlay, video, close)| {
        PageInventory {
            nav: NavElements {
                toggle: true,
                panel: true,
                overlay,
                logo: false,
            },
            video: VideoElements {
                overlay: video,
                media: video,
                close,
            },
            wired_portals: 0,
        }
    })
}

/// Marker state as a page would show it after applying effects
#[derive(Debug, Default)]
struct Markers {
    toggle: bool,
    panel: bool,
    overlay: bool,
    video: bool,
    scroll_locked: bool,
    media_source: String,
}

impl Markers {
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::SetActive { part, active } => match part {
                    Part::MenuToggle => self.toggle = *active,
                    Part::MenuPanel => self.panel = *active,
                    Part::MenuOverlay => self.overlay = *active,
                    Part::VideoOverlay => self.video = *active,
                },
                Effect::ScrollLock(locked) => self.scroll_locked = *locked,
                Effect::SetMediaSource(src) => self.media_source = src.clone(),
                _ => {}
            }
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Toggle, panel and overlay markers never disagree
    #[test]
    fn menu_mirrors_stay_equal(toggles in 0usize..40) {
        let inventory = PageInventory {
            nav: NavElements { toggle: true, panel: true, overlay: true, logo: false },
            ..PageInventory::default()
        };
        let mut page = Coordinator::attach(&inventory, &SiteConfig::default());
        let mut markers = Markers::default();

        for _ in 0..toggles {
            markers.apply(&page.dispatch(UiEvent::MenuToggleClicked));
            prop_assert_eq!(markers.toggle, markers.panel);
            prop_assert_eq!(markers.panel, markers.overlay);
            prop_assert_eq!(markers.panel, page.menu_open());
        }
        prop_assert_eq!(page.menu_open(), toggles % 2 == 1);
    }

    /// Scroll is locked exactly while the menu or the video is open
    #[test]
    fn scroll_lock_tracks_open_features(
        inventory in inventory_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut page = Coordinator::attach(&inventory, &SiteConfig::default());
        let mut markers = Markers::default();

        for event in events {
            markers.apply(&page.dispatch(event));
            let expected = page.menu_open() || page.video_open();
            prop_assert_eq!(page.scroll_lock().is_locked(), expected);
            prop_assert_eq!(markers.scroll_locked, expected);
        }
    }

    /// The media source is non-empty exactly while the overlay is active
    #[test]
    fn video_source_iff_open(events in prop::collection::vec(event_strategy(), 0..60)) {
        let inventory = PageInventory {
            nav: NavElements { toggle: true, panel: true, overlay: true, logo: false },
            video: VideoElements { overlay: true, media: true, close: true },
            wired_portals: 0,
        };
        let mut page = Coordinator::attach(&inventory, &SiteConfig::default());
        let mut markers = Markers::default();

        for event in events {
            markers.apply(&page.dispatch(event));
            prop_assert_eq!(markers.video, page.video_open());
            prop_assert_eq!(!markers.media_source.is_empty(), page.video_open());
        }
    }

    /// Two toggles restore the starting theme
    #[test]
    fn theme_double_toggle_is_identity(dark in any::<bool>()) {
        let stored = if dark { "dark" } else { "light" };
        let mut settings = ThemeSettings::load(MemoryStore::with_value("cola-theme", stored), "cola-theme");
        let start = settings.get();
        settings.toggle().unwrap();
        settings.toggle().unwrap();
        prop_assert_eq!(settings.get(), start);
        prop_assert_eq!(settings.store().get("cola-theme"), Some(start.as_str()));
    }

    /// Unknown stored values always mean light
    #[test]
    fn unknown_stored_theme_is_light(value in "[a-zA-Z]{0,10}") {
        prop_assume!(value != "dark");
        prop_assert_eq!(Theme::from_stored(Some(value.as_str())), Theme::Light);
    }

    /// Each element is revealed at most once across any report sequence
    #[test]
    fn reveal_at_most_once(
        count in 1usize..20,
        batches in prop::collection::vec(
            prop::collection::vec((0usize..25, any::<bool>()), 0..10),
            0..20,
        ),
    ) {
        let mut tracker = RevealTracker::attach(0..count).into_option().unwrap();
        let mut revealed = HashSet::new();

        for batch in batches {
            let entries = batch.into_iter().map(|(target, hit)| Intersection::new(target, hit));
            for target in tracker.on_intersections(entries) {
                prop_assert!(target < count);
                prop_assert!(revealed.insert(target), "revealed twice: {}", target);
            }
        }
        prop_assert_eq!(tracker.pending_count(), count - revealed.len());
    }
}
