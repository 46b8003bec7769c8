//! Site configuration.
//!
//! Every field has a default matching the stock CoLA markup, so an empty JSON
//! object (or no configuration at all) yields a working setup. Pages can
//! override individual values without repeating the rest.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ColaResult;

/// Durable storage key for the theme flag.
pub const THEME_STORAGE_KEY: &str = "cola-theme";

/// Document root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Relative path of the site's home document.
pub const HOME_PATH: &str = "index.html";

/// CSS selectors the controllers discover their elements with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle: String,
    pub nav_menu: String,
    /// Evaluated inside the menu panel.
    pub nav_links: String,
    pub menu_overlay: String,
    pub nav_logo: String,
    pub theme_toggle: String,
    pub reveal: String,
    pub video_overlay: String,
    pub video_media: String,
    pub video_close: String,
    pub video_slots: String,
    pub portals: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".menu-toggle".into(),
            nav_menu: ".nav-menu".into(),
            nav_links: "a".into(),
            menu_overlay: ".overlay".into(),
            nav_logo: ".nav-logo".into(),
            theme_toggle: ".theme-toggle".into(),
            reveal: ".fade-in, .timeline-entry".into(),
            video_overlay: ".video-player-overlay".into(),
            video_media: ".video-player-overlay video".into(),
            video_close: ".video-close".into(),
            video_slots: ".video-slot".into(),
            portals: ".egg-portal".into(),
        }
    }
}

/// Class names toggled on elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub active: String,
    pub visible: String,
    /// Slots carrying this class have no video and are never wired.
    pub empty: String,
    /// Portals carrying this class are never wired.
    pub disabled: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            active: "active".into(),
            visible: "visible".into(),
            empty: "empty".into(),
            disabled: "disabled".into(),
        }
    }
}

/// Viewport-intersection settings for the reveal watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// How far above the true viewport bottom an element must cross.
    pub bottom_margin_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

impl RevealConfig {
    /// Root margin string in the `IntersectionObserver` format.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Portal fade-out settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub fade_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { fade_ms: 300 }
    }
}

impl PortalConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.fade_ms))
    }

    /// CSS `transition` value applied to the body before fading.
    pub fn transition(&self) -> String {
        let secs = f64::from(self.fade_ms) / 1000.0;
        format!("opacity {}s ease", secs)
    }
}

/// Complete configuration for the page interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub markers: Markers,
    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub home_path: String,
    pub reveal: RevealConfig,
    pub portal: PortalConfig,
    /// Minimum level written to the console (`trace` .. `error`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            markers: Markers::default(),
            theme_storage_key: THEME_STORAGE_KEY.into(),
            theme_attribute: THEME_ATTRIBUTE.into(),
            home_path: HOME_PATH.into(),
            reveal: RevealConfig::default(),
            portal: PortalConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ColaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
