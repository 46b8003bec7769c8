//! Light/dark theme settings.
//!
//! `ThemeSettings` is the single owner of the theme. The document attribute
//! and the toggle button label are subscribers; nothing else writes them.
//!
//! ## Lifecycle
//!
//! ```text
//! load(store)      read durable key, default Light, never writes
//! subscribe(f)     f(current) immediately, then on every change
//! toggle()         flip, notify subscribers, persist
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::attach::Attachment;
use crate::error::ColaResult;

/// Display mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Anything other than `dark` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label for this theme. It names the mode a click switches to.
    pub fn label(&self) -> ThemeLabel {
        match self {
            Theme::Dark => ThemeLabel {
                glyph: '☀',
                text: "Light",
            },
            Theme::Light => ThemeLabel {
                glyph: '☾',
                text: "Dark",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph and text shown on the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeLabel {
    pub glyph: char,
    pub text: &'static str,
}

impl fmt::Display for ThemeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.text)
    }
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> ColaResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> ColaResult<()>;
}

/// In-memory store, used off the browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> ColaResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> ColaResult<()> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Handle returned by [`ThemeSettings::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Theme)>;

/// Process-wide theme state with durable persistence.
pub struct ThemeSettings<S> {
    store: S,
    key: String,
    current: Theme,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<S: KeyValueStore> ThemeSettings<S> {
    /// Load the theme from `store`. A read failure falls back to light.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.load(&key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                warn!(key = %key, error = %e, "theme storage unreadable, using light");
                Theme::Light
            }
        };
        debug!(theme = %current, "theme loaded");

        Self {
            store,
            key,
            current,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Attach to the page. Without a toggle control the theme is left
    /// entirely alone: nothing is loaded or applied.
    pub fn attach(toggle_present: bool, store: S, key: impl Into<String>) -> Attachment<Self> {
        if !toggle_present {
            return Attachment::not_applicable("theme toggle");
        }
        Attachment::Attached(Self::load(store, key))
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the theme, notify subscribers and persist it.
    ///
    /// Subscribers are notified before the write, so the page reflects the
    /// new theme even when persistence fails; the failure is returned.
    pub fn set(&mut self, theme: Theme) -> ColaResult<()> {
        self.current = theme;
        debug!(theme = %theme, "theme changed");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(theme);
        }
        self.store.save(&self.key, theme.as_str())
    }

    /// Flip the theme. Returns the new theme.
    pub fn toggle(&mut self) -> ColaResult<Theme> {
        let next = self.current.flipped();
        self.set(next)?;
        Ok(next)
    }

    /// Register a subscriber. It is invoked with the current theme right
    /// away and again on every change.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        subscriber(self.current);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}

impl<S: fmt::Debug> fmt::Debug for ThemeSettings<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSettings")
            .field("store", &self.store)
            .field("key", &self.key)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
