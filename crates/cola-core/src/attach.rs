//! Controller attachment results.
//!
//! Every controller discovers its elements once at startup. When required
//! elements are missing it does not fail; it reports itself as not
//! applicable so the absence of a feature stays observable.

use std::fmt;

/// The page features that can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Navigation,
    Theme,
    Reveal,
    Video,
    Portal,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Navigation,
        Feature::Theme,
        Feature::Reveal,
        Feature::Video,
        Feature::Portal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Navigation => "navigation",
            Feature::Theme => "theme",
            Feature::Reveal => "reveal",
            Feature::Video => "video",
            Feature::Portal => "portal",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of attaching a controller to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment<T> {
    /// Required elements were found; the controller is live.
    Attached(T),
    /// A required element is absent; the feature is inert on this page.
    NotApplicable {
        /// What was missing
        missing: &'static str,
    },
}

impl<T> Attachment<T> {
    pub fn not_applicable(missing: &'static str) -> Self {
        Attachment::NotApplicable { missing }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, Attachment::Attached(_))
    }

    pub fn as_ref(&self) -> Attachment<&T> {
        match self {
            Attachment::Attached(value) => Attachment::Attached(value),
            Attachment::NotApplicable { missing } => Attachment::NotApplicable { missing },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attachment<U> {
        match self {
            Attachment::Attached(value) => Attachment::Attached(f(value)),
            Attachment::NotApplicable { missing } => Attachment::NotApplicable { missing },
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Attachment::Attached(value) => Some(value),
            Attachment::NotApplicable { .. } => None,
        }
    }

    /// Status without the payload, for reporting.
    pub fn status(&self) -> AttachStatus {
        match self {
            Attachment::Attached(_) => AttachStatus::Attached,
            Attachment::NotApplicable { missing } => AttachStatus::NotApplicable(missing),
        }
    }
}

/// Payload-free attachment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachStatus {
    Attached,
    NotApplicable(&'static str),
}

impl fmt::Display for AttachStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachStatus::Attached => write!(f, "attached"),
            AttachStatus::NotApplicable(missing) => write!(f, "not applicable (no {})", missing),
        }
    }
}

/// Attach status of every feature on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachReport {
    entries: Vec<(Feature, AttachStatus)>,
}

impl AttachReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a feature's status, replacing any earlier entry.
    pub fn record(&mut self, feature: Feature, status: AttachStatus) {
        self.entries.retain(|(f, _)| *f != feature);
        self.entries.push((feature, status));
        self.entries.sort_by_key(|(f, _)| *f);
    }

    pub fn status(&self, feature: Feature) -> Option<AttachStatus> {
        self.entries
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, status)| *status)
    }

    pub fn is_attached(&self, feature: Feature) -> bool {
        self.status(feature) == Some(AttachStatus::Attached)
    }

    pub fn attached(&self) -> impl Iterator<Item = Feature> + '_ {
        self.entries
            .iter()
            .filter(|(_, status)| *status == AttachStatus::Attached)
            .map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Feature, AttachStatus)> {
        self.entries.iter()
    }
}

impl fmt::Display for AttachReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(feature, status)| format!("{}: {}", feature, status))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
