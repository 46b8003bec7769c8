//! Portal links: fade the page out, then navigate.

use crate::config::PortalConfig;
use crate::effect::{Effect, Effects};

/// A portal element discovered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalTrigger {
    href: Option<String>,
    disabled: bool,
}

impl PortalTrigger {
    pub fn new(href: Option<String>, disabled: bool) -> Self {
        Self { href, disabled }
    }

    /// Disabled portals are never wired to a click handler.
    pub fn is_wired(&self) -> bool {
        !self.disabled
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|h| !h.is_empty())
    }

    /// Effects of a click: the fade followed by the delayed navigation.
    /// Empty for disabled portals and portals without a destination.
    pub fn clicked(&self, config: &PortalConfig) -> Effects {
        if self.disabled {
            return Vec::new();
        }
        match self.href() {
            Some(href) => vec![
                Effect::FadeOutBody {
                    transition: config.transition(),
                },
                Effect::NavigateAfter {
                    href: href.to_string(),
                    delay: config.delay(),
                },
            ],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_click_fades_then_navigates() {
        let portal = PortalTrigger::new(Some("chronicle-1.html".into()), false);
        assert_eq!(
            portal.clicked(&PortalConfig::default()),
            vec![
                Effect::FadeOutBody {
                    transition: "opacity 0.3s ease".into()
                },
                Effect::NavigateAfter {
                    href: "chronicle-1.html".into(),
                    delay: Duration::from_millis(300)
                },
            ]
        );
    }

    #[test]
    fn test_disabled_portal_is_inert() {
        let portal = PortalTrigger::new(Some("chronicle-2.html".into()), true);
        assert!(!portal.is_wired());
        assert!(portal.clicked(&PortalConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_destination_is_inert() {
        assert!(PortalTrigger::new(None, false)
            .clicked(&PortalConfig::default())
            .is_empty());
        assert!(PortalTrigger::new(Some(String::new()), false)
            .clicked(&PortalConfig::default())
            .is_empty());
    }
}
