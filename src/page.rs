//! DOM discovery.
//!
//! All elements the controllers work with are looked up once, after the
//! document has loaded. Missing elements are simply absent here; the
//! controllers decide what that means.

use cola_core::nav::NavElements;
use cola_core::video::{VideoElements, VideoSlot};
use cola_core::{PageInventory, Part, PortalTrigger, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlMediaElement, NodeList};

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "cola-config";

/// Data attribute carrying a slot's video source.
pub const VIDEO_SOURCE_ATTR: &str = "data-video";

/// Data attribute carrying a portal's destination.
pub const PORTAL_HREF_ATTR: &str = "data-href";

/// Handles to every element the page interactions use.
#[derive(Debug, Clone)]
pub struct Page {
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,

    pub menu_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub menu_overlay: Option<Element>,
    pub nav_logo: Option<Element>,

    pub theme_toggle: Option<Element>,

    pub reveal_targets: Vec<Element>,

    pub video_overlay: Option<Element>,
    pub video_media: Option<HtmlMediaElement>,
    pub video_close: Option<Element>,
    /// Slots not marked empty, with their parsed source
    pub video_slots: Vec<(Element, VideoSlot)>,

    /// Portals not marked disabled
    pub portals: Vec<(Element, PortalTrigger)>,
}

impl Page {
    pub fn discover(document: &Document, config: &SiteConfig) -> Self {
        let selectors = &config.selectors;
        let markers = &config.markers;

        let nav_menu = query(document, &selectors.nav_menu);
        let nav_links = nav_menu
            .as_ref()
            .and_then(|menu| menu.query_selector_all(&selectors.nav_links).ok())
            .map(elements)
            .unwrap_or_default();

        let video_slots = query_all(document, &selectors.video_slots)
            .into_iter()
            .map(|el| {
                let slot = VideoSlot::new(
                    el.get_attribute(VIDEO_SOURCE_ATTR),
                    el.class_list().contains(&markers.empty),
                );
                (el, slot)
            })
            .filter(|(_, slot)| slot.is_wired())
            .collect();

        let portals = query_all(document, &selectors.portals)
            .into_iter()
            .map(|el| {
                let trigger = PortalTrigger::new(
                    el.get_attribute(PORTAL_HREF_ATTR),
                    el.class_list().contains(&markers.disabled),
                );
                (el, trigger)
            })
            .filter(|(_, trigger)| trigger.is_wired())
            .collect();

        Self {
            root: document.document_element(),
            body: document.body(),
            menu_toggle: query(document, &selectors.menu_toggle),
            nav_menu,
            nav_links,
            menu_overlay: query(document, &selectors.menu_overlay),
            nav_logo: query(document, &selectors.nav_logo),
            theme_toggle: query(document, &selectors.theme_toggle),
            reveal_targets: query_all(document, &selectors.reveal),
            video_overlay: query(document, &selectors.video_overlay),
            video_media: query(document, &selectors.video_media)
                .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok()),
            video_close: query(document, &selectors.video_close),
            video_slots,
            portals,
        }
    }

    /// What was found, in the form the coordinator attaches from.
    pub fn inventory(&self) -> PageInventory {
        PageInventory {
            nav: NavElements {
                toggle: self.menu_toggle.is_some(),
                panel: self.nav_menu.is_some(),
                overlay: self.menu_overlay.is_some(),
                logo: self.nav_logo.is_some(),
            },
            video: VideoElements {
                overlay: self.video_overlay.is_some(),
                media: self.video_media.is_some(),
                close: self.video_close.is_some(),
            },
            wired_portals: self.portals.len(),
        }
    }

    /// Element carrying the active marker for `part`.
    pub fn part(&self, part: Part) -> Option<&Element> {
        match part {
            Part::MenuToggle => self.menu_toggle.as_ref(),
            Part::MenuPanel => self.nav_menu.as_ref(),
            Part::MenuOverlay => self.menu_overlay.as_ref(),
            Part::VideoOverlay => self.video_overlay.as_ref(),
        }
    }
}

/// Load the optional configuration block.
///
/// Returns the defaults and the parse error, if any, so the caller can log
/// it once logging is up.
pub fn load_config(document: &Document) -> (SiteConfig, Option<cola_core::ColaError>) {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match json {
        Some(json) => match SiteConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (SiteConfig::default(), Some(e)),
        },
        None => (SiteConfig::default(), None),
    }
}

/// First element matching `selector`. Invalid selectors match nothing.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`. Invalid selectors match nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
