//! Applies coordinator effects to the DOM.

use cola_core::{Effect, PlaybackOutcome, UiEvent};
use gloo::timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen_futures::JsFuture;

use crate::app::App;
use crate::js_error_message;

/// Apply effects in order.
pub fn apply(app: &App, effects: &[Effect]) {
    let page = app.page();
    let active = app.config().markers.active.as_str();
    // Source most recently assigned by this batch, reported with the play outcome
    let mut last_source = String::new();

    for effect in effects {
        match effect {
            Effect::SetActive { part, active: on } => {
                if let Some(el) = page.part(*part) {
                    let classes = el.class_list();
                    let _ = if *on {
                        classes.add_1(active)
                    } else {
                        classes.remove_1(active)
                    };
                }
            }
            Effect::ScrollLock(locked) => {
                if let Some(body) = &page.body {
                    let style = body.style();
                    let result = if *locked {
                        style.set_property("overflow", "hidden")
                    } else {
                        style.remove_property("overflow").map(|_| ())
                    };
                    if let Err(e) = result {
                        warn!(error = %js_error_message(&e), "could not update scroll lock");
                    }
                }
            }
            Effect::SetMediaSource(src) => {
                if let Some(media) = &page.video_media {
                    media.set_src(src);
                }
                last_source = src.clone();
            }
            Effect::PlayMedia => {
                if let Some(media) = &page.video_media {
                    start_playback(app, media, last_source.clone());
                }
            }
            Effect::PauseMedia => {
                if let Some(media) = &page.video_media {
                    let _ = media.pause();
                }
            }
            Effect::Navigate(href) => navigate(href),
            Effect::FadeOutBody { transition } => {
                if let Some(body) = &page.body {
                    let style = body.style();
                    let _ = style.set_property("transition", transition);
                    let _ = style.set_property("opacity", "0");
                }
            }
            Effect::NavigateAfter { href, delay } => {
                let href = href.clone();
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                Timeout::new(millis, move || navigate(&href)).forget();
            }
        }
    }
}

/// Request playback and report the outcome back to the coordinator.
///
/// A rejected play request (autoplay policy) is an expected outcome: the
/// overlay stays open and the visitor can press play.
fn start_playback(app: &App, media: &web_sys::HtmlMediaElement, source: String) {
    let promise = match media.play() {
        Ok(promise) => promise,
        Err(e) => {
            app.dispatch(UiEvent::PlaybackSettled {
                source,
                outcome: PlaybackOutcome::Rejected(js_error_message(&e)),
            });
            return;
        }
    };

    let app = app.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match JsFuture::from(promise).await {
            Ok(_) => PlaybackOutcome::Started,
            Err(e) => PlaybackOutcome::Rejected(js_error_message(&e)),
        };
        app.dispatch(UiEvent::PlaybackSettled { source, outcome });
    });
}

fn navigate(href: &str) {
    debug!(href, "navigating");
    if let Err(e) = gloo::utils::window().location().set_href(href) {
        warn!(href, error = %js_error_message(&e), "navigation failed");
    }
}
