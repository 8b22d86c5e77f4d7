use crate::constants::ids;
use crate::core::{Playback, PlaybackError, ToggleAction};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn describe_js_error(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Background track controls: the `<audio>` element, its toggle button and
/// the shared play/pause state.
#[derive(Clone)]
pub struct MusicToggle {
    audio: Option<web::HtmlAudioElement>,
    button: Option<web::Element>,
    pub state: Rc<RefCell<Playback>>,
}

impl MusicToggle {
    pub fn new(document: &web::Document) -> Self {
        let audio = document
            .get_element_by_id(ids::MUSIC)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        if audio.is_none() {
            log::warn!("[audio] no #{} element; music toggle disabled", ids::MUSIC);
        }
        let toggle = Self {
            audio,
            button: document.get_element_by_id(ids::MUSIC_TOGGLE),
            state: Rc::new(RefCell::new(Playback::new())),
        };
        toggle.render();
        toggle
    }

    fn render(&self) {
        let Some(button) = &self.button else {
            return;
        };
        let playback = *self.state.borrow();
        _ = button.set_attribute("title", playback.button_title());
        _ = button.set_attribute("aria-label", playback.button_title());
        _ = button.set_attribute(
            "aria-pressed",
            if playback.is_playing() { "true" } else { "false" },
        );
        _ = button.set_attribute(
            "data-playing",
            if playback.is_playing() { "1" } else { "0" },
        );
    }

    pub fn toggle(&self) {
        let Some(audio) = &self.audio else {
            return;
        };
        let action = self.state.borrow_mut().toggle();
        match action {
            ToggleAction::Pause => {
                if let Err(e) = audio.pause() {
                    log::warn!("[audio] pause failed: {}", describe_js_error(&e));
                }
                log::debug!("[audio] paused");
                self.render();
            }
            ToggleAction::Play => {
                let promise = match audio.play() {
                    Ok(p) => p,
                    Err(e) => {
                        self.state
                            .borrow_mut()
                            .settle_play(Err(PlaybackError::Unavailable(describe_js_error(&e))));
                        self.render();
                        return;
                    }
                };
                let this = self.clone();
                spawn_local(async move {
                    let result = JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(|e| PlaybackError::Rejected(describe_js_error(&e)));
                    let ok = result.is_ok();
                    this.state.borrow_mut().settle_play(result);
                    if ok {
                        log::debug!("[audio] playing");
                    }
                    this.render();
                });
            }
        }
    }

    /// Pause the track if it is playing (used on teardown).
    pub fn silence(&self) {
        if self.state.borrow().is_playing() {
            self.toggle();
        }
    }
}

pub fn wire_music_toggle(document: &web::Document) -> MusicToggle {
    let toggle = MusicToggle::new(document);
    let on_click = toggle.clone();
    if !dom::add_click_listener(document, ids::MUSIC_TOGGLE, move || on_click.toggle()) {
        log::warn!("[audio] no #{} button", ids::MUSIC_TOGGLE);
    }
    toggle
}
