#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod core;
mod dom;
mod frame;
mod scene;
mod snowfall;
mod timer;

use config::PageConfig;
use constants::COUNTDOWN_TARGET_MS;

/// Listeners wired once per page load; they outlive any single mount.
#[derive(Clone)]
struct Wiring {
    music: audio::MusicToggle,
    resize_pending: Rc<Cell<bool>>,
}

/// Everything a mounted page keeps running. Shutting it down releases the
/// countdown interval and the animation-frame loop.
struct App {
    music: audio::MusicToggle,
    countdown: timer::CountdownTimer,
    frames: frame::FrameLoop,
}

impl App {
    fn shutdown(mut self) {
        self.countdown.stop();
        self.frames.stop();
        self.music.silence();
        log::info!("winter-greeting torn down");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn page_config(window: &web::Window) -> PageConfig {
    window
        .location()
        .search()
        .map(|s| PageConfig::from_query(&s))
        .unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let cfg = web::window().map(|w| page_config(&w)).unwrap_or_default();
    console_log::init_with_level(cfg.log_level).ok();
    log::info!("winter-greeting starting");

    let wiring = match wire_page() {
        Ok(w) => w,
        Err(e) => {
            log::error!("init error: {:?}", e);
            return Ok(());
        }
    };
    if let Err(e) = mount(&cfg, &wiring) {
        log::error!("init error: {:?}", e);
    }

    // Pages restored from the back/forward cache were torn down on pagehide
    dom::add_window_listener("pagehide", teardown);
    dom::add_window_listener("pageshow", move || {
        if APP.with(|a| a.borrow().is_none()) {
            if let Err(e) = mount(&cfg, &wiring) {
                log::error!("re-mount error: {:?}", e);
            }
        }
    });
    Ok(())
}

/// Stop timers and the frame loop. Also runs on `pagehide`.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.shutdown();
    }
}

fn wire_page() -> anyhow::Result<Wiring> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let music = audio::wire_music_toggle(&document);
    let resize_pending = Rc::new(Cell::new(false));
    let resize_flag = resize_pending.clone();
    dom::add_window_listener("resize", move || resize_flag.set(true));
    Ok(Wiring {
        music,
        resize_pending,
    })
}

fn mount(cfg: &PageConfig, wiring: &Wiring) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    teardown();

    let countdown = timer::CountdownTimer::start(&document, COUNTDOWN_TARGET_MS);

    let snow = if cfg.snowflake_count > 0 {
        match snowfall::SnowOverlay::new(&document, cfg.snowflake_count) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[snow] overlay disabled: {:?}", e);
                None
            }
        }
    } else {
        None
    };

    let mut rig = core::ParallaxRig::new();
    rig.settle_at(dom::scroll_y());
    let greeting = document.get_element_by_id(constants::ids::GREETING);
    let greeting_revealed = greeting.as_ref().map(scene::is_revealed).unwrap_or(true);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rig,
        layers: scene::parallax_layers(&document),
        snow,
        resize_pending: wiring.resize_pending.clone(),
        greeting,
        greeting_revealed,
        last_instant: Instant::now(),
    }));
    let frames = frame::start_loop(frame_ctx);

    scene::reveal_intro(&document);

    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            music: wiring.music.clone(),
            countdown,
            frames,
        })
    });
    Ok(())
}
