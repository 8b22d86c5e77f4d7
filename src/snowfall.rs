use crate::constants::{ids, SNOWFLAKE_COLOR, SNOW_SEED};
use crate::core::{SnowParams, Snowfield};
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Snowfall overlay drawn on a fixed full-viewport canvas.
pub struct SnowOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Snowfield,
    dpr: f64,
}

impl SnowOverlay {
    pub fn new(document: &web::Document, count: usize) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::require_element(document, ids::SNOW_CANVAS)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let dpr = dom::sync_canvas_backing_size(&canvas);
        let (w, h) = dom::viewport_size();
        let params = SnowParams {
            count,
            ..SnowParams::default()
        };
        log::info!("[snow] flakes={} viewport={}x{}", count, w, h);
        Ok(Self {
            canvas,
            ctx,
            field: Snowfield::new(params, w, h, SNOW_SEED),
            dpr,
        })
    }

    pub fn resize(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = dom::viewport_size();
        self.field.resize(w, h);
    }

    pub fn frame(&mut self, dt_sec: f32) {
        self.field.step(dt_sec);

        let ctx = &self.ctx;
        _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        let (w, h) = self.field.size();
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        ctx.set_fill_style_str(SNOWFLAKE_COLOR);
        ctx.begin_path();
        for f in &self.field.flakes {
            let (x, y, r) = (f.pos.x as f64, f.pos.y as f64, f.radius as f64);
            ctx.move_to(x + r, y);
            _ = ctx.arc(x, y, r, 0.0, TAU);
        }
        ctx.fill();
    }
}
