use std::f64::consts::TAU;

use orrery_engine::{Glow, VectorColor, VectorCommand};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::WebError;
use crate::images::ImageLoader;

const FONT_FAMILY: &str = "\"Consolas\", monospace";

/// Replays a `VectorState` command list onto a 2D canvas.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Bind to the `<canvas>` with the given element id.
    pub fn from_element_id(id: &str) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| WebError::CanvasNotFound(id.to_string()))?;
        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| WebError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(WebError::from_js)?
            .ok_or(WebError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoContext2d)?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the canvas backing store to the window's inner size.
    /// Returns the new size when it changed.
    pub fn fit_to_window(&self) -> Result<Option<(f32, f32)>, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let width = window.inner_width().map_err(WebError::from_js)?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height().map_err(WebError::from_js)?.as_f64().unwrap_or(0.0) as u32;
        if width == self.canvas.width() && height == self.canvas.height() {
            return Ok(None);
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(Some((width as f32, height as f32)))
    }

    /// Paint one frame.
    pub fn paint(&self, commands: &[VectorCommand], images: &ImageLoader) -> Result<(), WebError> {
        for command in commands {
            self.ctx.save();
            let result = self.paint_one(command, images);
            self.ctx.restore();
            result?;
        }
        Ok(())
    }

    fn paint_one(&self, command: &VectorCommand, images: &ImageLoader) -> Result<(), WebError> {
        let ctx = &self.ctx;
        match command {
            VectorCommand::Clear { color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
            }
            VectorCommand::FillRect { pos, size, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            VectorCommand::FillCircle { center, radius, color, glow } => {
                self.apply_glow(glow.as_ref());
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .map_err(WebError::from_js)?;
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill();
            }
            VectorCommand::StrokeCircle { center, radius, width, color } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .map_err(WebError::from_js)?;
                self.stroke(*width, *color);
            }
            VectorCommand::StrokeEllipse { center, radii, rotation, width, color } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    *rotation as f64,
                    0.0,
                    TAU,
                )
                .map_err(WebError::from_js)?;
                self.stroke(*width, *color);
            }
            VectorCommand::Texture { key, center, radius, alpha, rim, glow } => {
                let Some(image) = images.get(key) else {
                    log::debug!("texture {key} missing at paint time");
                    return Ok(());
                };
                let (x, y, r) = (center.x as f64, center.y as f64, *radius as f64);
                ctx.set_global_alpha(*alpha as f64);
                self.apply_glow(glow.as_ref());
                ctx.save();
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU).map_err(WebError::from_js)?;
                ctx.clip();
                let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &image,
                    x - r,
                    y - r,
                    r * 2.0,
                    r * 2.0,
                );
                ctx.restore();
                drawn.map_err(WebError::from_js)?;

                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU).map_err(WebError::from_js)?;
                self.stroke(1.0, *rim);
            }
            VectorCommand::Text { text, pos, size, bold, align, color } => {
                let weight = if *bold { "bold " } else { "" };
                ctx.set_font(&format!("{weight}{size}px {FONT_FAMILY}"));
                ctx.set_text_align(align.as_css());
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_text(text, pos.x as f64, pos.y as f64)
                    .map_err(WebError::from_js)?;
            }
        }
        Ok(())
    }

    fn stroke(&self, width: f32, color: VectorColor) {
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }

    fn apply_glow(&self, glow: Option<&Glow>) {
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur as f64);
            self.ctx.set_shadow_color(&glow.color.to_css());
        }
    }
}
