use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Error, Result};
use crate::math::Vec2;
use super::canvas::Canvas;
use super::color::Color;

/// Double-buffered wrapper around a browser 2D canvas.
///
/// Everything is drawn into an off-screen back buffer; `present` copies it
/// onto the visible canvas in one go so a half-drawn frame is never shown.
pub struct WebCanvas {
    visible: HtmlCanvasElement,
    front: CanvasRenderingContext2d,
    back_buffer: HtmlCanvasElement,
    back: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl WebCanvas {
    pub fn new(visible: HtmlCanvasElement, width: u32, height: u32) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::Dom("no document available".to_string()))?;

        let back_buffer = document
            .create_element("canvas")
            .map_err(|e| Error::dom("creating back buffer", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::Dom("back buffer is not a canvas".to_string()))?;

        let front = context_2d(&visible)?;
        let back = context_2d(&back_buffer)?;

        let mut canvas = Self {
            visible,
            front,
            back_buffer,
            back,
            width,
            height,
        };
        canvas.resize(width, height);
        Ok(canvas)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.visible.set_width(width);
        self.visible.set_height(height);
        self.back_buffer.set_width(width);
        self.back_buffer.set_height(height);
        // Resizing resets context state
        self.back.set_line_cap("round");
        self.back.set_text_baseline("top");
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| Error::dom("getting 2d context", e))?
        .ok_or_else(|| Error::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::Dom("context is not a CanvasRenderingContext2d".to_string()))
}

impl Canvas for WebCanvas {
    fn clear(&mut self, color: Color) {
        self.back.set_fill_style_str(&color.to_css());
        self.back
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn set_color(&mut self, color: Color) {
        let css = color.to_css();
        self.back.set_fill_style_str(&css);
        self.back.set_stroke_style_str(&css);
    }

    fn set_line_width(&mut self, width: f32) {
        self.back.set_line_width(width as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        let ctx = &self.back;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, rotation: f32) {
        // The canvas API throws on negative radii
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let ctx = &self.back;
        ctx.begin_path();
        if let Err(e) = ctx.ellipse(
            center.x as f64,
            center.y as f64,
            rx as f64,
            ry as f64,
            rotation as f64,
            0.0,
            TAU,
        ) {
            warn!("ellipse failed: {:?}", e);
            return;
        }
        ctx.fill();
    }

    fn fill_rect(&mut self, top_left: Vec2, bottom_right: Vec2) {
        let size = bottom_right - top_left;
        self.back.fill_rect(
            top_left.x as f64,
            top_left.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn text(&mut self, position: Vec2, text: &str, font_px: f32) {
        self.back.set_font(&format!("{}px monospace", font_px));
        if let Err(e) = self.back.fill_text(text, position.x as f64, position.y as f64) {
            warn!("fill_text failed: {:?}", e);
        }
    }

    fn present(&mut self) {
        if let Err(e) = self
            .front
            .draw_image_with_html_canvas_element(&self.back_buffer, 0.0, 0.0)
        {
            warn!("present failed: {:?}", e);
        }
    }
}
