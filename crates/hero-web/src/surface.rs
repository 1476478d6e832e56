use anyhow::anyhow;
use glam::Vec2;
use hero_core::{Icon, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// [`Surface`] backed by the hero canvas's 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    icons: Vec<web::HtmlImageElement>,
}

impl CanvasSurface {
    /// `icons` must be ordered like [`Icon::ALL`]; see [`load_icons`].
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        icons: Vec<web::HtmlImageElement>,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            icons,
        })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        // the canvas ignores alpha > 1 and keeps the previous value, which
        // after save() is fully opaque; clamping gives the same picture
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f64) {
        let _ = self.ctx.rotate(radians);
    }

    fn draw_icon(&mut self, icon: Icon, origin: Vec2, extent: Vec2) {
        if let Some(img) = self.icons.get(icon.index()) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                origin.x as f64,
                origin.y as f64,
                extent.x as f64,
                extent.y as f64,
            );
        }
    }
}

/// Create one image per [`Icon`] and wait for each to decode. A failed decode
/// is logged and the image kept; the canvas simply draws nothing for it.
pub async fn load_icons() -> anyhow::Result<Vec<web::HtmlImageElement>> {
    let mut images = Vec::with_capacity(Icon::ALL.len());
    for icon in Icon::ALL {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
        img.set_src(icon.data_uri());
        if let Err(e) = JsFuture::from(img.decode()).await {
            log::warn!("[icons] {:?} failed to decode: {:?}", icon, e);
        }
        images.push(img);
    }
    Ok(images)
}
