use std::sync::Arc;

use kurbo::{Affine, Rect};
use serde::{Deserialize, Serialize};

use crate::assets::{LoadedFont, PreparedImage, TextBrushRgba8, TextLayoutEngine};
use crate::customize::{CustomizationState, UploadedImage};
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ShopError, ShopResult};
use crate::render::frame::PreviewFrame;

/// How an uploaded image is mapped into the inset region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Fill the whole inset, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Largest aspect-preserving size that fits, centered.
    Contain,
}

/// Fixed preview geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOpts {
    pub canvas: Canvas,
    /// Margin between the canvas edge and the image region, on every side.
    pub inset_px: u32,
    pub font_size_px: f32,
    /// Pen position of the first glyph: `[x, baseline_y]`.
    pub text_origin: [f32; 2],
    pub image_fit: ImageFit,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 300,
                height: 300,
            },
            inset_px: 50,
            font_size_px: 20.0,
            text_origin: [20.0, 280.0],
            image_fit: ImageFit::Stretch,
        }
    }
}

impl PreviewOpts {
    pub fn validate(&self) -> ShopResult<()> {
        self.canvas.validate()?;
        let inset = u64::from(self.inset_px) * 2;
        if inset >= u64::from(self.canvas.width) || inset >= u64::from(self.canvas.height) {
            return Err(ShopError::validation(
                "preview inset leaves no room for the image",
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ShopError::validation(
                "preview font_size_px must be finite and > 0",
            ));
        }
        if !self.text_origin.iter().all(|v| v.is_finite()) {
            return Err(ShopError::validation("preview text_origin must be finite"));
        }
        Ok(())
    }

    /// Region the uploaded image is drawn into.
    pub fn inset_rect(&self) -> Rect {
        let m = f64::from(self.inset_px);
        Rect::new(
            m,
            m,
            f64::from(self.canvas.width) - m,
            f64::from(self.canvas.height) - m,
        )
    }
}

/// Map an `image_w`×`image_h` image into `inset`.
pub fn fit_transform(image_w: u32, image_h: u32, inset: Rect, fit: ImageFit) -> Affine {
    let w = f64::from(image_w.max(1));
    let h = f64::from(image_h.max(1));
    let sx = inset.width() / w;
    let sy = inset.height() / h;
    match fit {
        ImageFit::Stretch => {
            Affine::translate((inset.x0, inset.y0)) * Affine::scale_non_uniform(sx, sy)
        }
        ImageFit::Contain => {
            let s = sx.min(sy);
            let dx = inset.x0 + (inset.width() - w * s) / 2.0;
            let dy = inset.y0 + (inset.height() - h * s) / 2.0;
            Affine::translate((dx, dy)) * Affine::scale(s)
        }
    }
}

struct OverlayText {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

/// Renders a [`CustomizationState`] into a [`PreviewFrame`].
///
/// Layers, bottom to top: product color fill, uploaded image in the inset, overlay text on a
/// fixed baseline. Text is neither wrapped nor clipped to the canvas; anything past the edge is
/// simply not rasterized.
pub struct PreviewRenderer {
    opts: PreviewOpts,
    ctx: Option<vello_cpu::RenderContext>,
    text: Option<OverlayText>,
    image_cache: Option<(u64, vello_cpu::Image)>,
}

impl PreviewRenderer {
    /// Without a font the renderer still works; overlay text is skipped.
    pub fn new(opts: PreviewOpts, font: Option<&LoadedFont>) -> ShopResult<Self> {
        opts.validate()?;
        let text = match font {
            None => None,
            Some(font) => match TextLayoutEngine::new(font) {
                Ok(engine) => Some(OverlayText {
                    engine,
                    font: vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(font.bytes.to_vec()),
                        font.index,
                    ),
                }),
                Err(e) => {
                    tracing::warn!(font = font.label(), error = %e, "font rejected; text disabled");
                    None
                }
            },
        };
        Ok(Self {
            opts,
            ctx: None,
            text,
            image_cache: None,
        })
    }

    pub fn opts(&self) -> &PreviewOpts {
        &self.opts
    }

    pub fn has_font(&self) -> bool {
        self.text.is_some()
    }

    /// Laid-out advance width of `text` at the preview font size, if a font is loaded.
    pub fn text_width(&mut self, text: &str) -> Option<f32> {
        let size = self.opts.font_size_px;
        let t = self.text.as_mut()?;
        let layout = t
            .engine
            .layout_line(text, size, TextBrushRgba8::default())
            .ok()?;
        Some(layout.width())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(revision = state.revision()))]
    pub fn render(&mut self, state: &CustomizationState) -> ShopResult<PreviewFrame> {
        let canvas = self.opts.canvas;
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ShopError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ShopError::render("canvas height exceeds u16"))?;

        let data = self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

            let bg = state.product_color();
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));

            if let Some(upload) = state.image() {
                this.draw_image(upload, ctx)?;
            }
            if !state.overlay_text().is_empty() {
                this.draw_text(state.overlay_text(), state.text_color(), ctx)?;
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })?;
        if data.len() != canvas.byte_len() {
            return Err(ShopError::render("rendered pixmap has unexpected byte length"));
        }

        Ok(PreviewFrame {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> ShopResult<R>,
    ) -> ShopResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn image_paint_for(&mut self, upload: &UploadedImage) -> ShopResult<vello_cpu::Image> {
        if let Some((id, paint)) = &self.image_cache {
            if *id == upload.id {
                return Ok(paint.clone());
            }
        }
        let paint = image_to_paint(&upload.image)?;
        self.image_cache = Some((upload.id, paint.clone()));
        Ok(paint)
    }

    fn draw_image(
        &mut self,
        upload: &UploadedImage,
        ctx: &mut vello_cpu::RenderContext,
    ) -> ShopResult<()> {
        let paint = self.image_paint_for(upload)?;
        let img = &upload.image;
        let tr = fit_transform(
            img.width,
            img.height,
            self.opts.inset_rect(),
            self.opts.image_fit,
        );
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(img.width),
            f64::from(img.height),
        ));
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        color: Rgba8,
        ctx: &mut vello_cpu::RenderContext,
    ) -> ShopResult<()> {
        let size = self.opts.font_size_px;
        let [ox, oy] = self.opts.text_origin;
        let Some(t) = self.text.as_mut() else {
            return Ok(());
        };
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout = t.engine.layout_line(text, size, brush)?;
        let baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);

        ctx.set_transform(affine_to_cpu(Affine::translate((
            f64::from(ox),
            f64::from(oy - baseline),
        ))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&t.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

fn image_to_paint(img: &PreparedImage) -> ShopResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ShopResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ShopError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ShopError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(ShopError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
