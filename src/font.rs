//! The embedded font face used for every placeholder. The font is parsed on
//! first use and then shared read-only for the life of the process.

use crate::render::RenderError;
use ab_glyph::{point, Font, FontRef, Glyph, GlyphId, InvalidFont, Point, PxScale, PxScaleFont, ScaleFont};
use image::{Pixel, Rgba, RgbaImage};
use once_cell::sync::Lazy;

/// DejaVu Sans, compiled into the binary
pub const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static EMBEDDED: Lazy<Result<FontRef<'static>, InvalidFont>> =
    Lazy::new(|| FontRef::try_from_slice(FONT_BYTES));

/// The process-wide parsed font
pub fn embedded() -> Result<&'static FontRef<'static>, RenderError> {
    EMBEDDED.as_ref().map_err(|_| RenderError::Font)
}

/// A font scaled to a fixed size. Advances and kerning are snapped to whole
/// pixels, the way a fully hinted rasterizer places glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Face<'a> {
    font: PxScaleFont<&'a FontRef<'static>>,
}

impl<'a> Face<'a> {
    /// `size` is the em size in pixels (a point size at 72 DPI)
    pub fn new(font: &'a FontRef<'static>, size: f32) -> Self {
        let units_per_em = font.units_per_em().unwrap_or(2048.0);
        let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
        Face {
            font: font.as_scaled(scale),
        }
    }

    /// Glyph ids paired with their pen offset from the start of the line, and
    /// the total advance
    fn advances(&self, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = self.font.glyph_id(c);
            if let Some(previous) = previous {
                caret += self.font.kern(previous, id).round();
            }
            glyphs.push((id, caret));
            caret += self.font.h_advance(id).round();
            previous = Some(id);
        }

        (glyphs, caret)
    }

    fn layout(&self, text: &str, origin: Point) -> impl Iterator<Item = Glyph> + '_ {
        let scale = self.font.scale();
        self.advances(text)
            .0
            .into_iter()
            .map(move |(id, offset)| id.with_scale_and_position(scale, point(origin.x + offset, origin.y)))
    }

    /// Pen advance of `text` in pixels
    pub fn measure(&self, text: &str) -> f32 {
        self.advances(text).1
    }

    /// Height of the inked area of `text`: top of the tallest glyph to the
    /// bottom of the lowest one. Zero when nothing would be drawn.
    pub fn ink_height(&self, text: &str) -> f32 {
        self.layout(text, point(0.0, 0.0))
            .filter_map(|glyph| self.font.font.outline_glyph(glyph))
            .map(|outlined| outlined.px_bounds())
            .fold(None, |extent: Option<(f32, f32)>, bounds| match extent {
                Some((top, bottom)) => Some((top.min(bounds.min.y), bottom.max(bounds.max.y))),
                None => Some((bounds.min.y, bounds.max.y)),
            })
            .map_or(0.0, |(top, bottom)| bottom - top)
    }

    /// Draw `text` onto `canvas` with its baseline starting at `origin`.
    /// Coverage is blended over whatever is already there; pixels outside
    /// the canvas are clipped. Glyphs that miss the canvas entirely are never
    /// rasterized. Returns how many glyphs were.
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, origin: Point, color: Rgba<u8>) -> usize {
        let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
        let mut rasterized = 0;

        for glyph in self.layout(text, origin) {
            let Some(outlined) = self.font.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            if bounds.max.x <= 0.0
                || bounds.max.y <= 0.0
                || bounds.min.x >= width as f32
                || bounds.min.y >= height as f32
            {
                continue;
            }

            rasterized += 1;
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i64 + i64::from(gx);
                let y = bounds.min.y as i64 + i64::from(gy);
                if x < 0 || y < 0 || x >= width || y >= height {
                    return;
                }

                let alpha = (f32::from(color[3]) * coverage.clamp(0.0, 1.0)).round() as u8;
                if alpha == 0 {
                    return;
                }
                canvas
                    .get_pixel_mut(x as u32, y as u32)
                    .blend(&Rgba([color[0], color[1], color[2], alpha]));
            });
        }

        rasterized
    }
}
