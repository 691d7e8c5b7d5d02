//! Composes placeholder images and encodes them as PNG

use crate::font::{self, Face};
use crate::layout;
use crate::params::{Defaults, ImageRequest, Params};
use ab_glyph::point;
use image::{ImageError, ImageOutputFormat, RgbaImage};
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Environment failures. Bad caller input never ends up here.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create an image.")]
    Font,

    #[error("Failed to encode the image.")]
    Encode(#[source] ImageError),
}

/// Resolve `params`, draw the placeholder and encode it as PNG
#[tracing::instrument(skip_all, fields(size = %params.size))]
pub fn generate(params: &Params, defaults: &Defaults) -> Result<Vec<u8>, RenderError> {
    let request = ImageRequest::resolve(params, defaults);
    debug!(?request, "resolved placeholder request");

    let canvas = compose(&request, defaults.padding)?;
    encode_png(&canvas)
}

/// Fill the background, then draw the wrapped text as a block centered
/// vertically, with every line centered on its own
pub fn compose(request: &ImageRequest, padding: f32) -> Result<RgbaImage, RenderError> {
    let face = Face::new(font::embedded()?, request.font_size);
    let (width, height) = (request.width as f32, request.height as f32);

    let mut canvas = RgbaImage::from_pixel(request.width, request.height, request.background);

    let lines = layout::wrap_text(&request.text, &face, width - padding);
    let heights: Vec<f32> = lines.iter().map(|line| face.ink_height(line)).collect();
    let total: f32 = heights.iter().sum();

    let mut baseline = (height - total) / 2.0;
    for (line, line_height) in lines.iter().zip(heights) {
        baseline += line_height;
        let x = (width - face.measure(line)) / 2.0;
        face.draw(
            &mut canvas,
            line,
            point(x.round(), baseline.round()),
            request.foreground,
        );
    }

    Ok(canvas)
}

/// Lossless PNG, RGBA
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut image_data: Vec<u8> = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut image_data), ImageOutputFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(image_data)
}
