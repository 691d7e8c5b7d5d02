//! Turns raw request parameters into a fully resolved `ImageRequest`.
//!
//! Nothing here can fail. Every malformed or missing value degrades to a
//! default, so a caller always gets an image back.

use crate::color;
use crate::config;
use image::Rgba;

/// Unvalidated parameters, exactly as they arrived from the caller
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// `"<W>x<H>"` or `"<S>"`
    pub size: String,
    pub text: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub font_size: Option<String>,
}

/// Read-only rendering defaults, built once and shared by every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub min_dimension: u32,
    pub max_dimension: u32,

    /// Horizontal room kept free when wrapping text
    pub padding: f32,

    /// Font size is `width / font_size_divisor` unless the caller picks one
    pub font_size_divisor: f32,
    pub max_font_size: f32,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            background: Rgba(config::BACKGROUND),
            foreground: Rgba(config::FOREGROUND),
            min_dimension: config::MIN_DIMENSION,
            max_dimension: config::MAX_DIMENSION,
            padding: config::PADDING,
            font_size_divisor: config::FONT_SIZE_DIVISOR,
            max_font_size: config::MAX_FONT_SIZE,
        }
    }
}

/// Everything needed to render one placeholder image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub width: u32,
    pub height: u32,
    pub text: String,
    pub font_size: f32,
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
}

impl ImageRequest {
    pub fn resolve(params: &Params, defaults: &Defaults) -> Self {
        let (width, height) = resolve_size(&params.size, defaults);
        ImageRequest {
            width,
            height,
            text: resolve_text(params.text.as_deref(), width, height),
            font_size: resolve_font_size(params.font_size.as_deref(), width, defaults),
            background: color::resolve(params.background.as_deref(), defaults.background),
            foreground: color::resolve(params.foreground.as_deref(), defaults.foreground),
        }
    }
}

/// Parse a size specifier into clamped `(width, height)`. A part that fails
/// to parse falls back to the minimum dimension on its own.
pub fn resolve_size(size: &str, defaults: &Defaults) -> (u32, u32) {
    let (min, max) = (
        i64::from(defaults.min_dimension),
        i64::from(defaults.max_dimension),
    );
    let parse = |part: &str| part.parse::<i64>().ok();

    let parts: Vec<&str> = size.split('x').collect();
    let (width, height) = match *parts.as_slice() {
        [width, height] => (parse(width).unwrap_or(min), parse(height).unwrap_or(min)),
        [side] => parse(side).map_or((min, min), |side| (side, side)),
        _ => (min, min),
    };

    let clamp = |value: i64| value.clamp(min, max) as u32;
    (clamp(width), clamp(height))
}

/// Caller text verbatim, or `"<width>x<height>"` when there is nothing to draw
pub fn resolve_text(text: Option<&str>, width: u32, height: u32) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => text.to_owned(),
        _ => format!("{width}x{height}"),
    }
}

/// A finite positive font size, capped, or `width / divisor`
pub fn resolve_font_size(font_size: Option<&str>, width: u32, defaults: &Defaults) -> f32 {
    font_size
        .and_then(|size| size.parse::<f32>().ok())
        .filter(|size| size.is_finite() && *size > 0.0)
        .map(|size| size.min(defaults.max_font_size))
        .unwrap_or(width as f32 / defaults.font_size_divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(input: &str) -> (u32, u32) {
        resolve_size(input, &Defaults::default())
    }

    #[test]
    fn test_two_dimensions() {
        assert_eq!(size("300x100"), (300, 150));
        assert_eq!(size("640x480"), (640, 480));
        assert_eq!(size("+200x250"), (200, 250));
    }

    #[test]
    fn test_square() {
        assert_eq!(size("200"), (200, 200));
        assert_eq!(size("3000"), (3000, 3000));
    }

    #[test]
    fn test_per_part_fallback() {
        assert_eq!(size("abcx400"), (150, 400));
        assert_eq!(size("400x"), (400, 150));
        assert_eq!(size("x"), (150, 150));
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(size(""), (150, 150));
        assert_eq!(size("abc"), (150, 150));
        assert_eq!(size("200x200x200"), (150, 150));
        assert_eq!(size("200X300"), (150, 150));
        assert_eq!(size("99999999999999999999"), (150, 150));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(size("5000x5000"), (3000, 3000));
        assert_eq!(size("10x20"), (150, 150));
        assert_eq!(size("-400"), (150, 150));
        assert_eq!(size("0x4000"), (150, 3000));
    }

    #[test]
    fn test_always_in_bounds() {
        for input in [
            "", "x", "xx", "1", "-1x-1", "149x3001", "2147483648x1", "a1xb2", " 300", "300 ",
            "1e3x1e3", "150x3000",
        ] {
            let (width, height) = size(input);
            assert!((150..=3000).contains(&width), "{input:?} gave width {width}");
            assert!((150..=3000).contains(&height), "{input:?} gave height {height}");
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(resolve_text(Some("Hello world"), 300, 100), "Hello world");
        assert_eq!(resolve_text(Some(""), 300, 150), "300x150");
        assert_eq!(resolve_text(Some("  \t"), 200, 200), "200x200");
        assert_eq!(resolve_text(None, 150, 150), "150x150");
    }

    #[test]
    fn test_font_size() {
        let defaults = Defaults::default();
        assert_eq!(resolve_font_size(Some("24"), 300, &defaults), 24.0);
        assert_eq!(resolve_font_size(Some("12.5"), 300, &defaults), 12.5);
        assert_eq!(resolve_font_size(Some("notanumber"), 300, &defaults), 60.0);
        assert_eq!(resolve_font_size(None, 200, &defaults), 40.0);
        assert_eq!(resolve_font_size(Some("0"), 300, &defaults), 60.0);
        assert_eq!(resolve_font_size(Some("-8"), 300, &defaults), 60.0);
        assert_eq!(resolve_font_size(Some("NaN"), 300, &defaults), 60.0);
        assert_eq!(resolve_font_size(Some("inf"), 300, &defaults), 60.0);
        assert_eq!(resolve_font_size(Some("1e9"), 300, &defaults), 3000.0);
    }

    #[test]
    fn test_resolve_request() {
        let params = Params {
            size: "200".into(),
            background: Some("ff0000".into()),
            ..Params::default()
        };
        let request = ImageRequest::resolve(&params, &Defaults::default());

        assert_eq!(
            request,
            ImageRequest {
                width: 200,
                height: 200,
                text: "200x200".into(),
                font_size: 40.0,
                background: Rgba([0xFF, 0, 0, 0xFF]),
                foreground: Rgba([0x73, 0x73, 0x73, 0xFF]),
            }
        );
    }
}
