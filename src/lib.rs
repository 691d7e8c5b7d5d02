pub mod color;
pub mod font;
pub mod layout;
pub mod params;
pub mod render;
pub mod server;
pub mod settings;

/// Placeholder configuration -- process-wide constants fixed at startup
pub mod config {
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub const RUST_LOG: &str = "info,actix_web=info,actix_server=info";

    /// Port used when `ENVIRONMENT=production`
    pub const PRODUCTION_PORT: u16 = 8080;

    /// Port used for every other environment
    pub const DEVELOPMENT_PORT: u16 = 3000;

    /// Smallest width or height an image can be rendered at
    pub const MIN_DIMENSION: u32 = 150;

    /// Largest width or height an image can be rendered at
    pub const MAX_DIMENSION: u32 = 3000;

    /// Horizontal room kept free when wrapping text
    pub const PADDING: f32 = 30.0;

    /// The default font size is the image width divided by this
    pub const FONT_SIZE_DIVISOR: f32 = 5.0;

    /// Upper bound on a caller-supplied font size
    pub const MAX_FONT_SIZE: f32 = 3000.0;

    /// `#D4D4D4`
    pub const BACKGROUND: [u8; 4] = [0xD4, 0xD4, 0xD4, 0xFF];

    /// `#737373`
    pub const FOREGROUND: [u8; 4] = [0x73, 0x73, 0x73, 0xFF];

    /// MIME type of every successful response
    pub const PNG: &str = "image/png";
}
