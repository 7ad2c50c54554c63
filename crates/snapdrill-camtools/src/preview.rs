//! Header thumbnail
//!
//! Luban shows the `;thumbnail:` header field as a preview of the job.
//! The preview is a fixed blank raster; job geometry is not drawn.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use crate::error::{CamToolError, CamToolResult};

/// Preview width in pixels
pub const PREVIEW_WIDTH: u32 = 720;
/// Preview height in pixels
pub const PREVIEW_HEIGHT: u32 = 480;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Render the preview as a base64 encoded PNG.
///
/// The diameter is accepted for API stability only; every diameter yields
/// the same payload.
pub fn render_preview(_diameter: f64) -> CamToolResult<String> {
    let image = RgbaImage::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| CamToolError::ImageError(e.to_string()))?;

    Ok(STANDARD.encode(png))
}

/// Render the preview as an inline `data:` URI
pub fn thumbnail_uri(diameter: f64) -> CamToolResult<String> {
    Ok(format!("{}{}", DATA_URI_PREFIX, render_preview(diameter)?))
}
