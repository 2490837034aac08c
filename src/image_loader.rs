use crate::error::Result;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGB8 pixels.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image file into RGB8 pixels.
/// Blocking; call it from a rayon worker, never from the Slint event loop.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(DecodedImage {
        data: rgb.into_raw(),
        width,
        height,
    })
}

/// Wraps RGB8 pixels in a Slint image. Must run on the UI thread.
pub fn create_slint_image(data: &[u8], width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(data, width, height);
    Image::from_rgb8(buffer)
}
