//! PNG <-> RGBA conversion between history entries and the pasteboard.

use std::borrow::Cow;
use std::io::Cursor;

use anyhow::{Context, Result};
use arboard::ImageData;
use image::{ImageFormat, RgbaImage};

pub fn encode_png(image: &ImageData<'_>) -> Result<Vec<u8>> {
    let width = u32::try_from(image.width).context("image too wide")?;
    let height = u32::try_from(image.height).context("image too tall")?;
    let buffer = RgbaImage::from_raw(width, height, image.bytes.to_vec())
        .context("pasteboard image size does not match its pixel data")?;

    let mut png = Cursor::new(Vec::new());
    buffer
        .write_to(&mut png, ImageFormat::Png)
        .context("failed to encode pasteboard image as PNG")?;
    Ok(png.into_inner())
}

pub fn decode_png(bytes: &[u8]) -> Result<ImageData<'static>> {
    let decoded = image::load_from_memory(bytes).context("failed to decode stored image")?;
    let rgba = decoded.to_rgba8();
    Ok(ImageData {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        bytes: Cow::Owned(rgba.into_raw()),
    })
}
