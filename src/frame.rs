use image::{DynamicImage, RgbImage};

use crate::color::Color;
use crate::errors::{CorError, Result};

pub const PIXEL_DEPTH: u32 = 2;

/// Converts an 8-bit RGB image to a packed RGB565 buffer in device byte
/// order, 2 bytes per pixel, rows top to bottom.
pub fn image_to_rgb565(image: &RgbImage) -> Vec<u8> {
    let buf_size = (PIXEL_DEPTH * image.width() * image.height()) as usize;
    let mut buf: Vec<u8> = vec![0; buf_size];

    for y in 0..image.height() {
        for x in 0..image.width() {
            let pixel = image.get_pixel(x, y);
            let [hi, lo] = Color::new(pixel.0[0], pixel.0[1], pixel.0[2]).to_be_bytes();
            let idx = (x * PIXEL_DEPTH + (PIXEL_DEPTH * image.width()) * y) as usize;

            buf[idx] = hi;
            buf[idx + 1] = lo;
        }
    }

    buf
}

/// Converts an image destined for a width x height region of the screen,
/// rejecting images that would overrun it.
pub fn image_for_region(image: &DynamicImage, width: u32, height: u32) -> Result<Vec<u8>> {
    if image.width() > width || image.height() > height {
        return Err(CorError::ImageTooLarge);
    }

    // Convert to RGB so we have a known pixel format to convert from
    Ok(image_to_rgb565(&image.to_rgb8()))
}

/// A solid-color buffer for region fills.
pub fn solid(color: Color, width: u32, height: u32) -> Vec<u8> {
    let [hi, lo] = color.to_be_bytes();
    let pixels = (width * height) as usize;
    let mut buf = Vec::with_capacity(pixels * PIXEL_DEPTH as usize);
    for _ in 0..pixels {
        buf.push(hi);
        buf.push(lo);
    }

    buf
}
