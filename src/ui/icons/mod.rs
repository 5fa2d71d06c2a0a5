use anyhow::{Context, Result};
use eframe::egui::{self, IconData};
use image::{imageops, load_from_memory, ImageBuffer, Rgba, RgbaImage};
use tracing::warn;

/// Margin between the logo and the edge of its circular backing.
const ICON_MARGIN: u32 = 10;
const MAX_LOGO_DIMENSION: u32 = 256;

pub fn decode_logo(logo_bytes: &[u8]) -> Result<RgbaImage> {
    let image = load_from_memory(logo_bytes).context("decoding embedded logo")?;
    let image = if image.width() > MAX_LOGO_DIMENSION || image.height() > MAX_LOGO_DIMENSION {
        image.resize(
            MAX_LOGO_DIMENSION,
            MAX_LOGO_DIMENSION,
            imageops::FilterType::Lanczos3,
        )
    } else {
        image
    };
    Ok(image.to_rgba8())
}

/// The logo, or a generated stand-in if it cannot be decoded.
pub fn logo_or_placeholder(logo_bytes: &[u8]) -> RgbaImage {
    decode_logo(logo_bytes).unwrap_or_else(|e| {
        warn!("Falling back to generated logo: {:#}", e);
        placeholder_logo(64)
    })
}

// Teal page with a folded corner, drawn pixel by pixel
fn placeholder_logo(size: u32) -> RgbaImage {
    let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(size, size);
    let left = size / 5;
    let right = size - size / 5;
    let fold = size / 4;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let inside = x >= left && x < right && y >= 2 && y < size - 2;
        let folded = x >= right - fold && y < 2 + fold && (x - (right - fold)) > y;
        *pixel = if inside && !folded {
            Rgba([0x12, 0x9B, 0xA3, 255])
        } else {
            Rgba([0, 0, 0, 0])
        };
    }
    img
}

/// Places the logo on a white disc with transparent corners.
pub fn composite_on_circle(logo: &RgbaImage) -> RgbaImage {
    let width = logo.width() + 2 * ICON_MARGIN;
    let height = logo.height() + 2 * ICON_MARGIN;
    // Transparent canvas with room for the margin
    let mut canvas = RgbaImage::new(width, height);

    // White ellipse filling the canvas
    let (rx, ry) = (width as f32 / 2.0, height as f32 / 2.0);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = (x as f32 + 0.5 - rx) / rx;
        let dy = (y as f32 + 0.5 - ry) / ry;
        if dx * dx + dy * dy <= 1.0 {
            *pixel = Rgba([255, 255, 255, 255]);
        }
    }

    // Logo centered on top
    imageops::overlay(&mut canvas, logo, ICON_MARGIN as i64, ICON_MARGIN as i64);
    canvas
}

/// Window and taskbar icon built from the embedded logo.
pub fn create_app_icon(logo_bytes: &[u8]) -> IconData {
    let icon = composite_on_circle(&logo_or_placeholder(logo_bytes));
    let (width, height) = icon.dimensions();
    IconData {
        rgba: icon.into_raw(),
        width,
        height,
    }
}

pub fn load_logo_texture(ctx: &egui::Context, logo_bytes: &[u8]) -> egui::TextureHandle {
    let logo = logo_or_placeholder(logo_bytes);
    let size = [logo.width() as usize, logo.height() as usize];
    ctx.load_texture(
        "logo",
        egui::ColorImage::from_rgba_unmultiplied(size, logo.as_raw()),
        egui::TextureOptions::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGO_BYTES: &[u8] = include_bytes!("../../../img/logo.png");

    #[test]
    fn embedded_logo_decodes() {
        let logo = decode_logo(LOGO_BYTES).unwrap();
        assert!(logo.width() > 0 && logo.height() > 0);
    }

    #[test]
    fn bad_bytes_fall_back_to_placeholder() {
        assert!(decode_logo(b"not an image").is_err());
        let logo = logo_or_placeholder(b"not an image");
        assert_eq!(logo.dimensions(), (64, 64));
    }

    #[test]
    fn icon_is_logo_on_a_disc() {
        let logo = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 255, 255]));
        let icon = composite_on_circle(&logo);
        assert_eq!(icon.dimensions(), (60, 60));
        // corners stay transparent, rim is white, middle is the logo
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(59, 59)[3], 0);
        assert_eq!(*icon.get_pixel(30, 3), Rgba([255, 255, 255, 255]));
        assert_eq!(*icon.get_pixel(30, 30), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn app_icon_buffer_matches_dimensions() {
        let icon = create_app_icon(LOGO_BYTES);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
