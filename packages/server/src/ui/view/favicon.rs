//! Generated 16x16 favicons.

use std::io::Cursor;

use axum::body::Bytes;
use image::{ImageError, ImageFormat, Rgba, RgbaImage};

use super::Theme;

const SIZE: u32 = 16;

/// PNG favicons for every theme, rendered once at startup
#[derive(Debug, Clone)]
pub struct Favicons {
    brutal: Bytes,
    milky: Bytes,
}

impl Favicons {
    pub fn render() -> Result<Self, ImageError> {
        Ok(Self {
            brutal: Bytes::from(render_favicon(Theme::Brutal)?),
            milky: Bytes::from(render_favicon(Theme::Milky)?),
        })
    }

    pub fn get(&self, theme: Theme) -> Bytes {
        match theme {
            Theme::Brutal => self.brutal.clone(),
            Theme::Milky => self.milky.clone(),
        }
    }
}

// Only the inner 14x14 area is painted; the border keeps the background.
fn paint_disc(image: &mut RgbaImage, center: (i32, i32), radius: i32, color: Rgba<u8>) {
    for x in 1..(SIZE as i32 - 1) {
        for y in 1..(SIZE as i32 - 1) {
            let dx = center.0 - x;
            let dy = center.1 - y;
            if dx * dx + dy * dy <= radius * radius {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Background, a large disc and a small highlight disc, encoded as PNG
pub fn render_favicon(theme: Theme) -> Result<Vec<u8>, ImageError> {
    let palette = theme.palette();
    let mut image = RgbaImage::from_pixel(SIZE, SIZE, Rgba(palette.primary));
    paint_disc(&mut image, (8, 8), 7, Rgba(palette.secondary));
    paint_disc(&mut image, (5, 5), 3, Rgba(palette.accent));

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
