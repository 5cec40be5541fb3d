//! PNG export.
//!
//! Every character of the art is one `cell_size` square on the canvas: grid
//! cell `(row, col)` starts at pixel `(col * cell_size, row * cell_size)`.
//! Glow is a stack of concentric squares around each lit cell, the outer ones
//! more transparent, painted before any solid square so cells stay crisp.
//! The stack is flattened into one alpha per distance, so each halo pixel is
//! blended once.

use std::io::Cursor;

use image::{Rgba, RgbaImage};

use super::{canvas_size, ExportConfig};
use crate::{Color, EngineError, RenderedArt, Result};

/// Opacity of the innermost glow square.
pub const GLOW_ALPHA: f32 = 0.35;

/// Draws `art` onto a new canvas.
///
/// # Errors
///
/// [`EngineError::DegenerateCanvas`] or [`EngineError::CanvasTooLarge`] if the
/// canvas would be empty or exceed the export limits.
pub fn render_canvas(art: &RenderedArt, cfg: &ExportConfig) -> Result<RgbaImage> {
    let (width, height) = canvas_size(art, cfg)?;
    let mut canvas = RgbaImage::from_pixel(width, height, cfg.background.into());
    let cell = i64::from(cfg.cell_size);

    let radius = cfg.effective_glow_radius();
    if cfg.glow_enabled && radius > 0 {
        let alphas = halo_alphas(radius);
        for (row, col) in art.lit_cells() {
            paint_halo(&mut canvas, col as i64 * cell, row as i64 * cell, cell, cfg.glow_color, &alphas);
        }
    }

    let foreground: Rgba<u8> = cfg.foreground.into();
    for (row, col) in art.lit_cells() {
        fill_rect(&mut canvas, col as i64 * cell, row as i64 * cell, cell, |pixel| *pixel = foreground);
    }
    Ok(canvas)
}

/// Encodes `art` as PNG.
///
/// Canvases that can't be drawn are replaced by a 1x1 image in the background
/// color, so this only fails if PNG encoding itself fails.
///
/// # Errors
///
/// Returns [`EngineError::Image`] on encoder failure.
pub fn to_image_buffer(art: &RenderedArt, cfg: &ExportConfig) -> Result<Vec<u8>> {
    let canvas = match render_canvas(art, cfg) {
        Ok(canvas) => canvas,
        Err(err @ EngineError::DegenerateCanvas { .. }) => {
            log::debug!("PNG export of empty art: {err}");
            placeholder(cfg)
        }
        Err(err @ EngineError::CanvasTooLarge { .. }) => {
            log::warn!("PNG export replaced by placeholder: {err}");
            placeholder(cfg)
        }
        Err(err) => return Err(err),
    };
    encode_png(&canvas)
}

/// Alpha of the glow square `distance` pixels outside the cell.
pub fn glow_alpha(distance: u32, radius: u32) -> f32 {
    if distance == 0 || distance > radius {
        return 0.0;
    }
    GLOW_ALPHA * (radius + 1 - distance) as f32 / (radius + 1) as f32
}

fn placeholder(cfg: &ExportConfig) -> RgbaImage {
    RgbaImage::from_pixel(1, 1, cfg.background.into())
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Combined alpha of all glow squares covering a pixel `d` pixels outside the
/// cell, indexed by `d`. Index 0 is the cell itself.
fn halo_alphas(radius: u32) -> Vec<f32> {
    let mut alphas = vec![0.0; radius as usize + 1];
    let mut transparency = 1.0;
    for distance in (1..=radius).rev() {
        transparency *= 1.0 - glow_alpha(distance, radius);
        alphas[distance as usize] = 1.0 - transparency;
    }
    alphas
}

fn paint_halo(canvas: &mut RgbaImage, x: i64, y: i64, cell: i64, color: Color, alphas: &[f32]) {
    let radius = alphas.len() as i64 - 1;
    let outside = |p: i64, start: i64| {
        if p < start {
            start - p
        } else if p >= start + cell {
            p - (start + cell) + 1
        } else {
            0
        }
    };
    let x0 = (x - radius).max(0);
    let y0 = (y - radius).max(0);
    let x1 = (x + cell + radius).min(i64::from(canvas.width()));
    let y1 = (y + cell + radius).min(i64::from(canvas.height()));
    for py in y0..y1 {
        for px in x0..x1 {
            let distance = outside(px, x).max(outside(py, y));
            if distance > 0 {
                blend(canvas.get_pixel_mut(px as u32, py as u32), color, alphas[distance as usize]);
            }
        }
    }
}

/// Applies `paint` to every pixel of the square, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, size: i64, mut paint: impl FnMut(&mut Rgba<u8>)) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + size).min(i64::from(canvas.width()));
    let y1 = (y + size).min(i64::from(canvas.height()));
    for py in y0..y1 {
        for px in x0..x1 {
            paint(canvas.get_pixel_mut(px as u32, py as u32));
        }
    }
}

fn blend(pixel: &mut Rgba<u8>, color: Color, alpha: f32) {
    let src = [color.r, color.g, color.b];
    for (dst, src) in pixel.0.iter_mut().zip(src) {
        *dst = (f32::from(src) * alpha + f32::from(*dst) * (1.0 - alpha)).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_alpha_falls_off() {
        assert_eq!(0.0, glow_alpha(0, 3));
        assert_eq!(0.0, glow_alpha(4, 3));
        assert!(glow_alpha(1, 3) > glow_alpha(2, 3));
        assert!(glow_alpha(2, 3) > glow_alpha(3, 3));
        assert!(glow_alpha(3, 3) > 0.0);
        assert!(glow_alpha(1, 3) <= GLOW_ALPHA);
    }

    #[test]
    fn test_halo_alphas_stack_squares() {
        let alphas = halo_alphas(3);
        assert_eq!(4, alphas.len());
        assert_eq!(0.0, alphas[0]);
        assert!((alphas[3] - glow_alpha(3, 3)).abs() < 1e-6);
        assert!(alphas[1] > alphas[2] && alphas[2] > alphas[3]);
        assert!(alphas[1] > glow_alpha(1, 3));
    }

    #[test]
    fn test_huge_glow_radius_is_clamped() {
        let art = RenderedArt::from_rows(vec!["#".to_string()], crate::RenderOptions::default());
        let cfg = ExportConfig {
            cell_size: 200,
            glow_enabled: true,
            glow_radius: u32::MAX,
            glow_color: Color::MAGENTA,
            ..Default::default()
        };
        let canvas = render_canvas(&art, &cfg).unwrap();
        assert_eq!((200, 200), canvas.dimensions());
        assert_eq!(Rgba::from(Color::NEON_GREEN), *canvas.get_pixel(0, 0));
    }

    #[test]
    fn test_blend() {
        let mut pixel = Rgba([0, 0, 0, 255]);
        blend(&mut pixel, Color::new(200, 100, 0), 0.5);
        assert_eq!(Rgba([100, 50, 0, 255]), pixel);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        fill_rect(&mut canvas, -2, -2, 4, |pixel| *pixel = Rgba([9, 9, 9, 255]));
        assert_eq!(Rgba([9, 9, 9, 255]), *canvas.get_pixel(1, 1));
        assert_eq!(Rgba([0, 0, 0, 255]), *canvas.get_pixel(2, 2));
    }
}
