//! Export of rendered art as plain text, PNG or SVG.
//!
//! All exporters are pure functions of a [`RenderedArt`] and an
//! [`ExportConfig`], so the three outputs always show the same grid.
//!
//! # Example
//!
//! ```no_run
//! use icy_glyph_engine::{export, render, ExportConfig, ExportFormat, RenderOptions};
//! use std::path::Path;
//!
//! let options = RenderOptions::default();
//! let art = render("HELLO", &options).unwrap();
//! let cfg = ExportConfig::from_options(&options);
//! export(&art, ExportFormat::Image, &cfg).unwrap().save(Path::new("hello.png")).unwrap();
//! ```

use std::path::Path;

use crate::{limits, Color, EngineError, RenderOptions, RenderedArt, Result};

pub mod raster;
pub mod text;
pub mod vector;

pub use raster::{render_canvas, to_image_buffer};
pub use text::to_plain_text;
pub use vector::to_vector_document;

/// Styling shared by the raster and vector exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Pixel size of one character cell of the art.
    pub cell_size: u32,
    pub glow_enabled: bool,
    pub glow_color: Color,
    /// Halo reach in pixels around each lit cell.
    pub glow_radius: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cell_size: 8,
            glow_enabled: false,
            glow_color: Color::NEON_GREEN,
            glow_radius: 4,
            background: Color::BLACK,
            foreground: Color::NEON_GREEN,
        }
    }
}

impl ExportConfig {
    /// Takes foreground and background from the render options; the glow
    /// follows the foreground color.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            glow_color: options.foreground,
            background: options.background,
            foreground: options.foreground,
            ..Default::default()
        }
    }

    /// Glow radius both exporters draw with, capped at [`limits::MAX_GLOW_RADIUS`].
    pub fn effective_glow_radius(&self) -> u32 {
        self.glow_radius.min(limits::MAX_GLOW_RADIUS)
    }
}

/// Export formats for rendered art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Plain UTF-8 text
    Text,
    /// PNG image
    Image,
    /// SVG document
    Vector,
}

impl ExportFormat {
    /// All available export formats
    pub const ALL: &'static [ExportFormat] = &[ExportFormat::Text, ExportFormat::Image, ExportFormat::Vector];

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Image => "png",
            ExportFormat::Vector => "svg",
        }
    }

    /// Get a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Plain Text",
            ExportFormat::Image => "PNG Image",
            ExportFormat::Vector => "SVG Document",
        }
    }

    /// Whether the payload is binary and can't go to a terminal.
    pub fn is_binary(&self) -> bool {
        matches!(self, ExportFormat::Image)
    }

    /// Detect export format from file extension.
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "asc" | "text" => Some(ExportFormat::Text),
            "png" => Some(ExportFormat::Image),
            "svg" => Some(ExportFormat::Vector),
            _ => None,
        }
    }

    /// Detect export format from file path.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension().and_then(|ext| ext.to_str()).and_then(ExportFormat::from_extension)
    }
}

/// Result of an export, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    Text(String),
    Image(Vec<u8>),
    Vector(String),
}

impl ExportPayload {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportPayload::Text(_) => ExportFormat::Text,
            ExportPayload::Image(_) => ExportFormat::Image,
            ExportPayload::Vector(_) => ExportFormat::Vector,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ExportPayload::Text(text) | ExportPayload::Vector(text) => text.as_bytes(),
            ExportPayload::Image(bytes) => bytes,
        }
    }

    /// Writes the payload to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.as_bytes())?;
        log::info!("saved {} ({} bytes) to {}", self.format().name(), self.as_bytes().len(), path.display());
        Ok(())
    }
}

/// Runs the exporter for `format`.
///
/// # Errors
///
/// Only PNG encoding can fail; degenerate or oversized canvases are replaced
/// by a 1x1 placeholder instead.
pub fn export(art: &RenderedArt, format: ExportFormat, cfg: &ExportConfig) -> Result<ExportPayload> {
    log::debug!("exporting {}x{} art as {}", art.width(), art.height(), format.name());
    Ok(match format {
        ExportFormat::Text => ExportPayload::Text(to_plain_text(art)),
        ExportFormat::Image => ExportPayload::Image(to_image_buffer(art, cfg)?),
        ExportFormat::Vector => ExportPayload::Vector(to_vector_document(art, cfg)),
    })
}

/// Pixel size of the canvas for `art`: one `cell_size` square per character.
///
/// # Errors
///
/// [`EngineError::DegenerateCanvas`] for a zero sized canvas and
/// [`EngineError::CanvasTooLarge`] above [`limits::MAX_CANVAS_SIDE`] or
/// [`limits::MAX_CANVAS_PIXELS`].
pub fn canvas_size(art: &RenderedArt, cfg: &ExportConfig) -> Result<(u32, u32)> {
    let width = art.width() as u64 * u64::from(cfg.cell_size);
    let height = art.height() as u64 * u64::from(cfg.cell_size);
    if width == 0 || height == 0 {
        return Err(EngineError::DegenerateCanvas { width, height });
    }
    if !limits::is_within_limits(width, height) {
        return Err(EngineError::CanvasTooLarge { width, height });
    }
    Ok((width as u32, height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(rows: &[&str]) -> RenderedArt {
        RenderedArt::from_rows(rows.iter().map(|row| (*row).to_string()).collect(), RenderOptions::default())
    }

    #[test]
    fn test_format_extension_detection() {
        assert_eq!(ExportFormat::from_extension("TXT"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::from_extension("png"), Some(ExportFormat::Image));
        assert_eq!(ExportFormat::from_extension("svg"), Some(ExportFormat::Vector));
        assert_eq!(ExportFormat::from_extension("gif"), None);
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/banner.svg")), Some(ExportFormat::Vector));
        assert_eq!(ExportFormat::from_path(Path::new("banner")), None);
        for format in ExportFormat::ALL {
            assert_eq!(Some(*format), ExportFormat::from_extension(format.extension()));
        }
    }

    #[test]
    fn test_canvas_size() {
        let cfg = ExportConfig { cell_size: 4, ..Default::default() };
        assert_eq!((12, 8), canvas_size(&art(&["# #", " # "]), &cfg).unwrap());
    }

    #[test]
    fn test_canvas_size_degenerate() {
        let cfg = ExportConfig::default();
        assert!(matches!(canvas_size(&art(&[]), &cfg), Err(EngineError::DegenerateCanvas { .. })));
        let zero_cells = ExportConfig { cell_size: 0, ..cfg };
        assert!(matches!(canvas_size(&art(&["#"]), &zero_cells), Err(EngineError::DegenerateCanvas { .. })));
    }

    #[test]
    fn test_canvas_size_too_large() {
        let cfg = ExportConfig { cell_size: 4096, ..Default::default() };
        let err = canvas_size(&art(&["#####"]), &cfg).unwrap_err();
        assert!(matches!(err, EngineError::CanvasTooLarge { width: 20_480, height: 4096 }));
    }

    #[test]
    fn test_glow_radius_is_clamped() {
        let cfg = ExportConfig { glow_radius: 200, ..Default::default() };
        assert_eq!(limits::MAX_GLOW_RADIUS, cfg.effective_glow_radius());
        let cfg = ExportConfig { glow_radius: 3, ..cfg };
        assert_eq!(3, cfg.effective_glow_radius());
    }

    #[test]
    fn test_payload_format() {
        let a = art(&["#"]);
        let cfg = ExportConfig::default();
        for format in ExportFormat::ALL {
            assert_eq!(*format, export(&a, *format, &cfg).unwrap().format());
        }
    }
}
