//! Unified error types for icy_glyph_engine

use thiserror::Error;

/// Main error type for icy_glyph_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Registry Errors ===
    #[error("Unknown preset '{id}'")]
    UnknownPreset { id: String },

    // === Option Errors ===
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    #[error("Invalid output width '{value}' (expected 'no-wrap' or a positive integer)")]
    InvalidOutputWidth { value: String },

    // === Export Errors ===
    #[error("Degenerate canvas {width}x{height}")]
    DegenerateCanvas { width: u64, height: u64 },

    #[error("Canvas {width}x{height} exceeds the export limits")]
    CanvasTooLarge { width: u64, height: u64 },

    // === External Errors ===
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icy_glyph_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an unknown preset error
    pub fn unknown_preset(id: impl Into<String>) -> Self {
        Self::UnknownPreset { id: id.into() }
    }
}
