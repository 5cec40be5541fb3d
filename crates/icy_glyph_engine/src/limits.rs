//! Canvas size limits to prevent memory exhaustion during export
//!
//! A long input rendered with a large cell size can ask for an enormous
//! pixel buffer; exports above these limits fall back to a placeholder.

/// Maximum canvas side length in pixels
pub const MAX_CANVAS_SIDE: u64 = 16_384;

/// Maximum canvas area in pixels (64 MiB of RGBA data)
pub const MAX_CANVAS_PIXELS: u64 = 16 * 1024 * 1024;

/// Maximum glow reach in pixels; larger radii are clamped
pub const MAX_GLOW_RADIUS: u32 = 32;

/// Check if canvas dimensions are non-degenerate and within safe limits
#[inline]
pub fn is_within_limits(width: u64, height: u64) -> bool {
    width > 0 && width <= MAX_CANVAS_SIDE && height > 0 && height <= MAX_CANVAS_SIDE && width * height <= MAX_CANVAS_PIXELS
}
