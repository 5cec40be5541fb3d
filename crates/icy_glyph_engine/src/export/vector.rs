//! SVG export.
//!
//! The document mirrors the PNG canvas: same viewport, one rect per lit cell at
//! the same pixel origin. Glow is one shared filter in `<defs>` referenced by
//! every cell, so the document grows with the art only.

use std::fmt::Write;

use super::{canvas_size, ExportConfig};
use crate::{EngineError, RenderedArt};

pub const GLOW_FILTER_ID: &str = "glow";

/// Builds a self contained SVG document for `art`.
///
/// Canvases that can't be drawn give a 1x1 document holding only the
/// background, like the PNG exporter.
pub fn to_vector_document(art: &RenderedArt, cfg: &ExportConfig) -> String {
    let (width, height, draw_cells) = match canvas_size(art, cfg) {
        Ok((width, height)) => (width, height, true),
        Err(err) => {
            match err {
                EngineError::CanvasTooLarge { .. } => log::warn!("SVG export replaced by placeholder: {err}"),
                _ => log::debug!("SVG export of empty art: {err}"),
            }
            (1, 1, false)
        }
    };
    let glow = draw_cells && cfg.glow_enabled;

    let mut svg = String::new();
    // writing to a String never fails
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" shape-rendering="crispEdges">"#
    );
    if glow {
        write_glow_filter(&mut svg, width, height, cfg);
    }
    let _ = writeln!(svg, r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#, cfg.background.to_hex());

    if draw_cells {
        let cell = cfg.cell_size;
        let fill = cfg.foreground.to_hex();
        let filter = if glow { format!(r#" filter="url(#{GLOW_FILTER_ID})""#) } else { String::new() };
        for (row, col) in art.lit_cells() {
            let _ = writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{cell}" height="{cell}" fill="{fill}"{filter}/>"#,
                col as u64 * u64::from(cell),
                row as u64 * u64::from(cell)
            );
        }
    }
    svg.push_str("</svg>");
    svg
}

fn write_glow_filter(svg: &mut String, width: u32, height: u32, cfg: &ExportConfig) {
    let deviation = cfg.effective_glow_radius() as f32 / 2.0;
    let _ = writeln!(svg, "<defs>");
    let _ = writeln!(
        svg,
        r#"<filter id="{GLOW_FILTER_ID}" filterUnits="userSpaceOnUse" x="0" y="0" width="{width}" height="{height}">"#
    );
    let _ = writeln!(svg, r#"<feGaussianBlur in="SourceAlpha" stdDeviation="{deviation}" result="blur"/>"#);
    let _ = writeln!(svg, r#"<feFlood flood-color="{}" flood-opacity="0.9"/>"#, cfg.glow_color.to_hex());
    let _ = writeln!(svg, r#"<feComposite in2="blur" operator="in" result="halo"/>"#);
    let _ = writeln!(svg, r#"<feMerge><feMergeNode in="halo"/><feMergeNode in="SourceGraphic"/></feMerge>"#);
    let _ = writeln!(svg, "</filter>");
    let _ = writeln!(svg, "</defs>");
}
