#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Turns text into multi-line ASCII art glyph renderings and exports them as
//! plain text, PNG or SVG.

mod error;
pub use error::*;

mod color;
pub use color::*;

pub mod limits;

pub mod font;
pub use font::{get_preset, Glyph, Preset, PresetId};

pub mod layout;
pub use layout::{insert_header, render, OutputWidth, RenderOptions, RenderedArt};

pub mod export;
pub use export::{export, ExportConfig, ExportFormat, ExportPayload};

pub mod samples;
