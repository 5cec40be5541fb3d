use std::{fs, path::Path};

use icy_glyph_engine::{Color, ExportConfig, PresetId};
use serde::{Deserialize, Serialize};

use crate::GlyphResult;

/// User defaults, stored as `options.toml` in the config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub preset: String,

    pub foreground: Color,

    pub background: Color,

    /// Preset default when unset.
    pub letter_spacing: Option<usize>,

    /// Preset default when unset.
    pub line_height: Option<usize>,

    /// No wrapping when unset.
    pub output_width: Option<usize>,

    pub glow: bool,

    /// Follows the foreground when unset.
    pub glow_color: Option<Color>,

    pub glow_radius: u32,

    pub cell_size: u32,
}

impl Default for Options {
    fn default() -> Self {
        let export = ExportConfig::default();
        Self {
            preset: PresetId::Block.id().to_string(),
            foreground: Color::NEON_GREEN,
            background: Color::BLACK,
            letter_spacing: None,
            line_height: None,
            output_width: None,
            glow: true,
            glow_color: None,
            glow_radius: export.glow_radius,
            cell_size: export.cell_size,
        }
    }
}

impl Options {
    /// Loads the options file from the config directory, falling back to defaults.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file exists but can't be read or parsed.
    pub fn load_options() -> GlyphResult<Self> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "icy_glyph") {
            let options_file = proj_dirs.config_dir().join("options.toml");
            if options_file.exists() {
                return Self::load_from(&options_file);
            }
        }
        Ok(Options::default())
    }

    /// # Errors
    ///
    /// This function will return an error if the file can't be read or parsed.
    pub fn load_from(path: &Path) -> GlyphResult<Self> {
        let content = fs::read_to_string(path)?;
        let options: Options = toml::from_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Writes the options file, replacing the old one atomically.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config directory or file can't be written.
    pub fn store_options(&self) -> GlyphResult<()> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "icy_glyph") {
            let file_name = proj_dirs.config_dir().join("options.toml");
            let mut write_name = file_name.clone();
            write_name.set_extension("new");

            fs::create_dir_all(proj_dirs.config_dir())?;
            let toml_string = toml::to_string_pretty(self)?;
            fs::write(&write_name, toml_string)?;
            fs::rename(&write_name, &file_name)?;
            log::info!("stored options in {}", file_name.display());
        }
        Ok(())
    }
}
