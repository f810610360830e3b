//! Configuration file support for vectorpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/vectorpad/config.toml`. Settings
//! include drawing defaults (stroke color/width, font, polygon side count)
//! and the demo binary's canvas surface.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#ff0000"
/// default_stroke_width = 2.0
/// polygon_sides = 6
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, stroke width, font, polygon sides)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas surface settings for the demo binary
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// User-provided values outside their valid range are clamped to the
    /// nearest valid value with a logged warning, so a hand-edited config
    /// file can never push invalid style values into the scene.
    ///
    /// Validated ranges:
    /// - `default_stroke_width`: 1.0 - 20.0
    /// - `default_font_size`: 8.0 - 72.0
    /// - `polygon_sides`: 3 - 32
    /// - `default_shape_size`: 10.0 - 200.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(1.0, 20.0);
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.default_font_size) {
            log::warn!(
                "Invalid default_font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size = self.drawing.default_font_size.clamp(8.0, 72.0);
        }

        // Polygon sides: 3 - 32
        if !(3..=32).contains(&self.drawing.polygon_sides) {
            log::warn!(
                "Invalid polygon_sides {}, clamping to 3-32 range",
                self.drawing.polygon_sides
            );
            self.drawing.polygon_sides = self.drawing.polygon_sides.clamp(3, 32);
        }

        // Shape size: 10.0 - 200.0
        if !(10.0..=200.0).contains(&self.drawing.default_shape_size) {
            log::warn!(
                "Invalid default_shape_size {:.1}, clamping to 10.0-200.0 range",
                self.drawing.default_shape_size
            );
            self.drawing.default_shape_size = self.drawing.default_shape_size.clamp(10.0, 200.0);
        }

        // Canvas dimensions: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vectorpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vectorpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(input: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(input)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/vectorpad/config.toml`, creating the parent directory if
    /// it doesn't exist. Kept for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema for the configuration file.
    ///
    /// Used by the `dump_config_schema` helper binary so external tooling
    /// can validate config files.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_stroke_width, 2.0);
        assert_eq!(config.drawing.polygon_sides, 6);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_stroke_width = 99.0
            default_font_size = 1.0
            polygon_sides = 2
            default_shape_size = 1000.0

            [canvas]
            width = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_stroke_width, 20.0);
        assert_eq!(config.drawing.default_font_size, 8.0);
        assert_eq!(config.drawing.polygon_sides, 3);
        assert_eq!(config.drawing.default_shape_size, 200.0);
        assert_eq!(config.canvas.width, 16);
    }

    #[test]
    fn invalid_font_settings_fall_back() {
        let config = Config::from_toml(
            r#"
            [drawing]
            font_weight = "chonky"
            font_style = "sideways"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.font_weight, "normal");
        assert_eq!(config.drawing.font_style, "normal");
    }

    #[test]
    fn numeric_font_weights_are_accepted() {
        let config = Config::from_toml(
            r#"
            [drawing]
            font_weight = "700"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.font_weight, "700");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("[drawing").is_err());
    }
}
