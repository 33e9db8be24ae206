// SPDX-License-Identifier: MPL-2.0
//! This module handles the snack bar configuration, including loading and saving
//! visual preferences to a `snackbar.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language of the demo application
//! - `[layout]` - Bar height and resting offset
//! - `[typography]` - Message and action text sizes
//! - `[animation]` - Slide and hold durations, easing curve
//! - `[colors]` - Background, message and action colors (`#RRGGBB` or `#RRGGBBAA`)
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the bars down
//! config.animation.slide_duration_ms = Some(800);
//!
//! // Resolve the style handed to hosts
//! let style = config.style();
//! assert_eq!(style.slide_duration.as_millis(), 800);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::animation::Interpolator;
use crate::error::{Error, Result};
use crate::snackbar::SnackBarStyle;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "snackbar.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Bar geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Resting distance above the bottom edge.
    #[serde(
        default = "default_animation_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_height: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            animation_height: default_animation_height(),
        }
    }
}

/// Text sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypographyConfig {
    #[serde(
        default = "default_message_text_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_text_size: Option<f32>,

    #[serde(
        default = "default_action_text_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub action_text_size: Option<f32>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            message_text_size: default_message_text_size(),
            action_text_size: default_action_text_size(),
        }
    }
}

/// Timeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(
        default = "default_slide_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_duration_ms: Option<u64>,

    #[serde(
        default = "default_hold_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hold_duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolator: Option<Interpolator>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: default_slide_duration_ms(),
            hold_duration_ms: default_hold_duration_ms(),
            interpolator: Some(DEFAULT_INTERPOLATOR),
        }
    }
}

/// Colors as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ColorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_pressed: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Snack bar configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub typography: TypographyConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub colors: ColorsConfig,
}

impl Config {
    /// Resolves the style handed to hosts.
    ///
    /// Missing values fall back to defaults, numbers are clamped to their
    /// supported range and unparseable colors are ignored.
    #[must_use]
    pub fn style(&self) -> SnackBarStyle {
        let base = SnackBarStyle::default();

        SnackBarStyle {
            height: self
                .layout
                .height
                .map_or(base.height, |h| h.clamp(MIN_HEIGHT, MAX_HEIGHT)),
            animation_height: self.layout.animation_height.map_or(base.animation_height, |h| {
                h.clamp(MIN_ANIMATION_HEIGHT, MAX_ANIMATION_HEIGHT)
            }),
            message_text_size: self
                .typography
                .message_text_size
                .map_or(base.message_text_size, clamp_text_size),
            action_text_size: self
                .typography
                .action_text_size
                .map_or(base.action_text_size, clamp_text_size),
            slide_duration: self.animation.slide_duration_ms.map_or(base.slide_duration, |ms| {
                Duration::from_millis(ms.min(MAX_SLIDE_DURATION_MS))
            }),
            hold_duration: self.animation.hold_duration_ms.map_or(base.hold_duration, |ms| {
                Duration::from_millis(ms.min(MAX_HOLD_DURATION_MS))
            }),
            interpolator: self.animation.interpolator.unwrap_or(base.interpolator),
            background: resolve_color(self.colors.background.as_deref(), base.background),
            message_color: resolve_color(self.colors.message.as_deref(), base.message_color),
            action_color: resolve_color(self.colors.action.as_deref(), base.action_color),
            action_pressed_color: resolve_color(
                self.colors.action_pressed.as_deref(),
                base.action_pressed_color,
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_height() -> Option<f32> {
    Some(DEFAULT_HEIGHT)
}

fn default_animation_height() -> Option<f32> {
    Some(DEFAULT_ANIMATION_HEIGHT)
}

fn default_message_text_size() -> Option<f32> {
    Some(DEFAULT_MESSAGE_TEXT_SIZE)
}

fn default_action_text_size() -> Option<f32> {
    Some(DEFAULT_ACTION_TEXT_SIZE)
}

fn default_slide_duration_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_DURATION_MS)
}

fn default_hold_duration_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_DURATION_MS)
}

fn clamp_text_size(size: f32) -> f32 {
    size.clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE)
}

fn resolve_color(raw: Option<&str>, fallback: Color) -> Color {
    match raw {
        Some(raw) => parse_hex_color(raw).unwrap_or_else(|| {
            tracing::warn!(color = raw, "ignoring invalid color in config");
            fallback
        }),
        None => fallback,
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
