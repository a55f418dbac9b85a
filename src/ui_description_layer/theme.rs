/*
 * This module defines the visual theme for fields. It resolves the hex
 * strings of a `ThemeConfig` through the color engine into concrete
 * `ColorValue`s once, so style building never parses text.
 *
 * By separating theme definition from box styling (which is in
 * ui_description_layer.rs), the whole look of the fields can be switched from
 * the configuration file alone.
 */
use crate::core::{ColorValue, ThemeConfig, hex_to_rgb};

pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTheme {
    pub border: ColorValue,
    pub border_focused: ColorValue,
    pub border_error: ColorValue,
    pub border_disabled: ColorValue,
    pub surface: ColorValue,
    pub overlay_surface: ColorValue,
    pub border_width: f64,
}

impl FieldTheme {
    /*
     * Resolves every configured color. `ThemeConfig::validate` already ran at
     * load time; an entry that still fails to parse falls back to the neutral
     * color instead of aborting rendering.
     */
    pub fn from_config(config: &ThemeConfig) -> Self {
        FieldTheme {
            border: resolve("border", &config.border),
            border_focused: resolve("border_focused", &config.border_focused),
            border_error: resolve("border_error", &config.border_error),
            border_disabled: resolve("border_disabled", &config.border_disabled),
            surface: resolve("surface", &config.surface),
            overlay_surface: resolve("overlay_surface", &config.overlay_surface),
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl Default for FieldTheme {
    fn default() -> Self {
        define_default_theme()
    }
}

// Light admin-console theme: grey borders, blue focus ring, red error border.
pub fn define_default_theme() -> FieldTheme {
    FieldTheme::from_config(&ThemeConfig::default())
}

fn resolve(key: &str, hex: &str) -> ColorValue {
    hex_to_rgb(hex).unwrap_or_else(|e| {
        log::warn!("FieldTheme: Color '{key}' ({hex}) is invalid: {e}. Using neutral.");
        ColorValue::NEUTRAL
    })
}
