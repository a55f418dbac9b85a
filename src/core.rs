/*
 * This module consolidates the core, platform-agnostic logic of the field
 * framework: the color model engine and manual channel entry, the radius and
 * overlay geometry, the explicit overlay state machine, the date picker's month
 * grid, dropdown search filtering, the field description model, and
 * configuration loading.
 * Nothing in here touches a UI toolkit; the presenter in `app_logic` drives it.
 */
pub mod channel_input;
pub mod color;
pub mod config;
pub mod date_grid;
pub mod geometry;
pub mod models;
pub mod overlay_state;
pub mod path_utils;
pub mod search_filter;

pub use channel_input::{ColorChannel, apply_channel_edit, parse_channel_text};
pub use color::{
    ColorError, ColorValue, Hsl, Hsv, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsv,
};
pub use config::{
    ConfigError, ConfigManagerOperations, CoreConfigManager, FieldConfig, ThemeConfig,
};
pub use date_grid::{CalendarGrid, CalendarMonth, DateBounds, DayCell, WeekStart};
pub use geometry::{
    BorderStyle, CornerRadii, GeometryConfig, MeasureSource, MeasuredRect, OverlayLayout,
    compute_overlay_layout, compute_radius,
};
pub use models::{FieldSpec, FieldVisualState};
pub use overlay_state::{OverlayState, RequestId};
pub use search_filter::{SearchFilter, filter_indexes};
