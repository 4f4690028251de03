//! Sizing and styling constants plus the built-in default palette.

/// Built-in colors, always shown after the user's own. Never persisted,
/// never removable.
pub const DEFAULT_COLORS: &[&str] = &[
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
];

/// Swatch square edge length
pub const SWATCH_SIZE: f32 = 48.0;

/// Border radius for swatches and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between widget elements
pub const GAP: f32 = 8.0;

/// Padding around the whole widget
pub const PADDING: f32 = 8.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Filter check-square edge length
pub const CHECK_SIZE: f32 = 12.0;
