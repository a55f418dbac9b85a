/*
 * This module provides platform-agnostic styling primitives shared by the
 * presenter and the platform layer. They describe the boxes a field is drawn
 * with (label box, input box, overlay box) without any toolkit specifics, so
 * the platform can render them with its own border and corner primitives.
 */
use crate::core::{ColorValue, CornerRadii};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub corner_radii: CornerRadii,
    pub border_color: ColorValue,
    pub border_width: f64,
    // Suppressed while an overlay hangs off the bottom edge.
    pub bottom_border_visible: bool,
    pub background: ColorValue,
}

/*
 * The two boxes of a field. Both carry the same radius so the seam between
 * label and input disappears.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBoxStyles {
    pub radius: f64,
    pub label: BoxStyle,
    pub input: BoxStyle,
    pub show_required_marker: bool,
}
