/*
 * This module describes how a field is drawn. It turns the field's `FieldSpec`, its
 * current radius and its visual state into the `BoxStyle`s of the label box,
 * the input box and the overlay box, which the platform layer renders.
 *
 * All three boxes take the same radius. The label box owns the left corners,
 * the input box the right ones; while an overlay is open both drop their
 * bottom corners and bottom border so field and overlay read as one shape,
 * and the overlay carries the field radius on its bottom corners.
 */
pub mod theme;

use crate::core::{CornerRadii, FieldSpec, FieldVisualState};
use crate::platform_layer::{BoxStyle, FieldBoxStyles};
use theme::FieldTheme;

pub fn build_field_box_styles(
    spec: &FieldSpec,
    radius: f64,
    state: FieldVisualState,
    theme: &FieldTheme,
) -> FieldBoxStyles {
    let border_color = if spec.disabled {
        theme.border_disabled
    } else if state.show_error {
        theme.border_error
    } else if state.focused || state.overlay_open {
        theme.border_focused
    } else {
        theme.border
    };

    let mut label_radii = CornerRadii {
        top_left: radius,
        bottom_left: radius,
        ..CornerRadii::default()
    };
    let mut input_radii = CornerRadii {
        top_right: radius,
        bottom_right: radius,
        ..CornerRadii::default()
    };
    if state.overlay_open {
        label_radii = label_radii.without_bottom();
        input_radii = input_radii.without_bottom();
    }

    let box_style = |corner_radii: CornerRadii| BoxStyle {
        corner_radii,
        border_color,
        border_width: theme.border_width,
        bottom_border_visible: !state.overlay_open,
        background: theme.surface,
    };

    FieldBoxStyles {
        radius,
        label: box_style(label_radii),
        input: box_style(input_radii),
        show_required_marker: spec.required,
    }
}

// The overlay's top edge is square; its bottom corners match the field.
pub fn build_overlay_box_style(field_radius: f64, theme: &FieldTheme) -> BoxStyle {
    BoxStyle {
        corner_radii: CornerRadii::for_overlay(field_radius),
        border_color: theme.border_focused,
        border_width: theme.border_width,
        bottom_border_visible: true,
        background: theme.overlay_surface,
    }
}
