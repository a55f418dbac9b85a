/*
 * Geometry for attaching an overlay panel to a field: the shared border radius
 * (label box, input box and overlay all render with the same number) and the
 * overlay rectangle derived from the input's measured on-screen rectangle.
 *
 * A `MeasuredRect` is produced fresh for every open request and never cached,
 * because layout may have changed between two opens.
 */

// Fixed radius for `BorderStyle::Light`.
pub const LIGHT_RADIUS: f64 = 8.0;

// Radius used for `BorderStyle::Full` before the wrapper height is known.
pub const UNMEASURED_RADIUS: f64 = 40.0;

// Border width assumed when the measured node excludes its own border box.
pub const ASSUMED_BORDER_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Light,
    Full,
}

// Absolute screen rectangle of a node, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MeasuredRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        MeasuredRect { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/*
 * Which node the rectangle came from. `Container` is the bordered wrapper the
 * field container hands to its adapter; `InnerFallback` is the adapter's own
 * inner element, which excludes the wrapper's border and needs compensation.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSource {
    Container,
    InnerFallback,
}

// Where the floating panel is placed. Whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(radius: f64) -> Self {
        CornerRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /*
     * The overlay fuses with the input's bottom edge: square top corners,
     * bottom corners equal to the closed field's radius.
     */
    pub fn for_overlay(field_radius: f64) -> Self {
        CornerRadii {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: field_radius,
            bottom_left: field_radius,
        }
    }

    pub fn without_bottom(self) -> Self {
        CornerRadii {
            bottom_right: 0.0,
            bottom_left: 0.0,
            ..self
        }
    }
}

// Tunables for radius and overlay placement. Defaults match the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    pub light_radius: f64,
    pub unmeasured_radius: f64,
    pub assumed_border_width: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            light_radius: LIGHT_RADIUS,
            unmeasured_radius: UNMEASURED_RADIUS,
            assumed_border_width: ASSUMED_BORDER_WIDTH,
        }
    }
}

/*
 * Radius for a field. `Full` is a pill (half the wrapper height) and must be
 * recomputed on every layout pass since height follows content; an unknown or
 * degenerate height falls back to `unmeasured_radius` rather than 0 so the
 * first frame never shows square corners. `Light` is constant.
 */
pub fn compute_radius(
    border_style: BorderStyle,
    element_height: Option<f64>,
    config: &GeometryConfig,
) -> f64 {
    match border_style {
        BorderStyle::Light => config.light_radius,
        BorderStyle::Full => match element_height {
            Some(height) if height.is_finite() && height > 0.0 => height / 2.0,
            _ => config.unmeasured_radius,
        },
    }
}

/*
 * Places the overlay directly under the measured input.
 *
 * `y = round(pageY + height - 1) - 1`: one pixel of vertical overlap so the
 * borders fuse, one more for the border counted twice when the measured box
 * includes its own border. When the inner element was measured instead of the
 * bordered wrapper, `x` moves left by the border width and `width` grows by
 * twice the border width.
 */
pub fn compute_overlay_layout(
    rect: &MeasuredRect,
    source: MeasureSource,
    config: &GeometryConfig,
) -> OverlayLayout {
    let mut x = rect.x.round();
    let mut width = rect.width.round();
    let y = (rect.y + rect.height - 1.0).round() - 1.0;

    if source == MeasureSource::InnerFallback {
        x -= config.assumed_border_width;
        width += 2.0 * config.assumed_border_width;
    }

    OverlayLayout { x, y, width }
}
