/*
 * The color picker: a saturation/value plane, a hue slider, an alpha slider,
 * a hex text box and numeric boxes for every channel. The caller owns an RGBA
 * `ColorValue`; the adapter keeps a working HSV alongside it because RGB
 * forgets hue and saturation for greys, and dragging the value slider down to
 * black and back up must not reset the hue.
 */
use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::app_logic::overlay_controller::OverlayController;
use crate::core::{self, ColorValue, Hsv, apply_channel_edit, hex_to_rgb, rgb_to_hex};
use crate::platform_layer::{AdapterInput, ColorEdit, OverlayContent};

pub struct ColorAdapter {
    overlay: OverlayController,
    hsv: Hsv,
}

impl ColorAdapter {
    pub fn new(initial: ColorValue) -> Self {
        ColorAdapter {
            overlay: OverlayController::new(),
            hsv: core::rgb_to_hsv(initial),
        }
    }

    pub fn working_hsv(&self) -> Hsv {
        self.hsv
    }

    // Adopts `color` unless the working HSV already describes it.
    fn sync_from(&mut self, color: ColorValue) {
        let current = core::hsv_to_rgb(self.hsv);
        if (current.r, current.g, current.b) != (color.r, color.g, color.b) {
            let mut hsv = core::rgb_to_hsv(color);
            if hsv.s == 0.0 {
                hsv.h = self.hsv.h;
            }
            self.hsv = hsv;
        }
        self.hsv.a = color.a;
    }

    fn apply_edit(&mut self, edit: ColorEdit, current: ColorValue) -> Option<ColorValue> {
        match edit {
            ColorEdit::Hex(text) => match hex_to_rgb(&text) {
                Ok(color) => {
                    self.sync_from(color);
                    Some(color)
                }
                Err(e) => {
                    log::debug!("ColorAdapter: Keeping {current}, hex '{text}' rejected: {e}");
                    None
                }
            },
            ColorEdit::Channel { channel, text } => {
                let (color, hsv) = apply_channel_edit(current, self.hsv, channel, &text);
                self.hsv = hsv;
                Some(color)
            }
            ColorEdit::SaturationValue { saturation, value } => {
                self.hsv.s = saturation.clamp(0.0, 1.0);
                self.hsv.v = value.clamp(0.0, 1.0);
                self.hsv.a = current.a;
                Some(core::hsv_to_rgb(self.hsv))
            }
            ColorEdit::Hue(hue) => {
                self.hsv.h = core::color::normalize_hue(hue);
                self.hsv.a = current.a;
                Some(core::hsv_to_rgb(self.hsv))
            }
            ColorEdit::Alpha(alpha) => {
                let alpha = if alpha.is_finite() {
                    alpha.clamp(0.0, 1.0)
                } else {
                    current.a
                };
                self.hsv.a = alpha;
                Some(ColorValue { a: alpha, ..current })
            }
        }
    }
}

impl FieldAdapter for ColorAdapter {
    type Value = ColorValue;

    fn kind(&self) -> &'static str {
        "ColorAdapter"
    }

    fn overlay(&self) -> Option<&OverlayController> {
        Some(&self.overlay)
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        Some(&mut self.overlay)
    }

    fn before_open(&mut self, value: &ColorValue) {
        self.sync_from(*value);
    }

    fn value_assigned(&mut self, value: &ColorValue) {
        self.sync_from(*value);
    }

    fn overlay_content(&self, value: &ColorValue) -> Option<OverlayContent> {
        Some(OverlayContent::ColorPanel {
            color: *value,
            hsv: self.hsv,
            hex: rgb_to_hex(*value),
        })
    }

    // Edits never close the picker; every accepted edit is committed at once.
    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, ColorValue>,
        outbox: &mut Outbox<ColorValue>,
    ) {
        let AdapterInput::ColorEdited(edit) = input else {
            log::trace!("ColorAdapter: Ignoring {input:?}.");
            return;
        };
        match self.apply_edit(edit, *props.value) {
            Some(next) => {
                outbox.push(AdapterMessage::Changed(next));
                self.refresh_content(&next, outbox);
            }
            None => self.refresh_content(props.value, outbox),
        }
    }
}
