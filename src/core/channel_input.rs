/*
 * Manual numeric entry for the color picker's channel fields (R/G/B, H, S/V/L
 * and alpha). Text typed by the user is parsed leniently: anything that is not
 * a number becomes 0, and numbers outside a channel's domain are clamped, so a
 * keystroke is never rejected. The clamped value is then fed back through the
 * matching inverse conversion in `color`.
 *
 * Domains: R/G/B 0..=255, H 0..=360 degrees, S/V/L/A 0..=100 percent.
 */
use super::color::{self, ColorValue, Hsl, Hsv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
    Lightness,
    Alpha,
}

impl ColorChannel {
    pub fn domain(self) -> (f64, f64) {
        match self {
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => (0.0, 255.0),
            ColorChannel::Hue => (0.0, 360.0),
            ColorChannel::Saturation
            | ColorChannel::Value
            | ColorChannel::Lightness
            | ColorChannel::Alpha => (0.0, 100.0),
        }
    }
}

/*
 * Parses channel text and clamps it into the channel's domain. Non-numeric or
 * non-finite input yields 0. RGB channels are rounded to whole numbers.
 */
pub fn parse_channel_text(channel: ColorChannel, text: &str) -> f64 {
    let (min, max) = channel.domain();
    let parsed = match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::debug!("ChannelInput: '{text}' is not a number for {channel:?}; using 0.");
            0.0
        }
    };
    let clamped = parsed.clamp(min, max);
    if clamped != parsed {
        log::debug!("ChannelInput: Clamped {parsed} into [{min}, {max}] for {channel:?}.");
    }
    match channel {
        ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => clamped.round(),
        _ => clamped,
    }
}

/*
 * Applies one manual channel edit to `current`, returning the new color.
 * `hsv_hint` is the picker's working HSV, used for S/V/H edits so that hue and
 * saturation survive when the current color is achromatic.
 */
pub fn apply_channel_edit(
    current: ColorValue,
    hsv_hint: Hsv,
    channel: ColorChannel,
    text: &str,
) -> (ColorValue, Hsv) {
    let value = parse_channel_text(channel, text);
    match channel {
        ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => {
            let byte = value as u8;
            let mut next = current;
            match channel {
                ColorChannel::Red => next.r = byte,
                ColorChannel::Green => next.g = byte,
                _ => next.b = byte,
            }
            let mut hsv = color::rgb_to_hsv(next);
            if hsv.s == 0.0 {
                hsv.h = hsv_hint.h;
            }
            (next, hsv)
        }
        ColorChannel::Hue | ColorChannel::Saturation | ColorChannel::Value => {
            let mut hsv = hsv_hint;
            match channel {
                ColorChannel::Hue => hsv.h = color::normalize_hue(value),
                ColorChannel::Saturation => hsv.s = value / 100.0,
                _ => hsv.v = value / 100.0,
            }
            hsv.a = current.a;
            (color::hsv_to_rgb(hsv), hsv)
        }
        ColorChannel::Lightness => {
            let mut hsl: Hsl = color::rgb_to_hsl(current);
            hsl.l = value / 100.0;
            // Keep the working hue when the current color carries none.
            if hsl.s == 0.0 {
                hsl.h = hsv_hint.h;
            }
            let next = color::hsl_to_rgb(hsl);
            let mut hsv = color::rgb_to_hsv(next);
            if hsv.s == 0.0 {
                hsv.h = hsv_hint.h;
            }
            (next, hsv)
        }
        ColorChannel::Alpha => {
            let mut next = current;
            next.a = value / 100.0;
            let mut hsv = hsv_hint;
            hsv.a = next.a;
            (next, hsv)
        }
    }
}
