//! Conversions between normalized RGB and the cylindrical models.
//!
//! Everything here works on [`Components`] with RGB channels, saturation,
//! value, lightness and intensity in `[0, 1]` and hue in degrees. The model
//! types validate their inputs and scale into and out of this form.

use crate::{
    color::{round_if, Component, Components},
    error::Result,
    math::normalize_hue,
    util::check_range,
};

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values. The hue is 0 for achromatic colors.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = from.max();
    let min = from.min();

    let chroma = max - min;

    let hue = if chroma != 0.0 {
        60.0 * if max == red {
            (green - blue) / chroma
        } else if max == green {
            (blue - red) / chroma + 2.0
        } else {
            (red - green) / chroma + 4.0
        }
    } else {
        0.0
    };

    (normalize_hue(hue), min, max)
}

/// Place chroma and the second largest component in the RGB channels for the
/// 60 degree sector `hue` falls in, then add `m` to every channel.
fn from_sector(hue: Component, chroma: Component, x: Component, m: Component) -> Components {
    let (red, green, blue) = match (normalize_hue(hue) / 60.0).floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Components(red + m, green + m, blue + m)
}

/// `1 - |(h / 60) mod 2 - 1|`, the share of chroma carried by the second
/// largest channel.
fn second_share(hue: Component) -> Component {
    1.0 - ((normalize_hue(hue) / 60.0) % 2.0 - 1.0).abs()
}

/// Convert from RGB notation to HSV notation.
pub fn rgb_to_hsv(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

    Components(hue, saturation, max)
}

/// Convert from HSV notation to RGB notation.
pub fn hsv_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, value) = *from;

    let chroma = value * saturation;
    from_sector(hue, chroma, chroma * second_share(hue), value - chroma)
}

/// Convert from RGB notation to HSL notation.
pub fn rgb_to_hsl(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let lightness = max - (max - min) / 2.0;
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    Components(hue, saturation, lightness)
}

/// Convert from HSL notation to RGB notation.
pub fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    from_sector(
        hue,
        chroma,
        chroma * second_share(hue),
        lightness - chroma / 2.0,
    )
}

/// Convert from RGB notation to HSI notation.
pub fn rgb_to_hsi(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let intensity = (from.0 + from.1 + from.2) / 3.0;
    let saturation = if max - min == 0.0 || intensity == 0.0 {
        0.0
    } else {
        1.0 - min / intensity
    };

    Components(hue, saturation, intensity)
}

/// Convert from HSI notation to RGB notation. Channels are capped at 1.
pub fn hsi_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, intensity) = *from;

    let z = second_share(hue);
    let chroma = 3.0 * intensity * saturation / (1.0 + z);
    from_sector(hue, chroma, chroma * z, intensity * (1.0 - saturation)).map(|v| v.min(1.0))
}

/// Validate a cylindrical color given as a hue in `[0, 360]` and two
/// percentages, returning it with the percentages as fractions and a hue of
/// 360 folded to 0.
pub fn percent_input(hue: Component, first: Component, second: Component) -> Result<Components> {
    check_range(hue, 0.0, 360.0)?;
    check_range(first, 0.0, 100.0)?;
    check_range(second, 0.0, 100.0)?;
    Ok(Components(normalize_hue(hue), first / 100.0, second / 100.0))
}

/// Scale the fractions of a cylindrical color to percentages and round. The
/// hue is wrapped again after rounding so that it never reaches 360.
pub fn percent_output(from: &Components, round: bool) -> Components {
    let Components(hue, first, second) = *from;
    Components(
        normalize_hue(round_if(hue, round)),
        round_if(first * 100.0, round),
        round_if(second * 100.0, round),
    )
}
