//! Color schemes built by rotating the hue of a color.
//!
//! Every function accepts anything convertible to a [`HexInput`] and returns
//! canonical hex strings, starting with the input color itself.

use crate::{
    blend::hue_shift,
    color::Component,
    error::Result,
    models::Hsv,
    options::Options,
    util::{check_range, color_to_hex_string, HexInput},
};

/// The default hue offset of [`analogous`].
pub const DEFAULT_ANALOGOUS_ANGLE: Component = 30.0;
/// The default hue offset of [`complement_split`].
pub const DEFAULT_SPLIT_ANGLE: Component = 150.0;
/// The default hue offset of [`tetradic`].
pub const DEFAULT_TETRADIC_ANGLE: Component = 45.0;

fn to_hsv<'a>(color: impl Into<HexInput<'a>>) -> Result<(String, Hsv)> {
    let hex = color_to_hex_string(color)?;
    let hsv = Hsv::from_hex(&hex, &Options::default())?;
    Ok((hex, hsv))
}

fn rotate(hsv: &Hsv, angle: Component) -> Result<String> {
    Hsv::new(hue_shift(hsv.hue, angle)?, hsv.saturation, hsv.value).to_hex()
}

/// The color on the opposite side of the hue circle.
///
/// ```
/// assert_eq!(colorist::harmony::complement("FF0000").unwrap(), "00FFFF");
/// ```
pub fn complement<'a>(color: impl Into<HexInput<'a>>) -> Result<String> {
    let (_, hsv) = to_hsv(color)?;
    rotate(&hsv, 180.0)
}

/// The color followed by its neighbours `angle` degrees either side of it.
/// `angle` must lie in `[0, 360]`.
pub fn analogous<'a>(color: impl Into<HexInput<'a>>, angle: Component) -> Result<[String; 3]> {
    check_range(angle, 0.0, 360.0)?;
    let (hex, hsv) = to_hsv(color)?;
    Ok([hex, rotate(&hsv, angle)?, rotate(&hsv, -angle)?])
}

/// Three colors evenly spaced around the hue circle.
pub fn triadic<'a>(color: impl Into<HexInput<'a>>) -> Result<[String; 3]> {
    analogous(color, 120.0)
}

/// The color and the two neighbours of its complement, which sit `angle`
/// degrees away from the color itself.
pub fn complement_split<'a>(
    color: impl Into<HexInput<'a>>,
    angle: Component,
) -> Result<[String; 3]> {
    analogous(color, angle)
}

/// Two complementary pairs, the second rotated `angle` degrees from the
/// first. `angle` must lie in `[0, 360]`.
pub fn tetradic<'a>(color: impl Into<HexInput<'a>>, angle: Component) -> Result<[String; 4]> {
    check_range(angle, 0.0, 360.0)?;
    let (hex, hsv) = to_hsv(color)?;
    Ok([
        hex,
        rotate(&hsv, angle)?,
        rotate(&hsv, angle + 180.0)?,
        rotate(&hsv, 180.0)?,
    ])
}

/// Four colors evenly spaced around the hue circle.
pub fn square<'a>(color: impl Into<HexInput<'a>>) -> Result<[String; 4]> {
    tetradic(color, 90.0)
}
