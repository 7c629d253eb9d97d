//! Hue rotation and blending between two colors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    color::Component,
    error::{InvalidColorValue, Result},
    math::{lerp, normalize_hue},
    models::{Hsv, Rgb},
    options::Options,
    reference::normalize_name,
    util::{check_finite, check_range},
};

/// Rotate `hue` by `angle` degrees and wrap the result into `[0, 360)`. The
/// angle may be negative or larger than a full turn.
///
/// ```
/// assert_eq!(colorist::blend::hue_shift(350.0, 20.0).unwrap(), 10.0);
/// ```
pub fn hue_shift(hue: Component, angle: Component) -> Result<Component> {
    check_range(hue, 0.0, 360.0)?;
    check_finite(angle)?;
    Ok(normalize_hue(hue + angle))
}

/// Interpolate linearly between two 8-bit RGB colors. An `amount` of 0
/// returns `from` and 1 returns `to`. The result is not rounded.
pub fn blend_rgb(from: &Rgb, to: &Rgb, amount: Component) -> Result<Rgb> {
    for channel in [from.red, from.green, from.blue, to.red, to.green, to.blue] {
        check_range(channel, 0.0, 255.0)?;
    }
    check_range(amount, 0.0, 1.0)?;

    Ok(Rgb::new(
        lerp(from.red, to.red, amount),
        lerp(from.green, to.green, amount),
        lerp(from.blue, to.blue, amount),
    ))
}

/// Interpolate between two HSV colors, taking the shorter way around the hue
/// circle. An `amount` of 0 returns `from` and 1 returns `to`. The result is
/// not rounded.
pub fn blend_hsv(from: &Hsv, to: &Hsv, amount: Component) -> Result<Hsv> {
    for hsv in [from, to] {
        check_range(hsv.hue, 0.0, 360.0)?;
        check_range(hsv.saturation, 0.0, 100.0)?;
        check_range(hsv.value, 0.0, 100.0)?;
    }
    check_range(amount, 0.0, 1.0)?;

    if amount == 0.0 {
        return Ok(*from);
    }
    if amount == 1.0 {
        return Ok(*to);
    }

    let mut arc = to.hue - from.hue;
    if arc > 180.0 {
        arc -= 360.0;
    } else if arc < -180.0 {
        arc += 360.0;
    }

    Ok(Hsv::new(
        normalize_hue(from.hue + arc * amount),
        lerp(from.saturation, to.saturation, amount),
        lerp(from.value, to.value, amount),
    ))
}

/// How [`blend`] interprets and interpolates its colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Hex strings, blended per RGB channel.
    Hex,
    /// RGB colors, blended per channel.
    Rgb,
    /// HSV colors, blended along the shorter hue arc.
    Hsv,
}

impl BlendMode {
    /// Every blend mode.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsv];

    /// The lower-case name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| {
                log::debug!("no blend mode named {s:?}");
                InvalidColorValue::UnknownBlendMode(s.to_string())
            })
    }
}

impl Serialize for BlendMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BlendMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// A color handed to or returned from [`blend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BlendColor {
    /// A hex string.
    Hex(String),
    /// An 8-bit RGB color.
    Rgb(Rgb),
    /// An HSV color.
    Hsv(Hsv),
}

impl From<&str> for BlendColor {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_string())
    }
}

impl From<String> for BlendColor {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgb> for BlendColor {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsv> for BlendColor {
    fn from(value: Hsv) -> Self {
        Self::Hsv(value)
    }
}

/// Blend two colors of the kind `mode` expects. Hex colors are blended in
/// RGB and formatted back to hex.
///
/// ```
/// use colorist::blend::{blend, BlendColor, BlendMode};
/// let mixed = blend(&"000000".into(), &"FFFFFF".into(), 0.5, BlendMode::Hex).unwrap();
/// assert_eq!(mixed, BlendColor::Hex("808080".to_string()));
/// ```
pub fn blend(
    from: &BlendColor,
    to: &BlendColor,
    amount: Component,
    mode: BlendMode,
) -> Result<BlendColor> {
    match (mode, from, to) {
        (BlendMode::Hex, BlendColor::Hex(from), BlendColor::Hex(to)) => {
            let rgb = blend_rgb(&Rgb::from_hex(from)?, &Rgb::from_hex(to)?, amount)?;
            Ok(BlendColor::Hex(rgb.to_hex(&Options::default())?))
        }
        (BlendMode::Rgb, BlendColor::Rgb(from), BlendColor::Rgb(to)) => {
            Ok(BlendColor::Rgb(blend_rgb(from, to, amount)?))
        }
        (BlendMode::Hsv, BlendColor::Hsv(from), BlendColor::Hsv(to)) => {
            Ok(BlendColor::Hsv(blend_hsv(from, to, amount)?))
        }
        _ => Err(InvalidColorValue::BlendModeMismatch(mode.name())),
    }
}
