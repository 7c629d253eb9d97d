//! Validation, range scaling and hex helpers shared by every conversion.

use crate::{
    color::{round_if, Component},
    error::{InvalidColorValue, Result},
};

/// Fail unless `value` lies within `[low, high]`.
pub fn check_range(value: Component, low: Component, high: Component) -> Result<()> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(InvalidColorValue::InvalidRange { low, high });
    }
    // NaN fails both comparisons, so test for containment instead.
    if !(low..=high).contains(&value) {
        return Err(InvalidColorValue::OutOfRange { value, low, high });
    }
    Ok(())
}

/// Fail unless `value` is a finite number.
pub fn check_finite(value: Component) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidColorValue::NotANumber(value))
    }
}

/// Map `value` from `[min_from, max_from]` onto `[min_to, max_to]`.
///
/// The value must lie in the source range. The target range may be reversed.
pub fn scale_range(
    value: Component,
    min_from: Component,
    max_from: Component,
    min_to: Component,
    max_to: Component,
    round: bool,
) -> Result<Component> {
    check_range(value, min_from, max_from)?;
    if min_from == max_from {
        return Err(InvalidColorValue::InvalidRange {
            low: min_from,
            high: max_from,
        });
    }
    check_finite(min_to)?;
    check_finite(max_to)?;

    let scaled = (value - min_from) * (max_to - min_to) / (max_from - min_from) + min_to;
    Ok(round_if(scaled, round))
}

/// The largest value representable with `bits` bits.
pub(crate) fn max_for_bits(bits: u32) -> Result<Component> {
    check_range(bits as Component, 1.0, 32.0)?;
    Ok(((1_u64 << bits) - 1) as Component)
}

/// Rescale `value` from a `bits_from` bit channel to a `bits_to` bit channel.
///
/// ```
/// use colorist::util::change_bit_depth;
/// assert_eq!(change_bit_depth(255.0, 8, 10, true).unwrap(), 1023.0);
/// ```
pub fn change_bit_depth(value: Component, bits_from: u32, bits_to: u32, round: bool) -> Result<Component> {
    let max_from = max_for_bits(bits_from)?;
    let max_to = max_for_bits(bits_to)?;
    scale_range(value, 0.0, max_from, 0.0, max_to, round)
}

/// Strip an optional leading `#` and check that only hex digits remain.
fn hex_digits(hex: &str) -> Result<&str> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        log::debug!("rejecting hex color {hex:?}");
        return Err(InvalidColorValue::MalformedHex(hex.to_string()));
    }
    Ok(digits)
}

/// Expand a 3 digit shorthand hex color to 6 digits by doubling each digit.
/// 6 digit input is returned unchanged, without a leading `#`.
pub fn expand_hex(hex: &str) -> Result<String> {
    let digits = hex_digits(hex)?;
    match digits.len() {
        6 => Ok(digits.to_string()),
        3 => Ok(digits.chars().flat_map(|c| [c, c]).collect()),
        _ => Err(InvalidColorValue::MalformedHex(hex.to_string())),
    }
}

/// Parse a 3 or 6 digit hex color into its 8-bit channels.
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let value = u32::from_str_radix(&expand_hex(hex)?, 16)
        .map_err(|_| InvalidColorValue::MalformedHex(hex.to_string()))?;
    let [_, r, g, b] = value.to_be_bytes();
    Ok([r, g, b])
}

/// Format 8-bit channels as a canonical 6 digit upper-case hex string.
pub fn format_hex(channels: [u8; 3]) -> String {
    let [r, g, b] = channels;
    format!("{r:02X}{g:02X}{b:02X}")
}

/// The different shapes a 24-bit color can be given in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HexInput<'a> {
    /// A hex string, `RRGGBB` or `RGB`, optionally prefixed with `#`.
    Str(&'a str),
    /// A packed `0xRRGGBB` integer.
    Int(i64),
    /// Separate red, green and blue channels, each `0..=255`.
    Channels([i64; 3]),
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for HexInput<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for HexInput<'_> {
    fn from(value: u32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<[i64; 3]> for HexInput<'_> {
    fn from(value: [i64; 3]) -> Self {
        Self::Channels(value)
    }
}

impl From<[u8; 3]> for HexInput<'_> {
    fn from(value: [u8; 3]) -> Self {
        Self::Channels(value.map(i64::from))
    }
}

/// Normalize any [`HexInput`] to a packed `0xRRGGBB` value.
pub fn color_to_hex_int<'a>(color: impl Into<HexInput<'a>>) -> Result<u32> {
    let value = match color.into() {
        HexInput::Str(hex) => {
            let [r, g, b] = parse_hex(hex)?;
            return Ok(u32::from_be_bytes([0, r, g, b]));
        }
        HexInput::Int(value) => value,
        HexInput::Channels(channels) => {
            for channel in channels {
                check_range(channel as Component, 0.0, 255.0)?;
            }
            let [r, g, b] = channels;
            (r << 16) | (g << 8) | b
        }
    };
    check_range(value as Component, 0.0, 0xFF_FFFF as Component)?;
    Ok(value as u32)
}

/// Normalize any [`HexInput`] to a canonical 6 digit upper-case hex string.
pub fn color_to_hex_string<'a>(color: impl Into<HexInput<'a>>) -> Result<String> {
    let [_, r, g, b] = color_to_hex_int(color)?.to_be_bytes();
    Ok(format_hex([r, g, b]))
}
