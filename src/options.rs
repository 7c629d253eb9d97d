//! Settings shared by the conversions.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::Result,
    reference::{ReferenceWhite, RgbSpace},
    util::check_range,
};

/// The largest channel value an RGB color may be configured with.
pub const MAX_COLOR_DEPTH: i32 = 65535;

/// Configuration for the conversions that need more than the color itself.
///
/// All fields are optional when deserializing; missing ones take their
/// default.
///
/// ```
/// use colorist::{Options, RgbSpace};
///
/// let options = Options::default()
///     .with_color_depth(1023)
///     .unrounded()
///     .with_color_space(RgbSpace::AdobeRgb1998);
/// assert_eq!(options.color_depth, 1023);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// The maximum value of an RGB channel, `1..=65535`.
    pub color_depth: i32,
    /// Round every channel of an output to the nearest integer.
    pub round: bool,
    /// RGB working space used for the CIE conversions.
    pub color_space: RgbSpace,
    /// Reference white used for the CIE conversions.
    pub reference_white: ReferenceWhite,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_depth: 255,
            round: true,
            color_space: RgbSpace::Srgb,
            reference_white: ReferenceWhite::default(),
        }
    }
}

impl Options {
    /// Set the maximum RGB channel value.
    pub fn with_color_depth(self, color_depth: i32) -> Self {
        Self {
            color_depth,
            ..self
        }
    }

    /// Set whether outputs are rounded.
    pub fn with_round(self, round: bool) -> Self {
        Self { round, ..self }
    }

    /// Keep full precision in outputs.
    pub fn unrounded(self) -> Self {
        self.with_round(false)
    }

    /// Set the RGB working space.
    pub fn with_color_space(self, color_space: RgbSpace) -> Self {
        Self {
            color_space,
            ..self
        }
    }

    /// Set the reference white.
    pub fn with_reference_white(self, reference_white: impl Into<ReferenceWhite>) -> Self {
        Self {
            reference_white: reference_white.into(),
            ..self
        }
    }

    /// The validated color depth.
    pub(crate) fn depth(&self) -> Result<Component> {
        let depth = self.color_depth as Component;
        check_range(depth, 1.0, MAX_COLOR_DEPTH as Component)?;
        Ok(depth)
    }
}
