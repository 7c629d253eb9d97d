//! Model a color with the subtractive CMYK notation.

use serde::{Deserialize, Serialize};

use crate::{
    color::{round_if, Component},
    error::Result,
    models::{Model, Rgb},
    options::Options,
    util::check_range,
};

/// A color as cyan, magenta, yellow and key (black) ink percentages in
/// `[0, 100]`.
///
/// CMYK has four channels so it is not a [`Model`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    /// The cyan channel.
    pub cyan: Component,
    /// The magenta channel.
    pub magenta: Component,
    /// The yellow channel.
    pub yellow: Component,
    /// The key (black) channel.
    pub key: Component,
}

impl Cmyk {
    /// Create a new color from its four channels.
    pub const fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Return a copy with every channel rounded when `round` is set.
    pub fn rounded(&self, round: bool) -> Self {
        Self::new(
            round_if(self.cyan, round),
            round_if(self.magenta, round),
            round_if(self.yellow, round),
            round_if(self.key, round),
        )
    }

    /// Convert this color to RGB at the configured color depth.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        let depth = options.depth()?;
        for channel in [self.cyan, self.magenta, self.yellow, self.key] {
            check_range(channel, 0.0, 100.0)?;
        }
        let white = 1.0 - self.key / 100.0;
        let channel = |ink: Component| (1.0 - ink / 100.0) * white * depth;
        Ok(Rgb::new(channel(self.cyan), channel(self.magenta), channel(self.yellow))
            .rounded(options.round))
    }
}

impl From<[Component; 4]> for Cmyk {
    fn from(value: [Component; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Cmyk> for [Component; 4] {
    fn from(value: Cmyk) -> Self {
        [value.cyan, value.magenta, value.yellow, value.key]
    }
}

impl Rgb {
    /// Convert this color to the CMYK notation. Black is `(0, 0, 0, 100)`.
    ///
    /// ```
    /// use colorist::{Cmyk, Options, Rgb};
    /// let cmyk = Rgb::new(255.0, 0.0, 0.0).to_cmyk(&Options::default()).unwrap();
    /// assert_eq!(cmyk, Cmyk::new(0.0, 100.0, 100.0, 0.0));
    /// ```
    pub fn to_cmyk(&self, options: &Options) -> Result<Cmyk> {
        let rgb = self.normalize(options)?;
        let key = 1.0 - rgb.max();
        if key >= 1.0 {
            return Ok(Cmyk::new(0.0, 0.0, 0.0, 100.0));
        }
        let ink = |v: Component| (1.0 - v - key) / (1.0 - key) * 100.0;
        Ok(Cmyk::new(ink(rgb.0), ink(rgb.1), ink(rgb.2), key * 100.0).rounded(options.round))
    }
}
