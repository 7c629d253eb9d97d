//! Model a color with the HSI notation.

use crate::{
    color::{Component, Components},
    convert,
    error::Result,
    models::{Hsl, Hsv, Rgb},
    options::Options,
};

colorist_macros::gen_model! {
    /// A color with a hue in degrees and saturation and intensity as
    /// percentages. Intensity is the mean of the RGB channels.
    pub struct Hsi {
        /// The hue in `[0, 360)`. 360 is accepted as input.
        pub hue: Component,
        /// The saturation in `[0, 100]`.
        pub saturation: Component,
        /// The intensity in `[0, 100]`.
        pub intensity: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSI notation.
    pub fn to_hsi(&self, options: &Options) -> Result<Hsi> {
        let hsi = convert::rgb_to_hsi(&self.normalize(options)?);
        Ok(convert::percent_output(&hsi, options.round).into())
    }
}

impl Hsi {
    fn to_normalized_rgb(&self) -> Result<Components> {
        let hsi = convert::percent_input(self.hue, self.saturation, self.intensity)?;
        Ok(convert::hsi_to_rgb(&hsi))
    }

    /// Convert this color to RGB at the configured color depth. Channels that
    /// would exceed the color depth are capped.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        Rgb::from_normalized(self.to_normalized_rgb()?, options)
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self, options: &Options) -> Result<Hsv> {
        let hsv = convert::rgb_to_hsv(&self.to_normalized_rgb()?);
        Ok(convert::percent_output(&hsv, options.round).into())
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self, options: &Options) -> Result<Hsl> {
        let hsl = convert::rgb_to_hsl(&self.to_normalized_rgb()?);
        Ok(convert::percent_output(&hsl, options.round).into())
    }

    /// Parse a hex color into the HSI notation. Only `options.round` is used.
    pub fn from_hex(hex: &str, options: &Options) -> Result<Self> {
        Rgb::from_hex(hex)?.to_hsi(&options.with_color_depth(255))
    }

    /// Format this color as a 6 digit hex string.
    pub fn to_hex(&self) -> Result<String> {
        let options = Options::default();
        self.to_rgb(&options.unrounded())?.to_hex(&options)
    }
}
