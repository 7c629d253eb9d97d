//! Model a color with the HSV notation.

use crate::{
    color::{Component, Components},
    convert,
    error::Result,
    models::{Hsi, Hsl, Model, Rgb},
    options::Options,
};

colorist_macros::gen_model! {
    /// A color with a hue in degrees and saturation and value as percentages.
    pub struct Hsv {
        /// The hue in `[0, 360)`. 360 is accepted as input.
        pub hue: Component,
        /// The saturation in `[0, 100]`.
        pub saturation: Component,
        /// The value in `[0, 100]`.
        pub value: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSV notation.
    ///
    /// ```
    /// use colorist::{Hsv, Options, Rgb};
    /// let hsv = Rgb::new(255.0, 0.0, 0.0).to_hsv(&Options::default()).unwrap();
    /// assert_eq!(hsv, Hsv::new(0.0, 100.0, 100.0));
    /// ```
    pub fn to_hsv(&self, options: &Options) -> Result<Hsv> {
        let hsv = convert::rgb_to_hsv(&self.normalize(options)?);
        Ok(convert::percent_output(&hsv, options.round).into())
    }
}

impl Hsv {
    fn normalize(&self) -> Result<Components> {
        convert::percent_input(self.hue, self.saturation, self.value)
    }

    /// Convert this color to RGB at the configured color depth.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        Rgb::from_normalized(convert::hsv_to_rgb(&self.normalize()?), options)
    }

    /// Convert this color to the HSL notation. The hue is carried over.
    pub fn to_hsl(&self, options: &Options) -> Result<Hsl> {
        let hsv = self.normalize()?;
        let Components(_, saturation, lightness) =
            convert::rgb_to_hsl(&convert::hsv_to_rgb(&hsv));
        Ok(convert::percent_output(&Components(hsv.0, saturation, lightness), options.round).into())
    }

    /// Convert this color to the HSI notation.
    pub fn to_hsi(&self, options: &Options) -> Result<Hsi> {
        let hsi = convert::rgb_to_hsi(&convert::hsv_to_rgb(&self.normalize()?));
        Ok(convert::percent_output(&hsi, options.round).into())
    }

    /// Parse a hex color into the HSV notation. Only `options.round` is used.
    pub fn from_hex(hex: &str, options: &Options) -> Result<Self> {
        Rgb::from_hex(hex)?.to_hsv(&options.with_color_depth(255))
    }

    /// Format this color as a 6 digit hex string.
    pub fn to_hex(&self) -> Result<String> {
        let options = Options::default();
        self.to_rgb(&options.unrounded())?.to_hex(&options)
    }
}
