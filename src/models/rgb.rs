//! Model a color with red, green and blue channels scaled to a color depth.

use crate::{
    color::{Component, Components},
    error::Result,
    models::Model,
    options::Options,
    util::{self, check_range},
};

colorist_macros::gen_model! {
    /// A color with channels in `[0, color_depth]`.
    pub struct Rgb {
        /// The red channel.
        pub red: Component,
        /// The green channel.
        pub green: Component,
        /// The blue channel.
        pub blue: Component,
    }
}

impl Rgb {
    /// Validate every channel against the configured color depth and return
    /// them scaled to `[0, 1]`.
    pub(crate) fn normalize(&self, options: &Options) -> Result<Components> {
        let depth = options.depth()?;
        for channel in [self.red, self.green, self.blue] {
            check_range(channel, 0.0, depth)?;
        }
        Ok(self.to_components().map(|v| v / depth))
    }

    /// Scale channels in `[0, 1]` to the configured color depth and round
    /// them if requested.
    pub(crate) fn from_normalized(from: Components, options: &Options) -> Result<Self> {
        let depth = options.depth()?;
        Ok(Self::from(from.map(|v| v * depth)).rounded(options.round))
    }

    /// Parse a 3 or 6 digit hex color. The result has a color depth of 255.
    ///
    /// ```
    /// use colorist::Rgb;
    /// assert_eq!(Rgb::from_hex("FF0000").unwrap(), Rgb::new(255.0, 0.0, 0.0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let [red, green, blue] = util::parse_hex(hex)?;
        Ok(Self::new(red.into(), green.into(), blue.into()))
    }

    /// Format the color as a 6 digit upper-case hex string, rescaling from the
    /// configured color depth to 8 bits.
    pub fn to_hex(&self, options: &Options) -> Result<String> {
        let Components(red, green, blue) = self.normalize(options)?.map(|v| (v * 255.0).round());
        Ok(util::format_hex([red as u8, green as u8, blue as u8]))
    }

    /// Rescale every channel from one bit depth to another.
    pub fn change_bit_depth(&self, bits_from: u32, bits_to: u32, round: bool) -> Result<Self> {
        Ok(Self::new(
            util::change_bit_depth(self.red, bits_from, bits_to, round)?,
            util::change_bit_depth(self.green, bits_from, bits_to, round)?,
            util::change_bit_depth(self.blue, bits_from, bits_to, round)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidColorValue;

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgb::from_hex("FF0000").unwrap(), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(Rgb::from_hex("#0f8").unwrap(), Rgb::new(0.0, 255.0, 136.0));
        assert!(matches!(
            Rgb::from_hex("zz"),
            Err(InvalidColorValue::MalformedHex(_))
        ));
    }

    #[test]
    fn hex_formatting() {
        let options = Options::default();
        assert_eq!(Rgb::new(255.0, 136.0, 0.0).to_hex(&options).unwrap(), "FF8800");
        assert_eq!(Rgb::new(0.0, 0.0, 10.4).to_hex(&options).unwrap(), "00000A");
        assert!(Rgb::new(256.0, 0.0, 0.0).to_hex(&options).is_err());
    }

    #[test]
    fn hex_formatting_rescales_depth() {
        let options = Options::default().with_color_depth(1023);
        assert_eq!(Rgb::new(1023.0, 0.0, 511.5).to_hex(&options).unwrap(), "FF0080");
    }

    #[test]
    fn normalize_validates_channels() {
        let options = Options::default();
        assert_eq!(
            Rgb::new(255.0, 0.0, 51.0).normalize(&options).unwrap(),
            Components(1.0, 0.0, 0.2)
        );
        assert!(Rgb::new(-1.0, 0.0, 0.0).normalize(&options).is_err());
        assert!(Rgb::new(0.0, Component::NAN, 0.0).normalize(&options).is_err());
        assert!(Rgb::new(0.0, 0.0, 0.0)
            .normalize(&options.with_color_depth(-255))
            .is_err());
    }

    #[test]
    fn from_normalized_scales_and_rounds() {
        let rgb = Rgb::from_normalized(Components(1.0, 0.5, 0.0), &Options::default()).unwrap();
        assert_eq!(rgb, Rgb::new(255.0, 128.0, 0.0));
        let rgb =
            Rgb::from_normalized(Components(1.0, 0.5, 0.0), &Options::default().unrounded())
                .unwrap();
        assert_eq!(rgb, Rgb::new(255.0, 127.5, 0.0));
    }

    #[test]
    fn bit_depth() {
        let rgb = Rgb::new(255.0, 128.0, 0.0).change_bit_depth(8, 10, true).unwrap();
        assert_eq!(rgb, Rgb::new(1023.0, 514.0, 0.0));
        assert!(Rgb::new(256.0, 0.0, 0.0).change_bit_depth(8, 10, true).is_err());
    }
}
