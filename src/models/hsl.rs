//! Model a color with the HSL notation.

use crate::{
    color::{Component, Components},
    convert,
    error::Result,
    models::{Hsi, Hsv, Rgb},
    options::Options,
};

colorist_macros::gen_model! {
    /// A color with a hue in degrees and saturation and lightness as
    /// percentages.
    pub struct Hsl {
        /// The hue in `[0, 360)`. 360 is accepted as input.
        pub hue: Component,
        /// The saturation in `[0, 100]`.
        pub saturation: Component,
        /// The lightness in `[0, 100]`.
        pub lightness: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self, options: &Options) -> Result<Hsl> {
        let hsl = convert::rgb_to_hsl(&self.normalize(options)?);
        Ok(convert::percent_output(&hsl, options.round).into())
    }
}

impl Hsl {
    fn normalize(&self) -> Result<Components> {
        convert::percent_input(self.hue, self.saturation, self.lightness)
    }

    /// Convert this color to RGB at the configured color depth.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        Rgb::from_normalized(convert::hsl_to_rgb(&self.normalize()?), options)
    }

    /// Convert this color to the HSV notation. The hue is carried over.
    pub fn to_hsv(&self, options: &Options) -> Result<Hsv> {
        let hsl = self.normalize()?;
        let Components(_, saturation, value) = convert::rgb_to_hsv(&convert::hsl_to_rgb(&hsl));
        Ok(convert::percent_output(&Components(hsl.0, saturation, value), options.round).into())
    }

    /// Convert this color to the HSI notation.
    pub fn to_hsi(&self, options: &Options) -> Result<Hsi> {
        let hsi = convert::rgb_to_hsi(&convert::hsl_to_rgb(&self.normalize()?));
        Ok(convert::percent_output(&hsi, options.round).into())
    }

    /// Parse a hex color into the HSL notation. Only `options.round` is used.
    pub fn from_hex(hex: &str, options: &Options) -> Result<Self> {
        Rgb::from_hex(hex)?.to_hsl(&options.with_color_depth(255))
    }

    /// Format this color as a 6 digit hex string.
    pub fn to_hex(&self) -> Result<String> {
        let options = Options::default();
        self.to_rgb(&options.unrounded())?.to_hex(&options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn from_rgb() {
        let options = Options::default();
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            (255.0, 0.0, 0.0, 0.0, 100.0, 50.0),
            (0.0, 255.0, 0.0, 120.0, 100.0, 50.0),
            (0.0, 0.0, 255.0, 240.0, 100.0, 50.0),
            (128.0, 128.0, 128.0, 0.0, 0.0, 50.0),
            (0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            (255.0, 255.0, 255.0, 0.0, 0.0, 100.0),
            (210.0, 105.0, 30.0, 25.0, 75.0, 47.0),
        ];

        for &(r, g, b, h, s, l) in TESTS {
            let hsl = Rgb::new(r, g, b).to_hsl(&options).unwrap();
            assert_eq!(hsl, Hsl::new(h, s, l), "rgb({r}, {g}, {b})");
        }
    }

    #[test]
    fn to_rgb() {
        let options = Options::default();
        assert_eq!(
            Hsl::new(120.0, 100.0, 50.0).to_rgb(&options).unwrap(),
            Rgb::new(0.0, 255.0, 0.0)
        );
        assert_eq!(
            Hsl::new(0.0, 0.0, 100.0).to_rgb(&options).unwrap(),
            Rgb::new(255.0, 255.0, 255.0)
        );
        assert!(Hsl::new(0.0, 0.0, 100.1).to_rgb(&options).is_err());
    }

    #[test]
    fn to_hsv_keeps_hue() {
        let options = Options::default().unrounded();
        let hsv = Hsl::new(200.0, 100.0, 50.0).to_hsv(&options).unwrap();
        assert_components_eq!(hsv, Hsv::new(200.0, 100.0, 100.0));
        let hsv = Hsl::new(360.0, 50.0, 100.0).to_hsv(&options).unwrap();
        assert_components_eq!(hsv, Hsv::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn to_hsi() {
        let hsi = Hsl::new(120.0, 100.0, 50.0).to_hsi(&Options::default()).unwrap();
        assert_eq!(hsi, Hsi::new(120.0, 100.0, 33.0));
    }

    #[test]
    fn hex() {
        let options = Options::default();
        assert_eq!(Hsl::from_hex("00FF00", &options).unwrap(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_hex().unwrap(), "0000FF");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn channel() -> impl Strategy<Value = Component> {
            0.0_f64..=255.0
        }

        proptest! {
            #[test]
            fn rgb_round_trip(r in channel(), g in channel(), b in channel()) {
                let options = Options::default().unrounded();
                let back = Rgb::new(r, g, b).to_hsl(&options).unwrap().to_rgb(&options).unwrap();
                prop_assert!((back.red - r).abs() < 1e-6, "r: {} vs {}", back.red, r);
                prop_assert!((back.green - g).abs() < 1e-6, "g: {} vs {}", back.green, g);
                prop_assert!((back.blue - b).abs() < 1e-6, "b: {} vs {}", back.blue, b);
            }

            #[test]
            fn hsv_round_trip(h in 0.0_f64..360.0, s in 0.0_f64..=100.0, v in 0.0_f64..=100.0) {
                let options = Options::default().unrounded();
                let hsl = Hsv::new(h, s, v).to_hsl(&options).unwrap();
                let rgb = Hsv::new(h, s, v).to_rgb(&options).unwrap();
                let back = hsl.to_rgb(&options).unwrap();
                prop_assert!((back.red - rgb.red).abs() < 1e-6);
                prop_assert!((back.green - rgb.green).abs() < 1e-6);
                prop_assert!((back.blue - rgb.blue).abs() < 1e-6);
            }

            #[test]
            fn outputs_in_range(r in channel(), g in channel(), b in channel(), round: bool) {
                let hsl = Rgb::new(r, g, b).to_hsl(&Options::default().with_round(round)).unwrap();
                prop_assert!((0.0..360.0).contains(&hsl.hue), "hue {}", hsl.hue);
                prop_assert!((0.0..=100.0).contains(&hsl.saturation), "saturation {}", hsl.saturation);
                prop_assert!((0.0..=100.0).contains(&hsl.lightness), "lightness {}", hsl.lightness);
            }
        }
    }
}
