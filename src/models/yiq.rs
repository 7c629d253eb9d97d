//! Model a color with the NTSC YIQ notation.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    error::Result,
    math::{invert_3x3, matrix_3x3, transform, Transform},
    models::{Model, Rgb},
    options::Options,
    util::{check_range, scale_range},
};

const I_MAX: Component = 0.5957;
const Q_MAX: Component = 0.5226;

/// Linear RGB in `[0, 1]` to YIQ, as defined by the FCC.
#[rustfmt::skip]
const TO_YIQ: Transform = matrix_3x3(
    0.299,   0.587,   0.114,
    0.5959, -0.2746, -0.3213,
    0.2115, -0.5227,  0.3112,
);

static FROM_YIQ: LazyLock<Result<Transform>> = LazyLock::new(|| invert_3x3(&TO_YIQ));

/// How the channels of a [`Yiq`] color are encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YiqScale {
    /// Luma in `[0, 255]`, I and Q in `[-128, 128]`.
    #[default]
    Normalized,
    /// Luma in `[0, 1]`, I in `[-0.5957, 0.5957]` and Q in
    /// `[-0.5226, 0.5226]`. Never rounded.
    Raw,
}

colorist_macros::gen_model! {
    /// A color split into luma and two chrominance channels.
    pub struct Yiq {
        /// The luma channel.
        pub luma: Component,
        /// The in-phase (orange to blue) chrominance channel.
        pub in_phase: Component,
        /// The quadrature (purple to green) chrominance channel.
        pub quadrature: Component,
    }
}

impl Rgb {
    /// Convert this color to YIQ. Channels are clamped to their theoretical
    /// ranges before they are encoded with `scale`.
    pub fn to_yiq(&self, scale: YiqScale, options: &Options) -> Result<Yiq> {
        let Components(y, i, q) = transform(&TO_YIQ, self.normalize(options)?);
        let raw = Yiq::new(
            y.clamp(0.0, 1.0),
            i.clamp(-I_MAX, I_MAX),
            q.clamp(-Q_MAX, Q_MAX),
        );

        match scale {
            YiqScale::Raw => Ok(raw),
            YiqScale::Normalized => Ok(Yiq::new(
                raw.luma * 255.0,
                scale_range(raw.in_phase, -I_MAX, I_MAX, -128.0, 128.0, false)?,
                scale_range(raw.quadrature, -Q_MAX, Q_MAX, -128.0, 128.0, false)?,
            )
            .rounded(options.round)),
        }
    }
}

impl Yiq {
    /// Validate the channels against `scale` and return them raw.
    fn to_raw(&self, scale: YiqScale) -> Result<Components> {
        match scale {
            YiqScale::Normalized => Ok(Components(
                scale_range(self.luma, 0.0, 255.0, 0.0, 1.0, false)?,
                scale_range(self.in_phase, -128.0, 128.0, -I_MAX, I_MAX, false)?,
                scale_range(self.quadrature, -128.0, 128.0, -Q_MAX, Q_MAX, false)?,
            )),
            YiqScale::Raw => {
                check_range(self.luma, 0.0, 1.0)?;
                check_range(self.in_phase, -I_MAX, I_MAX)?;
                check_range(self.quadrature, -Q_MAX, Q_MAX)?;
                Ok(self.to_components())
            }
        }
    }

    /// Convert this color, encoded with `scale`, to RGB at the configured
    /// color depth. Channels outside the RGB gamut are clamped.
    pub fn to_rgb(&self, scale: YiqScale, options: &Options) -> Result<Rgb> {
        let from_yiq = FROM_YIQ.as_ref().map_err(Clone::clone)?;
        let rgb = transform(from_yiq, self.to_raw(scale)?).map(|v| v.clamp(0.0, 1.0));
        Rgb::from_normalized(rgb, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq};

    #[test]
    fn normalized_from_rgb() {
        let options = Options::default();
        #[rustfmt::skip]
        const TESTS: &[([Component; 3], [Component; 3])] = &[
            ([255.0, 255.0, 255.0], [255.0, 0.0, 0.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([255.0, 0.0, 0.0], [76.0, 128.0, 52.0]),
            ([0.0, 0.0, 255.0], [29.0, -69.0, 76.0]),
        ];

        for &(rgb, yiq) in TESTS {
            let actual = Rgb::from(rgb).to_yiq(YiqScale::Normalized, &options).unwrap();
            assert_components_eq!(actual, Yiq::from(yiq));
        }
    }

    #[test]
    fn raw_is_clamped_and_never_rounded() {
        let yiq = Rgb::new(255.0, 0.0, 0.0)
            .to_yiq(YiqScale::Raw, &Options::default())
            .unwrap();
        assert_component_eq!(yiq.luma, 0.299);
        assert_component_eq!(yiq.in_phase, 0.5957);
        assert_component_eq!(yiq.quadrature, 0.2115);
    }

    #[test]
    fn to_rgb() {
        let options = Options::default();
        let rgb = Yiq::new(255.0, 0.0, 0.0).to_rgb(YiqScale::Normalized, &options).unwrap();
        assert_eq!(rgb, Rgb::new(255.0, 255.0, 255.0));
        let rgb = Yiq::new(0.0, 0.0, 0.0).to_rgb(YiqScale::Normalized, &options).unwrap();
        assert_eq!(rgb, Rgb::new(0.0, 0.0, 0.0));
        // Far outside the RGB gamut, every channel is clamped.
        let rgb = Yiq::new(0.0, 128.0, 128.0).to_rgb(YiqScale::Normalized, &options).unwrap();
        assert!([rgb.red, rgb.green, rgb.blue]
            .iter()
            .all(|v| (0.0..=255.0).contains(v)));
    }

    #[test]
    fn raw_round_trip() {
        let options = Options::default().unrounded();
        for rgb in [[100.0, 150.0, 200.0], [128.0, 128.0, 128.0], [10.0, 200.0, 30.0]] {
            let rgb = Rgb::from(rgb);
            let back = rgb
                .to_yiq(YiqScale::Raw, &options)
                .and_then(|yiq| yiq.to_rgb(YiqScale::Raw, &options))
                .unwrap();
            assert_components_eq!(back, rgb);
        }
    }

    #[test]
    fn inputs_are_validated_per_scale() {
        let options = Options::default();
        assert!(Yiq::new(256.0, 0.0, 0.0).to_rgb(YiqScale::Normalized, &options).is_err());
        assert!(Yiq::new(0.0, -129.0, 0.0).to_rgb(YiqScale::Normalized, &options).is_err());
        assert!(Yiq::new(1.5, 0.0, 0.0).to_rgb(YiqScale::Raw, &options).is_err());
        assert!(Yiq::new(0.5, 0.0, 0.6).to_rgb(YiqScale::Raw, &options).is_err());
        assert!(Rgb::new(0.0, 0.0, 300.0).to_yiq(YiqScale::Raw, &options).is_err());
    }

    #[test]
    fn scale_names() {
        assert_eq!(serde_json::to_string(&YiqScale::Raw).unwrap(), r#""raw""#);
        let scale: YiqScale = serde_json::from_str(r#""normalized""#).unwrap();
        assert_eq!(scale, YiqScale::Normalized);
        assert_eq!(YiqScale::default(), YiqScale::Normalized);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn channel() -> impl Strategy<Value = Component> {
            0.0_f64..=255.0
        }

        proptest! {
            #[test]
            fn normalized_outputs_in_range(r in channel(), g in channel(), b in channel(), round: bool) {
                let options = Options::default().with_round(round);
                let yiq = Rgb::new(r, g, b).to_yiq(YiqScale::Normalized, &options).unwrap();
                prop_assert!((0.0..=255.0).contains(&yiq.luma), "luma {}", yiq.luma);
                prop_assert!((-128.0..=128.0).contains(&yiq.in_phase), "i {}", yiq.in_phase);
                prop_assert!((-128.0..=128.0).contains(&yiq.quadrature), "q {}", yiq.quadrature);
                prop_assert!(yiq.to_rgb(YiqScale::Normalized, &options).is_ok());
            }
        }
    }
}
