//! Model a color with the CIE XYZ and xyY notations.

use crate::{
    color::Component,
    error::Result,
    math::transform,
    models::{Model, Rgb},
    options::Options,
    reference::{adapt_xyz, ReferenceWhite},
    util::{check_finite, check_range},
};

colorist_macros::gen_model! {
    /// A color with CIE XYZ tristimulus values, relative to a reference white
    /// with Y = 1.
    pub struct Xyz {
        /// The X tristimulus value.
        pub x: Component,
        /// The Y tristimulus value (luminance).
        pub y: Component,
        /// The Z tristimulus value.
        pub z: Component,
    }
}

colorist_macros::gen_model! {
    /// A color with CIE xy chromaticity coordinates and a luminance.
    pub struct Xyy {
        /// The x chromaticity coordinate.
        pub x: Component,
        /// The y chromaticity coordinate.
        pub y: Component,
        /// The luminance, equal to Y in XYZ.
        pub luminance: Component,
    }
}

impl Rgb {
    /// Convert this color to XYZ using the working space and reference white
    /// from `options`. The result is never rounded.
    ///
    /// ```
    /// use colorist::{Options, Rgb};
    /// let xyz = Rgb::new(255.0, 255.0, 255.0).to_xyz(&Options::default()).unwrap();
    /// assert!((xyz.y - 1.0).abs() < 1e-9);
    /// ```
    pub fn to_xyz(&self, options: &Options) -> Result<Xyz> {
        let space = options.color_space;
        let matrices = space.matrices(&options.reference_white)?;
        let companding = space.companding();
        let linear = self.normalize(options)?.map(|v| companding.to_linear(v));
        Ok(transform(&matrices.to_xyz, linear).into())
    }
}

impl Xyz {
    /// Fail unless every channel is finite.
    pub(crate) fn check(&self) -> Result<()> {
        for value in [self.x, self.y, self.z] {
            check_finite(value)?;
        }
        Ok(())
    }

    /// Convert this color to RGB using the working space and reference white
    /// from `options`. Channels outside the gamut of the working space are
    /// clamped.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        self.check()?;
        let space = options.color_space;
        let matrices = space.matrices(&options.reference_white)?;
        let companding = space.companding();
        let rgb = transform(&matrices.from_xyz, self.to_components()).map(|v| {
            let encoded = companding.to_encoded(v);
            if !(0.0..=1.0).contains(&encoded) {
                log::trace!("clamping out of gamut channel {encoded} of {space}");
            }
            encoded.clamp(0.0, 1.0)
        });
        Rgb::from_normalized(rgb, options)
    }

    /// Convert this color to xyY. Black maps to a chromaticity of `(0, 0)`.
    pub fn to_xyy(&self) -> Result<Xyy> {
        self.check()?;
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return Ok(Xyy::new(0.0, 0.0, self.y));
        }
        Ok(Xyy::new(self.x / sum, self.y / sum, self.y))
    }

    /// Adapt this color from one reference white to another with the
    /// Bradford transform.
    pub fn adapt(&self, from: &ReferenceWhite, to: &ReferenceWhite) -> Result<Xyz> {
        adapt_xyz(*self, from, to)
    }
}

impl Xyy {
    /// Convert this color to XYZ. A y chromaticity of 0 has no defined X or
    /// Z, which are returned as 0.
    pub fn to_xyz(&self) -> Result<Xyz> {
        check_range(self.x, 0.0, 1.0)?;
        check_range(self.y, 0.0, 1.0)?;
        check_finite(self.luminance)?;
        if self.y == 0.0 {
            return Ok(Xyz::new(0.0, self.luminance, 0.0));
        }
        let scale = self.luminance / self.y;
        Ok(Xyz::new(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        ))
    }
}
