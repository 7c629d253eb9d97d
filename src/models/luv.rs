//! Model a color with the CIE L*u*v* notation.

use crate::{
    color::{Component, Components},
    error::Result,
    models::{Rgb, Xyz},
    options::Options,
    reference::{EPSILON, KAPPA},
    util::{check_finite, check_range},
};

colorist_macros::gen_model! {
    /// A color in the CIE L*u*v* space, relative to a reference white.
    pub struct Luv {
        /// The lightness in `[0, 100]`.
        pub lightness: Component,
        /// The u chromaticity axis.
        pub u: Component,
        /// The v chromaticity axis.
        pub v: Component,
    }
}

/// The u' and v' chromaticity of an XYZ triple. A zero denominator gives
/// `(0, 0)`.
fn uv_prime(xyz: Components) -> (Component, Component) {
    let Components(x, y, z) = xyz;
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * x / denominator, 9.0 * y / denominator)
}

impl Xyz {
    /// Convert this color to Luv relative to `options.reference_white`. The
    /// result is never rounded.
    pub fn to_luv(&self, options: &Options) -> Result<Luv> {
        self.check()?;
        let white = options.reference_white.white_point()?;

        let yr = self.y / white.1;
        let lightness = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };
        if lightness == 0.0 {
            return Ok(Luv::new(0.0, 0.0, 0.0));
        }

        let (u, v) = uv_prime(Components(self.x, self.y, self.z));
        let (ur, vr) = uv_prime(white);
        Ok(Luv::new(
            lightness,
            13.0 * lightness * (u - ur),
            13.0 * lightness * (v - vr),
        ))
    }
}

impl Luv {
    /// Convert this color to XYZ relative to `options.reference_white`.
    /// Black, and colors with a v' chromaticity of 0, have no defined X or Z,
    /// which are returned as 0.
    pub fn to_xyz(&self, options: &Options) -> Result<Xyz> {
        check_range(self.lightness, 0.0, 100.0)?;
        check_finite(self.u)?;
        check_finite(self.v)?;
        let white = options.reference_white.white_point()?;

        if self.lightness == 0.0 {
            return Ok(Xyz::new(0.0, 0.0, 0.0));
        }

        let y = if self.lightness > KAPPA * EPSILON {
            ((self.lightness + 16.0) / 116.0).powi(3)
        } else {
            self.lightness / KAPPA
        } * white.1;

        let (ur, vr) = uv_prime(white);
        let u = self.u / (13.0 * self.lightness) + ur;
        let v = self.v / (13.0 * self.lightness) + vr;
        if v == 0.0 {
            return Ok(Xyz::new(0.0, y, 0.0));
        }

        Ok(Xyz::new(
            y * 9.0 * u / (4.0 * v),
            y,
            y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v),
        ))
    }

    /// Convert this color to RGB through XYZ, with the working space and
    /// reference white from `options`.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        self.to_xyz(options)?.to_rgb(options)
    }
}

impl Rgb {
    /// Convert this color to Luv through XYZ, with the working space and
    /// reference white from `options`.
    pub fn to_luv(&self, options: &Options) -> Result<Luv> {
        self.to_xyz(options)?.to_luv(options)
    }
}
