//! Model a color with the CIE L*a*b* notation.

use crate::{
    color::{Component, Components},
    error::Result,
    models::{Rgb, Xyz},
    options::Options,
    reference::{EPSILON, KAPPA},
    util::{check_finite, check_range},
};

colorist_macros::gen_model! {
    /// A color in the perceptually uniform CIE L*a*b* space, relative to a
    /// reference white.
    pub struct Lab {
        /// The lightness in `[0, 100]`.
        pub lightness: Component,
        /// The green (negative) to red (positive) axis.
        pub a: Component,
        /// The blue (negative) to yellow (positive) axis.
        pub b: Component,
    }
}

/// The compression applied to each white-relative tristimulus value.
fn compress(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Invert [`compress`] for the X and Z channels.
fn expand(f: Component) -> Component {
    let cubed = f.powi(3);
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl Xyz {
    /// Convert this color to Lab relative to `options.reference_white`. The
    /// result is never rounded.
    pub fn to_lab(&self, options: &Options) -> Result<Lab> {
        self.check()?;
        let white = options.reference_white.white_point()?;
        let Components(fx, fy, fz) = Components(
            self.x / white.0,
            self.y / white.1,
            self.z / white.2,
        )
        .map(compress);
        Ok(Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)))
    }
}

impl Lab {
    /// Convert this color to XYZ relative to `options.reference_white`.
    pub fn to_xyz(&self, options: &Options) -> Result<Xyz> {
        check_range(self.lightness, 0.0, 100.0)?;
        check_finite(self.a)?;
        check_finite(self.b)?;
        let white = options.reference_white.white_point()?;

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        let yr = if self.lightness > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            self.lightness / KAPPA
        };

        Ok(Xyz::new(expand(fx) * white.0, yr * white.1, expand(fz) * white.2))
    }

    /// Convert this color to RGB through XYZ, with the working space and
    /// reference white from `options`.
    pub fn to_rgb(&self, options: &Options) -> Result<Rgb> {
        self.to_xyz(options)?.to_rgb(options)
    }
}

impl Rgb {
    /// Convert this color to Lab through XYZ, with the working space and
    /// reference white from `options`.
    ///
    /// ```
    /// use colorist::{Options, Rgb};
    /// let lab = Rgb::new(255.0, 255.0, 255.0).to_lab(&Options::default()).unwrap();
    /// assert!((lab.lightness - 100.0).abs() < 1e-9);
    /// ```
    pub fn to_lab(&self, options: &Options) -> Result<Lab> {
        self.to_xyz(options)?.to_lab(options)
    }
}
