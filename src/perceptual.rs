//! One way approximations of RGB from physical descriptions of light: a
//! single wavelength, or the color temperature of a black body.

use crate::{
    color::{Component, Components},
    error::Result,
    models::{Model, Rgb},
    options::Options,
    util::check_range,
};

/// The gamma applied by [`Rgb::from_wavelength`] when the caller has no
/// preference.
pub const DEFAULT_WAVELENGTH_GAMMA: Component = 0.8;

/// The linear RGB ramps of the visible spectrum, before the intensity
/// falloff.
fn spectrum(nm: Component) -> Components {
    match nm {
        nm if (380.0..440.0).contains(&nm) => Components(-(nm - 440.0) / 60.0, 0.0, 1.0),
        nm if (440.0..490.0).contains(&nm) => Components(0.0, (nm - 440.0) / 50.0, 1.0),
        nm if (490.0..510.0).contains(&nm) => Components(0.0, 1.0, (510.0 - nm) / 20.0),
        nm if (510.0..580.0).contains(&nm) => Components((nm - 510.0) / 70.0, 1.0, 0.0),
        nm if (580.0..645.0).contains(&nm) => Components(1.0, -(nm - 645.0) / 65.0, 0.0),
        nm if (645.0..781.0).contains(&nm) => Components(1.0, 0.0, 0.0),
        _ => Components(0.0, 0.0, 0.0),
    }
}

/// Intensity falls off toward the limits of human vision.
fn falloff(nm: Component) -> Component {
    match nm {
        nm if (380.0..420.0).contains(&nm) => 0.3 + 0.7 * (nm - 380.0) / 40.0,
        nm if (420.0..701.0).contains(&nm) => 1.0,
        nm if (701.0..781.0).contains(&nm) => 0.3 + 0.7 * (780.0 - nm) / 80.0,
        _ => 0.0,
    }
}

/// Tanner Helland's fit of black body colors, in `[0, 255]`.
fn black_body(kelvin: Component) -> Components {
    let t = kelvin / 100.0;

    let (red, green) = if t <= 66.0 {
        (255.0, 99.4708025861 * t.ln() - 161.1195681661)
    } else {
        (
            329.698727466 * (t - 60.0).powf(-0.1332047592),
            288.1221695283 * (t - 60.0).powf(-0.0755148492),
        )
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    Components(red, green, blue).map(|v| v.clamp(0.0, 255.0))
}

impl Rgb {
    /// Approximate the color of monochromatic light. `nm` must lie in
    /// `[200, 800]`; anything outside the visible range of roughly 380 to 780
    /// nanometers is black. `gamma` must be finite and not negative.
    ///
    /// ```
    /// use colorist::{perceptual::DEFAULT_WAVELENGTH_GAMMA, Options, Rgb};
    /// let rgb = Rgb::from_wavelength(700.0, DEFAULT_WAVELENGTH_GAMMA, &Options::default()).unwrap();
    /// assert_eq!(rgb, Rgb::new(255.0, 0.0, 0.0));
    /// ```
    pub fn from_wavelength(nm: Component, gamma: Component, options: &Options) -> Result<Self> {
        let depth = options.depth()?;
        check_range(nm, 200.0, 800.0)?;
        check_range(gamma, 0.0, Component::MAX)?;
        let factor = falloff(nm);
        let rgb = spectrum(nm).map(|v| {
            if v > 0.0 {
                depth * (v * factor).powf(gamma)
            } else {
                0.0
            }
        });
        Ok(Self::from(rgb).rounded(options.round))
    }

    /// Approximate the color of a black body at `kelvin`, which must lie in
    /// `[1000, 40000]`.
    pub fn from_kelvin(kelvin: Component, options: &Options) -> Result<Self> {
        let depth = options.depth()?;
        check_range(kelvin, 1000.0, 40000.0)?;
        Ok(Self::from(black_body(kelvin).map(|v| v * depth / 255.0)).rounded(options.round))
    }
}

/// Approximate the color of monochromatic light as a hex color.
pub fn wavelength_to_hex(nm: Component, gamma: Component) -> Result<String> {
    let options = Options::default();
    Rgb::from_wavelength(nm, gamma, &options.unrounded())?.to_hex(&options)
}

/// Approximate the color of a black body as a hex color.
pub fn kelvin_to_hex(kelvin: Component) -> Result<String> {
    let options = Options::default();
    Rgb::from_kelvin(kelvin, &options.unrounded())?.to_hex(&options)
}
