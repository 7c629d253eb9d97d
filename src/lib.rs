//! colorist converts colors between RGB and the models derived from it: the
//! cylindrical HSV, HSL and HSI notations, CMYK, YIQ, the CIE XYZ, xyY, L*a*b*
//! and L*u*v* spaces, and the YPbPr and YCbCr encodings used in broadcast and
//! JPEG. It also builds hue harmonies, blends colors and approximates the
//! color of a wavelength or a black body temperature.
//!
//! Conversions validate their inputs and report problems as
//! [`InvalidColorValue`]. Settings shared by most conversions, like the RGB
//! color depth, rounding, the working space and the reference white, are
//! passed in as [`Options`].
//!
//! ```
//! use colorist::{Options, Rgb};
//! let options = Options::default();
//! let hsl = Rgb::from_hex("#D2691E").unwrap().to_hsl(&options).unwrap();
//! assert_eq!(hsl.to_hex().unwrap(), "D2691E");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
pub mod error;
mod options;

pub mod blend;
pub mod harmony;
pub mod math;
pub mod models;
pub mod perceptual;
pub mod reference;
pub mod util;


pub use color::{Component, Components};
pub use error::{InvalidColorValue, Result};
pub use models::{
    BroadcastStandard, Cmyk, Hsi, Hsl, Hsv, Lab, LumaCoefficients, Luv, RangeLimits, Rgb, Xyy,
    Xyz, YCbCr, YPbPr, Yiq, YiqScale,
};
pub use options::{Options, MAX_COLOR_DEPTH};
pub use reference::{Illuminant, ReferenceWhite, RgbSpace};
