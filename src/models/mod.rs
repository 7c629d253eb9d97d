//! The color models. Each model is a small `Copy` value with public
//! channels; conversions live next to the model they convert from.

use crate::color::{round_if, Components};

mod broadcast;
mod cmyk;
mod hsi;
mod hsl;
mod hsv;
mod lab;
mod luv;
mod rgb;
mod xyz;
mod yiq;

pub use broadcast::{BroadcastStandard, LumaCoefficients, RangeLimits, YCbCr, YPbPr};
pub use cmyk::Cmyk;
pub use hsi::Hsi;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::{Xyy, Xyz};
pub use yiq::{Yiq, YiqScale};

/// A color model with three channels.
pub trait Model: Sized {
    /// Create the model from its channels, in declaration order.
    fn from_components(components: Components) -> Self;

    /// The channels of the model, in declaration order.
    fn to_components(&self) -> Components;

    /// Return a copy with every channel rounded to the nearest integer when
    /// `round` is set.
    fn rounded(&self, round: bool) -> Self {
        Self::from_components(self.to_components().map(|v| round_if(v, round)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_applies_to_every_channel() {
        let rgb = Rgb::new(1.4, 2.5, 3.6).rounded(true);
        assert_eq!(rgb, Rgb::new(1.0, 3.0, 4.0));
        let rgb = Rgb::new(1.4, 2.5, 3.6).rounded(false);
        assert_eq!(rgb, Rgb::new(1.4, 2.5, 3.6));
    }

    #[test]
    fn components_conversions() {
        let lab = Lab::from(Components(50.0, -20.0, 30.0));
        assert_eq!(lab.lightness, 50.0);
        assert_eq!(lab.to_components(), Components(50.0, -20.0, 30.0));
        let channels: [crate::Component; 3] = lab.into();
        assert_eq!(channels, [50.0, -20.0, 30.0]);
    }

    #[test]
    fn models_serialize_with_named_channels() {
        let json = serde_json::to_string(&Hsv::new(120.0, 50.0, 25.0)).unwrap();
        assert_eq!(json, r#"{"hue":120.0,"saturation":50.0,"value":25.0}"#);
        let rgb: Rgb = serde_json::from_str(r#"{"red":1,"green":2,"blue":3}"#).unwrap();
        assert_eq!(rgb, Rgb::new(1.0, 2.0, 3.0));
    }
}
