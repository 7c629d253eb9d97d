//! Reference data for the CIE conversions: standard illuminants, RGB working
//! spaces and the table of RGB to XYZ matrices derived from them.

use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    color::{Component, Components},
    error::{InvalidColorValue, Result},
    math::{diagonal, invert_3x3, matrix_3x3, transform, Transform},
    models::Xyz,
    util::{check_finite, check_range},
};

/// CIE κ, the slope of the linear part of the lightness curve.
pub const KAPPA: Component = 24389.0 / 27.0;

/// CIE ε, the threshold between the linear and cube-root parts of the
/// lightness curve.
pub const EPSILON: Component = 216.0 / 24389.0;

/// Lowercase `name` and drop everything that is not a letter or digit.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A CIE standard illuminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// Incandescent, 2856 K.
    A,
    /// Average daylight, 6774 K. Deprecated.
    C,
    /// Horizon light, 5003 K.
    D50,
    /// Mid-morning daylight, 5500 K.
    D55,
    /// Noon daylight, 6504 K.
    D65,
    /// Equal energy radiator.
    E,
    /// The profile connection space illuminant used in ICC profiles.
    Icc,
}

impl Illuminant {
    /// Every known illuminant.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::E,
        Self::Icc,
    ];

    /// The XYZ coordinates of the illuminant, normalized so that Y = 1.
    #[allow(clippy::excessive_precision)]
    pub const fn white_point(self) -> Components {
        match self {
            Self::A => Components(1.09850, 1.0, 0.35585),
            Self::C => Components(0.98074, 1.0, 1.18232),
            Self::D50 => Components(0.96422, 1.0, 0.82521),
            Self::D55 => Components(0.95682, 1.0, 0.92149),
            Self::D65 => Components(0.95047, 1.0, 1.08883),
            Self::E => Components(1.0, 1.0, 1.0),
            Self::Icc => Components(0.9642, 1.0, 0.8249),
        }
    }

    /// The canonical lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::C => "c",
            Self::D50 => "d50",
            Self::D55 => "d55",
            Self::D65 => "d65",
            Self::E => "e",
            Self::Icc => "icc",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|illuminant| illuminant.name() == name)
            .ok_or_else(|| {
                log::debug!("no illuminant named {s:?}");
                InvalidColorValue::UnknownReferenceWhite(s.to_string())
            })
    }
}

impl Serialize for Illuminant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Illuminant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// The white an XYZ, Lab or Luv value is relative to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReferenceWhite {
    /// A standard illuminant.
    Named(Illuminant),
    /// Explicit XYZ coordinates. Use [`ReferenceWhite::custom`] to build one
    /// with validated values.
    Custom([Component; 3]),
}

impl ReferenceWhite {
    /// Create a reference white from explicit XYZ coordinates. Exactly three
    /// finite, positive values are required.
    pub fn custom(values: &[Component]) -> Result<Self> {
        let white: [Component; 3] = values.try_into().map_err(|_| {
            InvalidColorValue::MalformedReferenceWhite(format!(
                "expected 3 values, got {}",
                values.len()
            ))
        })?;
        Self::validate(white)?;
        Ok(Self::Custom(white))
    }

    fn validate(white: [Component; 3]) -> Result<()> {
        if white.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(InvalidColorValue::MalformedReferenceWhite(format!(
                "values must be finite and positive, got {white:?}"
            )))
        }
    }

    /// The XYZ coordinates of the white.
    pub fn white_point(&self) -> Result<Components> {
        match *self {
            Self::Named(illuminant) => Ok(illuminant.white_point()),
            Self::Custom(white) => {
                Self::validate(white)?;
                Ok(Components::from(white))
            }
        }
    }
}

impl Default for ReferenceWhite {
    fn default() -> Self {
        Self::Named(Illuminant::D65)
    }
}

impl From<Illuminant> for ReferenceWhite {
    fn from(value: Illuminant) -> Self {
        Self::Named(value)
    }
}

impl FromStr for ReferenceWhite {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self::Named)
    }
}

impl<'de> Deserialize<'de> for ReferenceWhite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Vector(Vec<Component>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => name.parse(),
            Repr::Vector(values) => Self::custom(&values),
        }
        .map_err(serde::de::Error::custom)
    }
}

/// How an RGB working space encodes linear light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Companding {
    /// The piecewise sRGB curve.
    Srgb,
    /// The CIE lightness curve used by eciRGB v2.
    LStar,
    /// A plain power function.
    Gamma(Component),
}

impl Companding {
    /// Convert an encoded channel in `[0, 1]` to linear light.
    pub fn to_linear(self, value: Component) -> Component {
        let abs = value.abs();
        match self {
            Self::Srgb => {
                if abs <= 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            }
            Self::LStar => {
                if abs <= 0.08 {
                    100.0 * value / KAPPA
                } else {
                    value.signum() * ((abs + 0.16) / 1.16).powi(3)
                }
            }
            Self::Gamma(gamma) => value.signum() * abs.powf(gamma),
        }
    }

    /// Convert a linear light channel to its encoded form.
    pub fn to_encoded(self, value: Component) -> Component {
        let abs = value.abs();
        match self {
            Self::Srgb => {
                if abs <= 0.0031308 {
                    value * 12.92
                } else {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                }
            }
            Self::LStar => {
                if abs <= EPSILON {
                    value * KAPPA / 100.0
                } else {
                    value.signum() * (1.16 * abs.cbrt() - 0.16)
                }
            }
            Self::Gamma(gamma) => value.signum() * abs.powf(1.0 / gamma),
        }
    }
}

/// A chromaticity coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    /// x coordinate.
    pub x: Component,
    /// y coordinate.
    pub y: Component,
}

const fn xy(x: Component, y: Component) -> Chromaticity {
    Chromaticity { x, y }
}

/// The chromaticities of the three primaries of an RGB working space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primaries {
    /// Red primary.
    pub red: Chromaticity,
    /// Green primary.
    pub green: Chromaticity,
    /// Blue primary.
    pub blue: Chromaticity,
}

const fn primaries(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Primaries {
    Primaries { red, green, blue }
}

/// A named RGB working space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RgbSpace {
    /// Adobe RGB (1998).
    AdobeRgb1998,
    /// Apple RGB.
    AppleRgb,
    /// Best RGB.
    BestRgb,
    /// Beta RGB.
    BetaRgb,
    /// Bruce RGB.
    BruceRgb,
    /// CIE RGB.
    CieRgb,
    /// ColorMatch RGB.
    ColorMatchRgb,
    /// Don RGB 4.
    Don4Rgb,
    /// eciRGB v2.
    EciRgbV2,
    /// Ekta Space PS5.
    EktaSpacePs5,
    /// NTSC RGB.
    NtscRgb,
    /// PAL/SECAM RGB.
    PalSecamRgb,
    /// ProPhoto RGB.
    ProPhotoRgb,
    /// SMPTE-C RGB.
    SmpteCRgb,
    /// sRGB.
    #[default]
    Srgb,
    /// Wide Gamut RGB.
    WideGamutRgb,
}

impl RgbSpace {
    /// Every known working space.
    pub const ALL: [Self; 16] = [
        Self::AdobeRgb1998,
        Self::AppleRgb,
        Self::BestRgb,
        Self::BetaRgb,
        Self::BruceRgb,
        Self::CieRgb,
        Self::ColorMatchRgb,
        Self::Don4Rgb,
        Self::EciRgbV2,
        Self::EktaSpacePs5,
        Self::NtscRgb,
        Self::PalSecamRgb,
        Self::ProPhotoRgb,
        Self::SmpteCRgb,
        Self::Srgb,
        Self::WideGamutRgb,
    ];

    /// The canonical normalized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AdobeRgb1998 => "adobergb1998",
            Self::AppleRgb => "applergb",
            Self::BestRgb => "bestrgb",
            Self::BetaRgb => "betargb",
            Self::BruceRgb => "brucergb",
            Self::CieRgb => "ciergb",
            Self::ColorMatchRgb => "colormatchrgb",
            Self::Don4Rgb => "don4rgb",
            Self::EciRgbV2 => "ecirgbv2",
            Self::EktaSpacePs5 => "ektaspaceps5",
            Self::NtscRgb => "ntscrgb",
            Self::PalSecamRgb => "palsecamrgb",
            Self::ProPhotoRgb => "prophotorgb",
            Self::SmpteCRgb => "smptecrgb",
            Self::Srgb => "srgb",
            Self::WideGamutRgb => "widegamutrgb",
        }
    }

    /// The illuminant the primaries were defined against.
    pub const fn native_white(self) -> Illuminant {
        match self {
            Self::AdobeRgb1998
            | Self::AppleRgb
            | Self::BruceRgb
            | Self::PalSecamRgb
            | Self::SmpteCRgb
            | Self::Srgb => Illuminant::D65,
            Self::BestRgb
            | Self::BetaRgb
            | Self::ColorMatchRgb
            | Self::Don4Rgb
            | Self::EciRgbV2
            | Self::EktaSpacePs5
            | Self::ProPhotoRgb
            | Self::WideGamutRgb => Illuminant::D50,
            Self::CieRgb => Illuminant::E,
            Self::NtscRgb => Illuminant::C,
        }
    }

    /// How the working space encodes linear light.
    pub const fn companding(self) -> Companding {
        match self {
            Self::Srgb => Companding::Srgb,
            Self::EciRgbV2 => Companding::LStar,
            Self::AppleRgb | Self::ColorMatchRgb | Self::ProPhotoRgb => Companding::Gamma(1.8),
            _ => Companding::Gamma(2.2),
        }
    }

    /// Chromaticities of the red, green and blue primaries.
    #[rustfmt::skip]
    pub const fn primaries(self) -> Primaries {
        match self {
            Self::AdobeRgb1998 => primaries(xy(0.64, 0.33), xy(0.21, 0.71), xy(0.15, 0.06)),
            Self::AppleRgb => primaries(xy(0.625, 0.34), xy(0.28, 0.595), xy(0.155, 0.07)),
            Self::BestRgb => primaries(xy(0.7347, 0.2653), xy(0.215, 0.775), xy(0.13, 0.035)),
            Self::BetaRgb => primaries(xy(0.6888, 0.3112), xy(0.1986, 0.7551), xy(0.1265, 0.0352)),
            Self::BruceRgb => primaries(xy(0.64, 0.33), xy(0.28, 0.65), xy(0.15, 0.06)),
            Self::CieRgb => primaries(xy(0.735, 0.265), xy(0.274, 0.717), xy(0.167, 0.009)),
            Self::ColorMatchRgb => primaries(xy(0.63, 0.34), xy(0.295, 0.605), xy(0.15, 0.075)),
            Self::Don4Rgb => primaries(xy(0.696, 0.3), xy(0.215, 0.765), xy(0.13, 0.035)),
            Self::EciRgbV2 => primaries(xy(0.67, 0.33), xy(0.21, 0.71), xy(0.14, 0.08)),
            Self::EktaSpacePs5 => primaries(xy(0.695, 0.305), xy(0.26, 0.7), xy(0.11, 0.005)),
            Self::NtscRgb => primaries(xy(0.67, 0.33), xy(0.21, 0.71), xy(0.14, 0.08)),
            Self::PalSecamRgb => primaries(xy(0.64, 0.33), xy(0.29, 0.6), xy(0.15, 0.06)),
            Self::ProPhotoRgb => primaries(xy(0.7347, 0.2653), xy(0.1596, 0.8404), xy(0.0366, 0.0001)),
            Self::SmpteCRgb => primaries(xy(0.63, 0.34), xy(0.31, 0.595), xy(0.155, 0.07)),
            Self::Srgb => primaries(xy(0.64, 0.33), xy(0.3, 0.6), xy(0.15, 0.06)),
            Self::WideGamutRgb => primaries(xy(0.735, 0.265), xy(0.115, 0.826), xy(0.157, 0.018)),
        }
    }

    /// The matrices converting linear RGB in this working space to and from
    /// XYZ relative to `white`.
    pub fn matrices(self, white: &ReferenceWhite) -> Result<RgbMatrices> {
        match *white {
            ReferenceWhite::Named(illuminant) => lookup(&MATRICES, self, illuminant),
            ReferenceWhite::Custom(_) => RgbMatrices::adapted(self, white.white_point()?),
        }
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RgbSpace {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self> {
        let name = normalize_name(s);
        let name = match name.as_str() {
            "adobergb" | "adobe1998" | "adobe" => "adobergb1998",
            "apple" => "applergb",
            "best" => "bestrgb",
            "beta" => "betargb",
            "bruce" => "brucergb",
            "cie" => "ciergb",
            "colormatch" => "colormatchrgb",
            "don4" | "donrgb4" => "don4rgb",
            "eci" | "ecirgb" | "eciv2" => "ecirgbv2",
            "ektaspace" | "ektaspaceps5rgb" => "ektaspaceps5",
            "ntsc" => "ntscrgb",
            "pal" | "palrgb" | "secam" | "secamrgb" | "palsecam" => "palsecamrgb",
            "prophoto" => "prophotorgb",
            "smpte" | "smptec" => "smptecrgb",
            "widegamut" => "widegamutrgb",
            name => name,
        };

        Self::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| {
                log::debug!("no RGB working space named {s:?}");
                InvalidColorValue::UnknownColorSpace(s.to_string())
            })
    }
}

impl Serialize for RgbSpace {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RgbSpace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// A pair of matrices converting linear RGB to XYZ and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbMatrices {
    /// Linear RGB to XYZ.
    pub to_xyz: Transform,
    /// XYZ to linear RGB.
    pub from_xyz: Transform,
}

impl RgbMatrices {
    /// Derive the matrices of `space` for an arbitrary white, adapting from
    /// the space's native white when they differ.
    fn adapted(space: RgbSpace, white: Components) -> Result<Self> {
        let native = space.native_white().white_point();
        let mut to_xyz = rgb_to_xyz_matrix(&space.primaries(), native)?;
        if white != native {
            to_xyz = to_xyz.then(&bradford(native, white)?);
        }
        Ok(Self {
            to_xyz,
            from_xyz: invert_3x3(&to_xyz)?,
        })
    }
}

type MatrixTable = HashMap<(RgbSpace, Illuminant), RgbMatrices>;

fn lookup(table: &MatrixTable, space: RgbSpace, illuminant: Illuminant) -> Result<RgbMatrices> {
    table.get(&(space, illuminant)).copied().ok_or_else(|| {
        log::debug!("no matrices for {space} under {illuminant}");
        InvalidColorValue::UnknownColorSpace(space.name().to_string())
    })
}

static MATRICES: LazyLock<MatrixTable> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(RgbSpace::ALL.len() * Illuminant::ALL.len());
    for space in RgbSpace::ALL {
        for illuminant in Illuminant::ALL {
            match RgbMatrices::adapted(space, illuminant.white_point()) {
                Ok(matrices) => {
                    table.insert((space, illuminant), matrices);
                }
                Err(err) => log::debug!("no matrices for {space} under {illuminant}: {err}"),
            }
        }
    }
    log::debug!("built {} RGB/XYZ matrix pairs", table.len());
    table
});

fn chromaticity_to_xyz(c: Chromaticity) -> Result<Components> {
    check_range(c.x, 0.0, 1.0)?;
    check_range(c.y, 0.0, 1.0)?;
    if c.y == 0.0 {
        return Err(InvalidColorValue::OutOfRange {
            value: c.y,
            low: Component::MIN_POSITIVE,
            high: 1.0,
        });
    }
    Ok(Components(c.x / c.y, 1.0, (1.0 - c.x - c.y) / c.y))
}

/// Build the matrix converting linear RGB with the given primaries to XYZ
/// relative to `white`.
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: Components) -> Result<Transform> {
    for value in [white.0, white.1, white.2] {
        check_finite(value)?;
    }

    let r = chromaticity_to_xyz(primaries.red)?;
    let g = chromaticity_to_xyz(primaries.green)?;
    let b = chromaticity_to_xyz(primaries.blue)?;

    #[rustfmt::skip]
    let unweighted = matrix_3x3(
        r.0, g.0, b.0,
        r.1, g.1, b.1,
        r.2, g.2, b.2,
    );

    // Scale each primary so that RGB (1, 1, 1) lands on the white.
    let Components(sr, sg, sb) = transform(&invert_3x3(&unweighted)?, white);
    Ok(diagonal(sr, sg, sb).then(&unweighted))
}

/// Build the matrix converting XYZ relative to `white` to linear RGB with
/// the given primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries, white: Components) -> Result<Transform> {
    invert_3x3(&rgb_to_xyz_matrix(primaries, white)?)
}

/// The Bradford cone response matrix.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const BRADFORD: Transform = matrix_3x3(
     0.8951,  0.2664, -0.1614,
    -0.7502,  1.7135,  0.0367,
     0.0389, -0.0685,  1.0296,
);

/// The Bradford chromatic adaptation from XYZ relative to `from` to XYZ
/// relative to `to`.
pub fn bradford(from: Components, to: Components) -> Result<Transform> {
    let source = transform(&BRADFORD, from);
    let destination = transform(&BRADFORD, to);
    if source.0 == 0.0 || source.1 == 0.0 || source.2 == 0.0 {
        return Err(InvalidColorValue::MalformedReferenceWhite(format!(
            "cone response of {from} has a zero channel"
        )));
    }
    let scale = diagonal(
        destination.0 / source.0,
        destination.1 / source.1,
        destination.2 / source.2,
    );
    Ok(BRADFORD.then(&scale).then(&invert_3x3(&BRADFORD)?))
}

/// Adapt an XYZ color from one reference white to another.
pub fn adapt_xyz(xyz: Xyz, from: &ReferenceWhite, to: &ReferenceWhite) -> Result<Xyz> {
    use crate::models::Model;

    for value in [xyz.x, xyz.y, xyz.z] {
        check_finite(value)?;
    }
    let adaptation = bradford(from.white_point()?, to.white_point()?)?;
    Ok(Xyz::from_components(transform(&adaptation, xyz.to_components())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, math::rows};

    #[test]
    fn cie_constants() {
        assert_component_eq!(KAPPA, 903.2962962962963);
        assert_component_eq!(EPSILON, 0.008856451679035631);
    }

    #[test]
    fn illuminant_names() {
        assert_eq!("D65".parse::<Illuminant>().unwrap(), Illuminant::D65);
        assert_eq!(" icc ".parse::<Illuminant>().unwrap(), Illuminant::Icc);
        assert_eq!(
            "d66".parse::<Illuminant>(),
            Err(InvalidColorValue::UnknownReferenceWhite("d66".to_string()))
        );
    }

    #[test]
    fn space_names_and_synonyms() {
        assert_eq!("sRGB".parse::<RgbSpace>().unwrap(), RgbSpace::Srgb);
        assert_eq!("NTSC".parse::<RgbSpace>().unwrap(), RgbSpace::NtscRgb);
        assert_eq!("Adobe RGB".parse::<RgbSpace>().unwrap(), RgbSpace::AdobeRgb1998);
        assert_eq!("Adobe RGB (1998)".parse::<RgbSpace>().unwrap(), RgbSpace::AdobeRgb1998);
        assert_eq!("SECAM".parse::<RgbSpace>().unwrap(), RgbSpace::PalSecamRgb);
        assert_eq!("PAL/SECAM RGB".parse::<RgbSpace>().unwrap(), RgbSpace::PalSecamRgb);
        assert_eq!("SMPTE-C".parse::<RgbSpace>().unwrap(), RgbSpace::SmpteCRgb);
        assert_eq!("Wide Gamut".parse::<RgbSpace>().unwrap(), RgbSpace::WideGamutRgb);
        assert_eq!("ProPhoto".parse::<RgbSpace>().unwrap(), RgbSpace::ProPhotoRgb);
        assert_eq!("eciRGB v2".parse::<RgbSpace>().unwrap(), RgbSpace::EciRgbV2);
        assert!(matches!(
            "cmyk".parse::<RgbSpace>(),
            Err(InvalidColorValue::UnknownColorSpace(_))
        ));
        for space in RgbSpace::ALL {
            assert_eq!(space.name().parse::<RgbSpace>().unwrap(), space);
        }
    }

    #[test]
    fn custom_white_is_validated() {
        assert!(ReferenceWhite::custom(&[0.95, 1.0, 1.09]).is_ok());
        assert!(matches!(
            ReferenceWhite::custom(&[0.95, 1.0]),
            Err(InvalidColorValue::MalformedReferenceWhite(_))
        ));
        assert!(ReferenceWhite::custom(&[0.95, 0.0, 1.09]).is_err());
        assert!(ReferenceWhite::custom(&[0.95, Component::NAN, 1.09]).is_err());
        assert!(ReferenceWhite::Custom([-1.0, 1.0, 1.0]).white_point().is_err());
    }

    #[test]
    fn reference_white_deserializes_from_name_or_vector() {
        let named: ReferenceWhite = serde_json::from_str("\"D50\"").unwrap();
        assert_eq!(named, ReferenceWhite::Named(Illuminant::D50));
        let custom: ReferenceWhite = serde_json::from_str("[0.9, 1.0, 1.1]").unwrap();
        assert_eq!(custom, ReferenceWhite::Custom([0.9, 1.0, 1.1]));
        assert!(serde_json::from_str::<ReferenceWhite>("[0.9, 1.0]").is_err());
        assert!(serde_json::from_str::<ReferenceWhite>("\"nope\"").is_err());
        assert_eq!(serde_json::to_string(&named).unwrap(), "\"d50\"");
    }

    #[test]
    fn companding_round_trips() {
        for companding in [Companding::Srgb, Companding::LStar, Companding::Gamma(2.2)] {
            for value in [0.0, 0.001, 0.05, 0.5, 1.0] {
                assert_component_eq!(companding.to_encoded(companding.to_linear(value)), value);
            }
        }
    }

    #[test]
    fn srgb_companding_known_values() {
        assert_component_eq!(Companding::Srgb.to_linear(0.5), 0.21404114048223255);
        assert_component_eq!(Companding::Srgb.to_encoded(0.21404114048223255), 0.5);
        assert_component_eq!(Companding::Srgb.to_encoded(1.0), 1.0);
    }

    #[test]
    fn srgb_d65_matrix() {
        let m = rows(&RgbSpace::Srgb.matrices(&Illuminant::D65.into()).unwrap().to_xyz);
        assert_component_eq!(m[0][0], 0.4124564, 1.0e-4);
        assert_component_eq!(m[0][1], 0.3575761, 1.0e-4);
        assert_component_eq!(m[0][2], 0.1804375, 1.0e-4);
        assert_component_eq!(m[1][0], 0.2126729, 1.0e-4);
        assert_component_eq!(m[1][1], 0.7151522, 1.0e-4);
        assert_component_eq!(m[1][2], 0.0721750, 1.0e-4);
    }

    #[test]
    fn srgb_d50_matrix_is_bradford_adapted() {
        let m = rows(&RgbSpace::Srgb.matrices(&Illuminant::D50.into()).unwrap().to_xyz);
        assert_component_eq!(m[0][0], 0.4360747, 1.0e-4);
        assert_component_eq!(m[0][1], 0.3850649, 1.0e-4);
        assert_component_eq!(m[0][2], 0.1430804, 1.0e-4);
    }

    #[test]
    fn white_maps_to_reference_white() {
        for space in RgbSpace::ALL {
            for illuminant in Illuminant::ALL {
                let matrices = space.matrices(&illuminant.into()).unwrap();
                let white = transform(&matrices.to_xyz, Components(1.0, 1.0, 1.0));
                let expected = illuminant.white_point();
                assert_component_eq!(white.0, expected.0, 1.0e-9);
                assert_component_eq!(white.1, expected.1, 1.0e-9);
                assert_component_eq!(white.2, expected.2, 1.0e-9);
            }
        }
    }

    #[test]
    fn missing_table_entry_is_an_unknown_space() {
        assert_eq!(
            lookup(&MatrixTable::new(), RgbSpace::BruceRgb, Illuminant::A),
            Err(InvalidColorValue::UnknownColorSpace("brucergb".to_string()))
        );
        assert_eq!(
            lookup(&MATRICES, RgbSpace::BruceRgb, Illuminant::A),
            RgbSpace::BruceRgb.matrices(&Illuminant::A.into())
        );
    }

    #[test]
    fn custom_white_matches_named_white() {
        let named = RgbSpace::AdobeRgb1998
            .matrices(&Illuminant::D50.into())
            .unwrap();
        let custom = RgbSpace::AdobeRgb1998
            .matrices(&ReferenceWhite::custom(&[0.96422, 1.0, 0.82521]).unwrap())
            .unwrap();
        let (a, b) = (rows(&named.to_xyz), rows(&custom.to_xyz));
        for r in 0..3 {
            for c in 0..3 {
                assert_component_eq!(a[r][c], b[r][c]);
            }
        }
    }

    #[test]
    fn from_xyz_inverts_to_xyz() {
        let m = xyz_to_rgb_matrix(&RgbSpace::Srgb.primaries(), Illuminant::D65.white_point())
            .unwrap();
        let rgb = transform(&m, Illuminant::D65.white_point());
        assert_component_eq!(rgb.0, 1.0);
        assert_component_eq!(rgb.1, 1.0);
        assert_component_eq!(rgb.2, 1.0);
    }

    #[test]
    fn degenerate_primaries_fail() {
        let p = primaries(xy(0.64, 0.0), xy(0.3, 0.6), xy(0.15, 0.06));
        assert!(rgb_to_xyz_matrix(&p, Illuminant::D65.white_point()).is_err());
        let collinear = primaries(xy(0.2, 0.2), xy(0.3, 0.3), xy(0.4, 0.4));
        assert_eq!(
            rgb_to_xyz_matrix(&collinear, Illuminant::D65.white_point()),
            Err(InvalidColorValue::SingularMatrix)
        );
    }

    #[test]
    fn adapt_to_same_white_is_identity() {
        let xyz = Xyz::new(0.3, 0.4, 0.5);
        let d65 = ReferenceWhite::default();
        let adapted = adapt_xyz(xyz, &d65, &d65).unwrap();
        assert_component_eq!(adapted.x, 0.3);
        assert_component_eq!(adapted.y, 0.4);
        assert_component_eq!(adapted.z, 0.5);
    }

    #[test]
    fn adapt_white_to_white() {
        let d65 = Illuminant::D65.white_point();
        let adapted = adapt_xyz(
            Xyz::from(d65),
            &Illuminant::D65.into(),
            &Illuminant::D50.into(),
        )
        .unwrap();
        assert_component_eq!(adapted.x, 0.96422);
        assert_component_eq!(adapted.y, 1.0);
        assert_component_eq!(adapted.z, 0.82521);
    }
}
