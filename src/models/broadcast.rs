//! Luma and color difference encodings used by broadcast video and JPEG:
//! analog YPbPr, digital YCbCr, and the studio range RGB legalizers.

use std::fmt;

use crate::{
    color::{round_if, Component, Components},
    error::{InvalidColorValue, Result},
    models::{Model, Rgb},
    options::Options,
    util::{check_range, max_for_bits, scale_range},
};

/// The weights of the blue and red channels in luma. The green weight is
/// whatever remains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LumaCoefficients {
    kb: Component,
    kr: Component,
}

impl LumaCoefficients {
    /// ITU-R BT.709.
    pub const REC709: Self = Self {
        kb: 0.0722,
        kr: 0.2126,
    };

    /// ITU-R BT.2020.
    pub const REC2020: Self = Self {
        kb: 0.0593,
        kr: 0.2627,
    };

    /// Create coefficients from the blue and red weights. Both must lie in
    /// `[0, 1]` and leave a positive weight for green.
    pub fn new(kb: Component, kr: Component) -> Result<Self> {
        check_range(kb, 0.0, 1.0)?;
        check_range(kr, 0.0, 1.0)?;
        let kg = 1.0 - kb - kr;
        if kg <= 0.0 {
            return Err(InvalidColorValue::OutOfRange {
                value: kg,
                low: Component::MIN_POSITIVE,
                high: 1.0,
            });
        }
        Ok(Self { kb, kr })
    }

    /// The blue weight.
    pub fn kb(&self) -> Component {
        self.kb
    }

    /// The red weight.
    pub fn kr(&self) -> Component {
        self.kr
    }

    /// The green weight, `1 - kb - kr`.
    pub fn kg(&self) -> Component {
        1.0 - self.kb - self.kr
    }
}

/// The code values luma and chroma are mapped onto in YCbCr.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeLimits {
    /// Code value of black.
    pub y_lower: Component,
    /// Code value of white.
    pub y_upper: Component,
    /// Code value of the most negative color difference.
    pub c_lower: Component,
    /// Code value of the most positive color difference.
    pub c_upper: Component,
}

impl RangeLimits {
    /// Create new range limits.
    pub const fn new(
        y_lower: Component,
        y_upper: Component,
        c_lower: Component,
        c_upper: Component,
    ) -> Self {
        Self {
            y_lower,
            y_upper,
            c_lower,
            c_upper,
        }
    }

    /// Use the whole of `[0, depth]` for every channel.
    pub const fn full(depth: Component) -> Self {
        Self::new(0.0, depth, 0.0, depth)
    }
}

/// A broadcast standard defining luma coefficients and studio ranges per bit
/// depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BroadcastStandard {
    /// ITU-R BT.709, HDTV.
    Rec709,
    /// ITU-R BT.2020, UHDTV.
    Rec2020,
}

impl BroadcastStandard {
    /// Name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rec709 => "Rec709",
            Self::Rec2020 => "Rec2020",
        }
    }

    /// The luma coefficients of the standard.
    pub const fn coefficients(self) -> LumaCoefficients {
        match self {
            Self::Rec709 => LumaCoefficients::REC709,
            Self::Rec2020 => LumaCoefficients::REC2020,
        }
    }

    /// The bit depths the standard defines code values for, smallest first.
    pub const fn bit_depths(self) -> &'static [u32; 2] {
        match self {
            Self::Rec709 => &[8, 10],
            Self::Rec2020 => &[10, 12],
        }
    }

    /// The studio ranges at `bit_depth`.
    pub fn ranges(self, bit_depth: u32) -> Result<RangeLimits> {
        match (self, bit_depth) {
            (Self::Rec709, 8) => Ok(RangeLimits::new(16.0, 235.0, 16.0, 240.0)),
            (Self::Rec709, 10) | (Self::Rec2020, 10) => {
                Ok(RangeLimits::new(64.0, 940.0, 64.0, 960.0))
            }
            (Self::Rec2020, 12) => Ok(RangeLimits::new(256.0, 3760.0, 256.0, 3840.0)),
            _ => Err(InvalidColorValue::UnsupportedBitDepth {
                standard: self.name(),
                bit_depth,
                supported: self.bit_depths(),
            }),
        }
    }

    /// The defined bit depth whose full range is closest to `depth`. Ties go
    /// to the larger bit depth.
    fn closest_bit_depth(self, depth: Component) -> u32 {
        let [smaller, larger] = *self.bit_depths();
        let distance = |bits: u32| (depth - (1_u64 << bits) as Component).abs();
        if distance(smaller) < distance(larger) {
            smaller
        } else {
            larger
        }
    }
}

impl fmt::Display for BroadcastStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

colorist_macros::gen_model! {
    /// Analog luma and color differences. Luma is in `[0, 1]` and both color
    /// differences in `[-0.5, 0.5]`.
    pub struct YPbPr {
        /// The luma channel.
        pub y: Component,
        /// The blue difference channel.
        pub pb: Component,
        /// The red difference channel.
        pub pr: Component,
    }
}

colorist_macros::gen_model! {
    /// Digital luma and color differences as code values within a
    /// [`RangeLimits`].
    pub struct YCbCr {
        /// The luma channel.
        pub y: Component,
        /// The blue difference channel.
        pub cb: Component,
        /// The red difference channel.
        pub cr: Component,
    }
}

impl Rgb {
    /// Convert this color to YPbPr with the given luma coefficients. The
    /// result is never rounded.
    pub fn to_ypbpr(&self, coefficients: LumaCoefficients, options: &Options) -> Result<YPbPr> {
        let Components(r, g, b) = self.normalize(options)?;
        let LumaCoefficients { kb, kr } = coefficients;
        let y = kr * r + coefficients.kg() * g + kb * b;
        Ok(YPbPr::new(
            y.clamp(0.0, 1.0),
            (0.5 * (b - y) / (1.0 - kb)).clamp(-0.5, 0.5),
            (0.5 * (r - y) / (1.0 - kr)).clamp(-0.5, 0.5),
        ))
    }

    /// Convert this color to full range YCbCr, where every channel uses
    /// `[0, color_depth]`.
    pub fn to_ycbcr(&self, coefficients: LumaCoefficients, options: &Options) -> Result<YCbCr> {
        let limits = RangeLimits::full(options.depth()?);
        self.to_ypbpr(coefficients, options)?.to_ycbcr(&limits, options)
    }

    /// Convert this color to studio range YCbCr of a broadcast standard at
    /// `bit_depth`.
    pub fn to_broadcast_ycbcr(
        &self,
        standard: BroadcastStandard,
        bit_depth: u32,
        options: &Options,
    ) -> Result<YCbCr> {
        let limits = standard.ranges(bit_depth)?;
        self.to_ypbpr(standard.coefficients(), options)?
            .to_ycbcr(&limits, options)
    }

    /// Convert this color to Rec.709 YCbCr at 8 or 10 bits.
    ///
    /// ```
    /// use colorist::{Options, Rgb, YCbCr};
    /// let ycbcr = Rgb::new(255.0, 0.0, 0.0).to_rec709_ycbcr(8, &Options::default()).unwrap();
    /// assert_eq!(ycbcr, YCbCr::new(63.0, 102.0, 240.0));
    /// ```
    pub fn to_rec709_ycbcr(&self, bit_depth: u32, options: &Options) -> Result<YCbCr> {
        self.to_broadcast_ycbcr(BroadcastStandard::Rec709, bit_depth, options)
    }

    /// Convert this color to Rec.2020 YCbCr at 10 or 12 bits.
    pub fn to_rec2020_ycbcr(&self, bit_depth: u32, options: &Options) -> Result<YCbCr> {
        self.to_broadcast_ycbcr(BroadcastStandard::Rec2020, bit_depth, options)
    }

    /// Convert this color to full range JPEG (JFIF) YCbCr in `[0, 255]`.
    pub fn to_jpeg_ycbcr(&self, options: &Options) -> Result<YCbCr> {
        let Components(r, g, b) = self.normalize(options)?.map(|v| v * 255.0);
        let ycbcr = Components(
            0.299 * r + 0.587 * g + 0.114 * b,
            128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
            128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
        );
        Ok(YCbCr::from(ycbcr.map(|v| v.clamp(0.0, 255.0))).rounded(options.round))
    }

    /// Compress this color into the studio range of `standard`. The output bit
    /// depth is the defined one closest to the color depth.
    pub fn to_legal_rgb(&self, standard: BroadcastStandard, options: &Options) -> Result<Rgb> {
        let depth = options.depth()?;
        let rgb = self.normalize(options)?;
        let limits = standard.ranges(standard.closest_bit_depth(depth))?;
        let range = limits.y_upper - limits.y_lower;
        Ok(Rgb::from(rgb.map(|v| limits.y_lower + range * v)).rounded(options.round))
    }

    /// Expand studio range RGB of `standard` at `bit_depth` onto
    /// `[0, color_depth]`. Values outside the studio range are clamped to
    /// black and white.
    pub fn from_legal_rgb(
        &self,
        standard: BroadcastStandard,
        bit_depth: u32,
        options: &Options,
    ) -> Result<Rgb> {
        let depth = options.depth()?;
        let limits = standard.ranges(bit_depth)?;
        let max = max_for_bits(bit_depth)?;
        for channel in [self.red, self.green, self.blue] {
            check_range(channel, 0.0, max)?;
        }
        let range = limits.y_upper - limits.y_lower;
        let rgb = self.to_components().map(|v| {
            (v.clamp(limits.y_lower, limits.y_upper) - limits.y_lower) * depth / range
        });
        Ok(Rgb::from(rgb).rounded(options.round))
    }

    /// Compress this color into the Rec.709 studio range at 8 or 10 bits.
    pub fn to_rec709_rgb(&self, options: &Options) -> Result<Rgb> {
        self.to_legal_rgb(BroadcastStandard::Rec709, options)
    }

    /// Expand Rec.709 studio range RGB at 8 or 10 bits.
    pub fn from_rec709_rgb(&self, bit_depth: u32, options: &Options) -> Result<Rgb> {
        self.from_legal_rgb(BroadcastStandard::Rec709, bit_depth, options)
    }

    /// Compress this color into the Rec.2020 studio range at 10 or 12 bits.
    pub fn to_rec2020_rgb(&self, options: &Options) -> Result<Rgb> {
        self.to_legal_rgb(BroadcastStandard::Rec2020, options)
    }

    /// Expand Rec.2020 studio range RGB at 10 or 12 bits.
    pub fn from_rec2020_rgb(&self, bit_depth: u32, options: &Options) -> Result<Rgb> {
        self.from_legal_rgb(BroadcastStandard::Rec2020, bit_depth, options)
    }
}

impl YPbPr {
    fn check(&self) -> Result<()> {
        check_range(self.y, 0.0, 1.0)?;
        check_range(self.pb, -0.5, 0.5)?;
        check_range(self.pr, -0.5, 0.5)
    }

    /// Convert this color to RGB with the given luma coefficients. Channels
    /// outside the RGB gamut are clamped.
    pub fn to_rgb(&self, coefficients: LumaCoefficients, options: &Options) -> Result<Rgb> {
        self.check()?;
        let LumaCoefficients { kb, kr } = coefficients;
        let r = self.y + 2.0 * (1.0 - kr) * self.pr;
        let b = self.y + 2.0 * (1.0 - kb) * self.pb;
        let g = (self.y - kr * r - kb * b) / coefficients.kg();
        Rgb::from_normalized(Components(r, g, b).map(|v| v.clamp(0.0, 1.0)), options)
    }

    /// Map this color onto the code values of `limits`. Only `options.round`
    /// is used.
    pub fn to_ycbcr(&self, limits: &RangeLimits, options: &Options) -> Result<YCbCr> {
        self.check()?;
        let RangeLimits {
            y_lower,
            y_upper,
            c_lower,
            c_upper,
        } = *limits;
        Ok(YCbCr::new(
            scale_range(self.y, 0.0, 1.0, y_lower, y_upper, options.round)?,
            scale_range(self.pb, -0.5, 0.5, c_lower, c_upper, options.round)?,
            scale_range(self.pr, -0.5, 0.5, c_lower, c_upper, options.round)?,
        ))
    }
}

impl YCbCr {
    /// Map the code values of `limits` back to YPbPr. The result is never
    /// rounded.
    pub fn to_ypbpr(&self, limits: &RangeLimits) -> Result<YPbPr> {
        let RangeLimits {
            y_lower,
            y_upper,
            c_lower,
            c_upper,
        } = *limits;
        Ok(YPbPr::new(
            scale_range(self.y, y_lower, y_upper, 0.0, 1.0, false)?,
            scale_range(self.cb, c_lower, c_upper, -0.5, 0.5, false)?,
            scale_range(self.cr, c_lower, c_upper, -0.5, 0.5, false)?,
        ))
    }

    /// Convert full range YCbCr, where every channel uses
    /// `[0, color_depth]`, to RGB.
    pub fn to_rgb(&self, coefficients: LumaCoefficients, options: &Options) -> Result<Rgb> {
        let limits = RangeLimits::full(options.depth()?);
        self.to_ypbpr(&limits)?.to_rgb(coefficients, options)
    }

    /// Convert studio range YCbCr of a broadcast standard at `bit_depth` to
    /// RGB.
    pub fn broadcast_to_rgb(
        &self,
        standard: BroadcastStandard,
        bit_depth: u32,
        options: &Options,
    ) -> Result<Rgb> {
        let limits = standard.ranges(bit_depth)?;
        self.to_ypbpr(&limits)?
            .to_rgb(standard.coefficients(), options)
    }

    /// Convert Rec.709 YCbCr at 8 or 10 bits to RGB.
    pub fn rec709_to_rgb(&self, bit_depth: u32, options: &Options) -> Result<Rgb> {
        self.broadcast_to_rgb(BroadcastStandard::Rec709, bit_depth, options)
    }

    /// Convert Rec.2020 YCbCr at 10 or 12 bits to RGB.
    pub fn rec2020_to_rgb(&self, bit_depth: u32, options: &Options) -> Result<Rgb> {
        self.broadcast_to_rgb(BroadcastStandard::Rec2020, bit_depth, options)
    }

    /// Re-encode studio range YCbCr from one broadcast standard and bit depth
    /// to another through RGB.
    pub fn convert_standard(
        &self,
        from: BroadcastStandard,
        bits_in: u32,
        to: BroadcastStandard,
        bits_out: u32,
        round: bool,
    ) -> Result<YCbCr> {
        // Fail on the output bit depth before doing any work.
        to.ranges(bits_out)?;
        let intermediate = Options::default().unrounded();
        let rgb = self.broadcast_to_rgb(from, bits_in, &intermediate)?;
        rgb.to_broadcast_ycbcr(to, bits_out, &intermediate.with_round(round))
    }

    /// Re-encode Rec.709 YCbCr as Rec.2020 YCbCr.
    pub fn rec709_to_rec2020(&self, bits_in: u32, bits_out: u32, round: bool) -> Result<YCbCr> {
        self.convert_standard(
            BroadcastStandard::Rec709,
            bits_in,
            BroadcastStandard::Rec2020,
            bits_out,
            round,
        )
    }

    /// Re-encode Rec.2020 YCbCr as Rec.709 YCbCr.
    pub fn rec2020_to_rec709(&self, bits_in: u32, bits_out: u32, round: bool) -> Result<YCbCr> {
        self.convert_standard(
            BroadcastStandard::Rec2020,
            bits_in,
            BroadcastStandard::Rec709,
            bits_out,
            round,
        )
    }

    /// Convert full range JPEG (JFIF) YCbCr in `[0, 255]` to RGB. Channels
    /// outside the RGB gamut are clamped.
    pub fn jpeg_to_rgb(&self, options: &Options) -> Result<Rgb> {
        let depth = options.depth()?;
        for channel in [self.y, self.cb, self.cr] {
            check_range(channel, 0.0, 255.0)?;
        }
        let cb = self.cb - 128.0;
        let cr = self.cr - 128.0;
        let rgb = Components(
            self.y + 1.402 * cr,
            self.y - 0.344136 * cb - 0.714136 * cr,
            self.y + 1.772 * cb,
        );
        Ok(Rgb::from(rgb.map(|v| round_if(v.clamp(0.0, 255.0) / 255.0 * depth, options.round))))
    }
}
