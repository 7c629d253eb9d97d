//! The single error type returned by every fallible operation.

use thiserror::Error;

use crate::color::Component;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, InvalidColorValue>;

/// A caller supplied a color value or configuration the crate can not work
/// with. Validation happens before any arithmetic, so an error always means no
/// output was produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidColorValue {
    /// A value fell outside the range the operation accepts.
    #[error("invalid color value, {value} does not fall within range {low} - {high}")]
    OutOfRange {
        /// The offending value.
        value: Component,
        /// Lower limit of the accepted range.
        low: Component,
        /// Upper limit of the accepted range.
        high: Component,
    },

    /// A range was specified with its limits in the wrong order.
    #[error("invalid range, lower limit {low} is greater than upper limit {high}")]
    InvalidRange {
        /// Lower limit of the range.
        low: Component,
        /// Upper limit of the range.
        high: Component,
    },

    /// A value was NaN or infinite where a finite number is required.
    #[error("invalid color value, {0} is not a finite number")]
    NotANumber(Component),

    /// A hexadecimal color could not be parsed.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),

    /// The name does not match any known RGB working space.
    #[error("unknown color space {0:?}")]
    UnknownColorSpace(String),

    /// The name does not match any known standard illuminant.
    #[error("unknown reference white {0:?}")]
    UnknownReferenceWhite(String),

    /// An explicit reference white was not three finite, positive values.
    #[error("malformed reference white vector: {0}")]
    MalformedReferenceWhite(String),

    /// A broadcast standard was asked for a bit depth it does not define.
    #[error("invalid bit depth {bit_depth}, {standard} bit depth must be one of {supported:?}")]
    UnsupportedBitDepth {
        /// Name of the standard.
        standard: &'static str,
        /// The requested bit depth.
        bit_depth: u32,
        /// The bit depths the standard defines.
        supported: &'static [u32],
    },

    /// A matrix with a zero determinant can not be inverted.
    #[error("matrix is singular and can not be inverted")]
    SingularMatrix,

    /// The name does not match any blend mode.
    #[error("unrecognized color blend method {0:?}")]
    UnknownBlendMode(String),

    /// Blend operands were not of the kind the blend mode works on.
    #[error("blend mode {0} can not blend the given colors")]
    BlendModeMismatch(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_includes_value_and_limits() {
        let err = InvalidColorValue::OutOfRange {
            value: 256.0,
            low: 0.0,
            high: 255.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("256"), "missing value in: {msg}");
        assert!(msg.contains("0 - 255"), "missing range in: {msg}");
    }

    #[test]
    fn unsupported_bit_depth_lists_supported_depths() {
        let err = InvalidColorValue::UnsupportedBitDepth {
            standard: "Rec709",
            bit_depth: 9,
            supported: &[8, 10],
        };
        let msg = format!("{err}");
        assert!(msg.contains("Rec709"), "missing standard in: {msg}");
        assert!(msg.contains('9'), "missing bit depth in: {msg}");
        assert!(msg.contains("[8, 10]"), "missing supported depths in: {msg}");
    }

    #[test]
    fn malformed_hex_quotes_input() {
        let msg = InvalidColorValue::MalformedHex("zz".into()).to_string();
        assert!(msg.contains("\"zz\""), "missing input in: {msg}");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InvalidColorValue>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<InvalidColorValue>();
    }
}
