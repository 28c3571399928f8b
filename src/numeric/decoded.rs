// ============================================================================
// Decoded Value
// Result of decoding one raw fixed-point word
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::{FixedPointFormat, RawBits};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decoded fixed-point value.
///
/// Holds the recovered sign and magnitude together with the original raw
/// bits, so the display string always shows the two's-complement pattern as
/// it sits in memory.
///
/// Rendered as `<sign><magnitude> [<raw_hex>] <W:w,IW:iw>`, e.g.
/// `-1.0 [0xf0] <W:8,IW:4>`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedValue {
    raw: RawBits,
    format: FixedPointFormat,
    negative: bool,
    magnitude_bits: u64,
    magnitude: f64,
}

impl DecodedValue {
    pub(crate) fn new(
        raw: RawBits,
        format: FixedPointFormat,
        negative: bool,
        magnitude_bits: u64,
    ) -> Self {
        Self {
            raw,
            format,
            negative,
            magnitude_bits,
            magnitude: scale_to_f64(magnitude_bits, format.fractional_bits()),
        }
    }

    /// Signed floating-point approximation of the stored value.
    #[inline]
    pub fn float_approximation(&self) -> f64 {
        if self.negative {
            -self.magnitude
        } else {
            self.magnitude
        }
    }

    /// Absolute value as a float.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Magnitude as an unsigned fixed-point word in the same format.
    #[inline]
    pub fn magnitude_bits(&self) -> u64 {
        self.magnitude_bits
    }

    /// True only for signed formats whose sign bit was set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The original raw bits, never the recovered magnitude.
    #[inline]
    pub fn raw(&self) -> RawBits {
        self.raw
    }

    /// Lowercase `0x`-prefixed hex of the original raw bits.
    pub fn raw_hex(&self) -> String {
        self.raw.to_hex()
    }

    #[inline]
    pub fn format(&self) -> FixedPointFormat {
        self.format
    }

    /// Exact decimal form of the value.
    ///
    /// `m / 2^FW` is rewritten as `m * 5^FW / 10^FW`, which is exact as long as
    /// the numerator fits in the 96-bit decimal mantissa and `FW <= 28`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` when the value has no exact `Decimal` form.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let fw = self.format.fractional_bits();
        let numerator = 5i128
            .checked_pow(fw)
            .and_then(|p| p.checked_mul(self.magnitude_bits as i128))
            .ok_or(NumericError::PrecisionLoss)?;
        let signed = if self.negative { -numerator } else { numerator };
        let mut d = Decimal::try_from_i128_with_scale(signed, fw)
            .map_err(|_| NumericError::PrecisionLoss)?;
        d.normalize_assign();
        Ok(d)
    }
}

/// `bits / 2^fw` with one rounding step (the integer-to-float conversion).
/// Scaling by a power of two is exact for every `fw <= 64`.
#[inline]
pub(crate) fn scale_to_f64(bits: u64, fw: u32) -> f64 {
    bits as f64 / (1u128 << fw) as f64
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{}{:?} [{}] {}",
            sign,
            self.magnitude,
            self.raw_hex(),
            self.format
        )
    }
}
