// ============================================================================
// Fixed-Point Encoder
// Decimal value -> raw two's-complement word (inverse of the decoder)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::{FixedPointFormat, RawBits};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Quantize `value` into the raw word of `format`.
///
/// Quantization truncates toward negative infinity (`AP_TRN`), so decoding
/// the result never overshoots the input and stays within `2^-FW` of it.
///
/// # Errors
/// Returns `Overflow` if the value is outside the representable range.
///
/// # Example
/// ```
/// use fixpt_inspect::numeric::{encode_decimal, FixedPointFormat};
/// use rust_decimal::Decimal;
///
/// let fmt = FixedPointFormat::signed(8, 4).unwrap();
/// let raw = encode_decimal(Decimal::new(-1, 0), fmt).unwrap();
/// assert_eq!(raw.to_hex(), "0xf0");
/// ```
pub fn encode_decimal(value: Decimal, format: FixedPointFormat) -> NumericResult<RawBits> {
    let fw = format.fractional_bits();
    let scaled = scale_up(value, fw)?.floor();
    let units = scaled.to_i128().ok_or(NumericError::Overflow)?;

    let (min, max) = unit_range(&format);
    if units < min || units > max {
        return Err(NumericError::Overflow);
    }

    // Two's-complement wrap of a negative unit count into W bits
    let raw = (units as u64) & format.width_mask();
    Ok(RawBits::new(raw))
}

/// `value * 2^fw`, in word-sized steps so each multiplier fits a `u64`.
fn scale_up(value: Decimal, fw: u32) -> NumericResult<Decimal> {
    let mut scaled = value;
    let mut remaining = fw;
    while remaining > 0 {
        let step = remaining.min(32);
        scaled = scaled
            .checked_mul(Decimal::from(1u64 << step))
            .ok_or(NumericError::Overflow)?;
        remaining -= step;
    }
    Ok(scaled)
}

/// Inclusive range of raw unit counts for the format.
fn unit_range(format: &FixedPointFormat) -> (i128, i128) {
    let w = format.width();
    if format.is_signed() {
        let half = 1i128 << (w - 1);
        (-half, half - 1)
    } else {
        (0, (1i128 << w) - 1)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::decoder::decode;
    use crate::numeric::format::{low_mask, Signedness};
    use proptest::prelude::*;

    // FW <= 28 keeps every decoded value exactly representable as a Decimal
    fn layout_and_raw() -> impl Strategy<Value = (u32, u32, u64)> {
        (1u32..=28)
            .prop_flat_map(|w| (Just(w), 0..=w))
            .prop_flat_map(|(w, iw)| (Just(w), Just(iw), 0..=low_mask(w)))
    }

    proptest! {
        #[test]
        fn decimal_round_trip_is_bit_exact((w, iw, raw) in layout_and_raw()) {
            for signedness in [Signedness::Signed, Signedness::Unsigned] {
                let fmt = FixedPointFormat::new(w, iw, signedness).unwrap();
                let exact = decode(RawBits::new(raw), fmt).unwrap().to_decimal().unwrap();
                prop_assert_eq!(encode_decimal(exact, fmt).unwrap(), RawBits::new(raw));
            }
        }
    }
}
