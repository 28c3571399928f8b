// ============================================================================
// Fixed-Point Decoder
// Raw bit pattern -> sign, magnitude and float approximation
// ============================================================================
//
// Negative values are recovered with a per-field complement: the fractional
// field is complemented independently of the integer field, and the integer
// field absorbs a carry whenever the fraction is non-zero. This matches the
// way HLS fixed-point types negate and keeps the recovered magnitude
// bit-exact before the single float conversion.

use super::decoded::DecodedValue;
use super::errors::{NumericError, NumericResult};
use super::format::{low_mask, FixedPointFormat, RawBits, Signedness};

/// Per-field two's-complement inversion: `0` if `value == 0`, otherwise
/// `2^width - value`, reduced modulo `2^width`.
///
/// The reduction makes `complement(2^width, width) == 0`, which is the case
/// hit when the carry pushes a saturated integer field to `2^IW`.
///
/// Defined for every `width`. From 128 bits up, `2^width` is a multiple of
/// `2^128`, so the result is the negation of `value` modulo `2^128`.
#[inline]
pub const fn complement(value: u128, width: u32) -> u128 {
    if value == 0 {
        return 0;
    }
    match 1u128.checked_shl(width) {
        Some(modulus) => (modulus - (value % modulus)) % modulus,
        None => value.wrapping_neg(),
    }
}

/// Decode an unsigned fixed-point word.
///
/// # Errors
/// - `SignednessMismatch` if `format` is signed
/// - `RawOutOfRange` if `raw` has bits above `W`
pub fn decode_unsigned(raw: RawBits, format: FixedPointFormat) -> NumericResult<DecodedValue> {
    if format.is_signed() {
        return Err(NumericError::SignednessMismatch);
    }
    let raw = raw.check_fits(&format)?;
    Ok(DecodedValue::new(raw, format, false, raw.value()))
}

/// Decode a signed (two's-complement) fixed-point word.
///
/// With the sign bit clear the result equals the unsigned decode. With it set
/// the magnitude is recovered field by field (see module notes) and the
/// result is negated; `raw_hex` still shows the original bits.
///
/// # Errors
/// - `SignednessMismatch` if `format` is unsigned
/// - `RawOutOfRange` if `raw` has bits above `W`
pub fn decode_signed(raw: RawBits, format: FixedPointFormat) -> NumericResult<DecodedValue> {
    if !format.is_signed() {
        return Err(NumericError::SignednessMismatch);
    }
    let raw = raw.check_fits(&format)?;
    let bits = raw.value();

    let sign = (bits >> (format.width() - 1)) & 1 == 1;
    if !sign {
        return Ok(DecodedValue::new(raw, format, false, bits));
    }

    Ok(DecodedValue::new(raw, format, true, negative_magnitude(bits, &format)))
}

/// Decode according to `format.signedness()`.
pub fn decode(raw: RawBits, format: FixedPointFormat) -> NumericResult<DecodedValue> {
    match format.signedness() {
        Signedness::Signed => decode_signed(raw, format),
        Signedness::Unsigned => decode_unsigned(raw, format),
    }
}

/// Decode an array-valued object.
///
/// Only element 0 is decoded; the remaining words are ignored.
///
/// # Errors
/// Returns `EmptyStorage` if `words` is empty, plus any error from [`decode`].
pub fn decode_element(words: &[u64], format: FixedPointFormat) -> NumericResult<DecodedValue> {
    let first = words.first().copied().ok_or(NumericError::EmptyStorage)?;
    decode(RawBits::new(first), format)
}

/// Magnitude bits of a negative two's-complement word.
fn negative_magnitude(bits: u64, format: &FixedPointFormat) -> u64 {
    let fw = format.fractional_bits();
    let iw = format.integer_bits();

    let int_part = bits.checked_shr(fw).unwrap_or(0) as u128;
    let frac_part = (bits & low_mask(fw)) as u128;

    let carry = u128::from(frac_part > 0);
    let int_magnitude = complement(int_part + carry, iw);
    let frac_magnitude = complement(frac_part, fw);

    // Both fields are reduced to their widths, so the packed result fits in W bits
    ((int_magnitude << fw) | frac_magnitude) as u64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=64).prop_flat_map(|w| (Just(w), 0..=w))
    }

    fn layout_and_raw() -> impl Strategy<Value = (u32, u32, u64)> {
        layout().prop_flat_map(|(w, iw)| (Just(w), Just(iw), 0..=low_mask(w)))
    }

    proptest! {
        #[test]
        fn unsigned_is_raw_over_scale((w, iw, raw) in layout_and_raw()) {
            let fmt = FixedPointFormat::unsigned(w, iw).unwrap();
            let v = decode_unsigned(RawBits::new(raw), fmt).unwrap();
            let expected = raw as f64 / 2f64.powi((w - iw) as i32);
            prop_assert_eq!(v.float_approximation(), expected);
            prop_assert!(!v.is_negative());
            prop_assert_eq!(v.raw_hex(), format!("{:#x}", raw));
        }

        #[test]
        fn signed_clear_sign_bit_matches_unsigned((w, iw, raw) in layout_and_raw()) {
            let raw = raw & (low_mask(w) >> 1);
            let signed = decode_signed(RawBits::new(raw), FixedPointFormat::signed(w, iw).unwrap()).unwrap();
            let unsigned = decode_unsigned(RawBits::new(raw), FixedPointFormat::unsigned(w, iw).unwrap()).unwrap();
            prop_assert!(!signed.is_negative());
            prop_assert_eq!(signed.magnitude(), unsigned.magnitude());
        }

        #[test]
        fn signed_matches_twos_complement_negation((w, iw, raw) in layout_and_raw()) {
            let raw = raw | (1u64 << (w - 1));
            let v = decode_signed(RawBits::new(raw), FixedPointFormat::signed(w, iw).unwrap()).unwrap();
            // Whole-word negation modulo 2^W; the most negative pattern maps
            // onto itself
            let expected = raw.wrapping_neg() & low_mask(w);
            prop_assert!(v.is_negative());
            prop_assert_eq!(v.magnitude_bits(), expected);
            prop_assert_eq!(v.raw().value(), raw);
        }
    }
}
