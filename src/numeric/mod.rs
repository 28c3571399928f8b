// ============================================================================
// Numeric Module
// Bit-exact decoding of raw fixed-point words
// ============================================================================
//
// This module provides:
// - FixedPointFormat / Signedness / RawBits: the input model
// - decode_signed / decode_unsigned / decode: pure decode functions
// - DecodedValue: sign, magnitude, float approximation and rendering
// - encode_decimal: inverse quantizer used for round-trip checks
// - NumericError: error types for the above
//
// Design principles:
// - Exact integer arithmetic up to a single integer-to-float conversion
// - All fallible operations return Result (no panics)
// - One storage word per value (W <= 64)

mod decoded;
mod decoder;
mod encoder;
mod errors;
mod format;

pub use decoded::DecodedValue;
pub use decoder::{complement, decode, decode_element, decode_signed, decode_unsigned};
pub use encoder::encode_decimal;
pub use errors::{NumericError, NumericResult};
pub use format::{FixedPointFormat, RawBits, Signedness, MAX_WIDTH};
