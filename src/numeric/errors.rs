// ============================================================================
// Numeric Errors
// Error types for fixed-point decoding and encoding
// ============================================================================

use std::fmt;

/// Errors that can occur while decoding or encoding fixed-point bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Width is not positive, wider than one storage word, or narrower than
    /// the integer part; or the integer part is negative. Fields are signed
    /// so a negative template argument is reported as written.
    InvalidFormat { width: i64, integer_bits: i64 },
    /// Raw word has bits set above the format width
    RawOutOfRange { raw: u64, width: u32 },
    /// Signed decode requested for an unsigned format, or vice versa
    SignednessMismatch,
    /// Array storage contained no elements
    EmptyStorage,
    /// Value does not fit in the format's representable range
    Overflow,
    /// Intermediate decimal arithmetic could not be carried out exactly
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat {
                width,
                integer_bits,
            } => write!(
                f,
                "invalid fixed-point format: W={}, IW={} (need 1 <= W <= 64 and 0 <= IW <= W)",
                width, integer_bits
            ),
            NumericError::RawOutOfRange { raw, width } => {
                write!(f, "raw bits {:#x} do not fit in {} bits", raw, width)
            }
            NumericError::SignednessMismatch => {
                write!(f, "signedness of format does not match decode operation")
            }
            NumericError::EmptyStorage => write!(f, "array storage has no elements"),
            NumericError::Overflow => {
                write!(f, "overflow: value outside representable fixed-point range")
            }
            NumericError::PrecisionLoss => {
                write!(f, "precision loss: decimal conversion is not exact")
            }
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
