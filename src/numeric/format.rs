// ============================================================================
// Fixed-Point Format
// Width/integer-bit layout and the raw storage word
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest format that fits in a single storage word.
pub const MAX_WIDTH: u32 = u64::BITS;

/// Whether the top bit of a format is a two's-complement sign bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Signedness {
    /// Two's-complement (`ap_fixpt`)
    Signed,
    /// Plain magnitude (`ap_ufixpt`)
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Signed => write!(f, "signed"),
            Signedness::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// Layout of a fixed-point value: `W` total bits of which the top `IW` are
/// the integer part.
///
/// Invariant: `1 <= width <= 64` and `integer_bits <= width`, so the
/// fractional width `W - IW` is never negative. Construct through
/// [`FixedPointFormat::new`] to have it checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPointFormat {
    width: u32,
    integer_bits: u32,
    signedness: Signedness,
}

impl FixedPointFormat {
    /// Create a validated format.
    ///
    /// # Errors
    /// Returns `InvalidFormat` when `width` is zero or above [`MAX_WIDTH`], or
    /// when `integer_bits > width`.
    pub fn new(width: u32, integer_bits: u32, signedness: Signedness) -> NumericResult<Self> {
        if width == 0 || width > MAX_WIDTH || integer_bits > width {
            return Err(NumericError::InvalidFormat {
                width: i64::from(width),
                integer_bits: i64::from(integer_bits),
            });
        }
        Ok(Self {
            width,
            integer_bits,
            signedness,
        })
    }

    /// Shorthand for a signed format.
    pub fn signed(width: u32, integer_bits: u32) -> NumericResult<Self> {
        Self::new(width, integer_bits, Signedness::Signed)
    }

    /// Shorthand for an unsigned format.
    pub fn unsigned(width: u32, integer_bits: u32) -> NumericResult<Self> {
        Self::new(width, integer_bits, Signedness::Unsigned)
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn integer_bits(&self) -> u32 {
        self.integer_bits
    }

    /// `W - IW`
    #[inline]
    pub const fn fractional_bits(&self) -> u32 {
        self.width - self.integer_bits
    }

    #[inline]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self.signedness, Signedness::Signed)
    }

    /// Same layout with the other signedness.
    pub const fn with_signedness(self, signedness: Signedness) -> Self {
        Self { signedness, ..self }
    }

    /// Bit mask covering all `W` bits.
    #[inline]
    pub const fn width_mask(&self) -> u64 {
        low_mask(self.width)
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<W:{},IW:{}>", self.width, self.integer_bits)
    }
}

/// Mask of the lowest `bits` bits; saturates at a full word.
#[inline]
pub(crate) const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

// ============================================================================
// Raw Bits
// ============================================================================

/// The memory-accurate storage word of one fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct RawBits(u64);

impl RawBits {
    /// Wrap a storage word as captured from memory.
    #[inline]
    pub const fn new(word: u64) -> Self {
        Self(word)
    }

    /// Keep only the low `W` bits of `word`.
    #[inline]
    pub const fn truncated(word: u64, format: &FixedPointFormat) -> Self {
        Self(word & format.width_mask())
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Check that no bit above `W` is set.
    ///
    /// # Errors
    /// Returns `RawOutOfRange` otherwise.
    pub fn check_fits(self, format: &FixedPointFormat) -> NumericResult<Self> {
        if self.0 & !format.width_mask() != 0 {
            return Err(NumericError::RawOutOfRange {
                raw: self.0,
                width: format.width(),
            });
        }
        Ok(self)
    }

    /// Lowercase, `0x`-prefixed, no zero padding.
    pub fn to_hex(self) -> String {
        format!("{:#x}", self)
    }
}

impl From<u64> for RawBits {
    fn from(word: u64) -> Self {
        Self(word)
    }
}

impl fmt::LowerHex for RawBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
