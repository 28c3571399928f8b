// ============================================================================
// Type-Name Parsing
// "hls::ap_fixpt<W, IW>" -> FixedPointFormat
// ============================================================================

use super::errors::{InspectError, InspectResult};
use crate::domain::InspectorConfig;
use crate::numeric::{FixedPointFormat, NumericError, Signedness};

/// Decide signedness from the type-name markers.
///
/// The unsigned marker is checked first.
pub fn classify(type_name: &str, config: &InspectorConfig) -> Option<Signedness> {
    if type_name.contains(config.unsigned_marker.as_str()) {
        Some(Signedness::Unsigned)
    } else if type_name.contains(config.signed_marker.as_str()) {
        Some(Signedness::Signed)
    } else {
        None
    }
}

/// Parse a fixed-point type name into its format.
///
/// Accepts `marker<W>` and `marker<W, IW, ...>`. `W` and `IW` may carry an
/// unsigned-literal suffix (`16u`). Arguments past `IW` (quantization and
/// overflow modes) are ignored. A missing `IW` means no fractional bits.
///
/// # Errors
/// - `TypeMismatch` if neither marker matches or the arguments are not
///   integers
/// - `Decode(InvalidFormat)` if the arguments describe an impossible layout,
///   negative counts included
pub fn parse_type_name(type_name: &str, config: &InspectorConfig) -> InspectResult<FixedPointFormat> {
    let mismatch = || InspectError::TypeMismatch {
        type_name: type_name.to_string(),
    };

    let signedness = classify(type_name, config).ok_or_else(mismatch)?;
    let marker = match signedness {
        Signedness::Unsigned => config.unsigned_marker.as_str(),
        Signedness::Signed => config.signed_marker.as_str(),
    };

    let after_marker = type_name
        .find(marker)
        .map(|pos| &type_name[pos + marker.len()..])
        .ok_or_else(mismatch)?;
    let args = template_args(after_marker).ok_or_else(mismatch)?;

    let mut parts = args.iter();
    let width = parts
        .next()
        .and_then(|arg| parse_bits(arg))
        .ok_or_else(mismatch)?;
    let integer_bits = match parts.next() {
        Some(arg) => parse_bits(arg).ok_or_else(mismatch)?,
        None => width,
    };

    let invalid = NumericError::InvalidFormat {
        width,
        integer_bits,
    };
    let width = u32::try_from(width).map_err(|_| invalid)?;
    let integer_bits = u32::try_from(integer_bits).map_err(|_| invalid)?;

    Ok(FixedPointFormat::new(width, integer_bits, signedness)?)
}

/// Top-level arguments of the first `<...>` list in `s`.
fn template_args(s: &str) -> Option<Vec<&str>> {
    let open = s.find('<')?;
    // Only whitespace may separate the marker from its argument list
    if !s[..open].trim().is_empty() {
        return None;
    }

    let body = &s[open + 1..];
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut args = Vec::new();

    for (i, c) in body.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            '>' if depth == 0 => {
                args.push(body[start..i].trim());
                return Some(args);
            }
            '>' => depth -= 1,
            ',' if depth == 0 => {
                args.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    // Unterminated argument list
    None
}

/// Parse a bit-count argument, allowing an unsigned-literal suffix.
///
/// Signed so that `-4` is read as a number and rejected as a layout later.
fn parse_bits(arg: &str) -> Option<i64> {
    let digits = arg.trim().trim_end_matches(['u', 'U']);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hls() -> InspectorConfig {
        InspectorConfig::hls_math()
    }

    #[test]
    fn test_classify() {
        let config = hls();
        assert_eq!(
            classify("hls::ap_fixpt<16, 6>", &config),
            Some(Signedness::Signed)
        );
        assert_eq!(
            classify("hls::ap_ufixpt<16, 6>", &config),
            Some(Signedness::Unsigned)
        );
        assert_eq!(classify("int", &config), None);
    }

    #[test]
    fn test_parse_signed() {
        let fmt = parse_type_name("hls::ap_fixpt<16, 6>", &hls()).unwrap();
        assert_eq!(fmt, FixedPointFormat::signed(16, 6).unwrap());
    }

    #[test]
    fn test_parse_unsigned_suffix() {
        let fmt = parse_type_name("hls::ap_ufixpt<32u, 2>", &hls()).unwrap();
        assert_eq!(fmt, FixedPointFormat::unsigned(32, 2).unwrap());
    }

    #[test]
    fn test_parse_without_spaces_and_extra_args() {
        let fmt = parse_type_name("const hls::ap_fixpt<18,3,AP_TRN,AP_WRAP> *", &hls()).unwrap();
        assert_eq!(fmt, FixedPointFormat::signed(18, 3).unwrap());
    }

    #[test]
    fn test_parse_missing_integer_bits() {
        let fmt = parse_type_name("hls::ap_ufixpt<12>", &hls()).unwrap();
        assert_eq!(fmt.integer_bits(), 12);
        assert_eq!(fmt.fractional_bits(), 0);
    }

    #[test]
    fn test_parse_vitis_names() {
        let config = InspectorConfig::vitis_ap_fixed();
        let fmt = parse_type_name("ap_ufixed<10, 2, AP_RND, AP_SAT, 0>", &config).unwrap();
        assert_eq!(fmt, FixedPointFormat::unsigned(10, 2).unwrap());
        let fmt = parse_type_name("ap_fixed<10, 2>", &config).unwrap();
        assert!(fmt.is_signed());
    }

    #[test]
    fn test_parse_mismatch() {
        for name in [
            "int",
            "hls::ap_fixpt",
            "hls::ap_fixpt<>",
            "hls::ap_fixpt<16, x>",
            "hls::ap_fixpt<16, 6",
            "hls::ap_fixpt_base<16, 6>",
        ] {
            assert_eq!(
                parse_type_name(name, &hls()),
                Err(InspectError::TypeMismatch {
                    type_name: name.to_string()
                }),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_parse_invalid_layout() {
        assert_eq!(
            parse_type_name("hls::ap_fixpt<8, 9>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat {
                width: 8,
                integer_bits: 9
            }))
        );
        assert!(matches!(
            parse_type_name("hls::ap_fixpt<0, 0>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_parse_negative_arguments() {
        assert_eq!(
            parse_type_name("hls::ap_fixpt<-4, 2>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat {
                width: -4,
                integer_bits: 2
            }))
        );
        assert_eq!(
            parse_type_name("hls::ap_ufixpt<8, -2>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat {
                width: 8,
                integer_bits: -2
            }))
        );
        // Missing IW copies a negative W
        assert_eq!(
            parse_type_name("hls::ap_fixpt<-1>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat {
                width: -1,
                integer_bits: -1
            }))
        );
        // Larger than any bit count, but still a number
        assert!(matches!(
            parse_type_name("hls::ap_fixpt<8, 5000000000>", &hls()),
            Err(InspectError::Decode(NumericError::InvalidFormat { .. }))
        ));
    }
}
