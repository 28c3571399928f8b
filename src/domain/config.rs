// ============================================================================
// Inspector Configuration
// Type-name markers and lookup behaviour for the fixed-point printer
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default marker for signed HLS fixed-point types.
pub const HLS_SIGNED_MARKER: &str = "hls::ap_fixpt";

/// Default marker for unsigned HLS fixed-point types.
pub const HLS_UNSIGNED_MARKER: &str = "hls::ap_ufixpt";

// ============================================================================
// Complete Inspector Configuration
// ============================================================================

/// Configuration for recognising and rendering fixed-point values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InspectorConfig {
    /// Name the printer is registered under (one registration per name)
    pub printer_name: String,

    /// Substring identifying signed types (e.g. "hls::ap_fixpt")
    pub signed_marker: String,

    /// Substring identifying unsigned types (e.g. "hls::ap_ufixpt")
    /// Checked before the signed marker, since the two may overlap
    pub unsigned_marker: String,

    /// Also try the typedef-stripped type name when the declared name does
    /// not match
    pub strip_typedefs: bool,

    /// Follow pointers and render the pointee
    pub follow_pointers: bool,
}

impl InspectorConfig {
    /// Create a new configuration with required parameters
    pub fn new(
        printer_name: impl Into<String>,
        signed_marker: impl Into<String>,
        unsigned_marker: impl Into<String>,
    ) -> Self {
        Self {
            printer_name: printer_name.into(),
            signed_marker: signed_marker.into(),
            unsigned_marker: unsigned_marker.into(),
            strip_typedefs: true,
            follow_pointers: true,
        }
    }

    /// Builder method: enable or disable typedef stripping
    pub fn with_strip_typedefs(mut self, strip: bool) -> Self {
        self.strip_typedefs = strip;
        self
    }

    /// Builder method: enable or disable pointer following
    pub fn with_follow_pointers(mut self, follow: bool) -> Self {
        self.follow_pointers = follow;
        self
    }

    /// Builder method: rename the printer
    pub fn with_printer_name(mut self, name: impl Into<String>) -> Self {
        self.printer_name = name.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.printer_name.trim().is_empty() {
            return Err("Printer name cannot be empty".to_string());
        }

        if self.signed_marker.is_empty() || self.unsigned_marker.is_empty() {
            return Err("Type markers cannot be empty".to_string());
        }

        if self.signed_marker == self.unsigned_marker {
            return Err("Signed and unsigned markers must differ".to_string());
        }

        if self.signed_marker.contains('<') || self.unsigned_marker.contains('<') {
            return Err("Type markers must not include template arguments".to_string());
        }

        Ok(())
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self::hls_math()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl InspectorConfig {
    /// HLS math library types
    /// - `hls::ap_fixpt<W, IW>` (signed)
    /// - `hls::ap_ufixpt<W, IW>` (unsigned)
    pub fn hls_math() -> Self {
        Self::new("hls_ap_fixpt", HLS_SIGNED_MARKER, HLS_UNSIGNED_MARKER)
    }

    /// Vitis HLS arbitrary-precision types
    /// - `ap_fixed<W, I, Q, O, N>` (signed)
    /// - `ap_ufixed<W, I, Q, O, N>` (unsigned)
    pub fn vitis_ap_fixed() -> Self {
        Self::new("vitis_ap_fixed", "ap_fixed", "ap_ufixed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hls_math() {
        let config = InspectorConfig::default();
        assert_eq!(config.signed_marker, "hls::ap_fixpt");
        assert_eq!(config.unsigned_marker, "hls::ap_ufixpt");
        assert!(config.strip_typedefs);
        assert!(config.follow_pointers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = InspectorConfig::vitis_ap_fixed()
            .with_strip_typedefs(false)
            .with_follow_pointers(false)
            .with_printer_name("ap");

        assert!(!config.strip_typedefs);
        assert!(!config.follow_pointers);
        assert_eq!(config.printer_name, "ap");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty_name = InspectorConfig::hls_math().with_printer_name(" ");
        assert!(empty_name.validate().is_err());

        let same = InspectorConfig::new("p", "fix", "fix");
        assert!(same.validate().is_err());

        let templated = InspectorConfig::new("p", "fix<", "ufix");
        assert!(templated.validate().is_err());

        let empty_marker = InspectorConfig::new("p", "", "ufix");
        assert!(empty_marker.validate().is_err());
    }
}
