// ============================================================================
// Domain Models Module
// Inspector configuration and the inspected-value model
// ============================================================================

pub mod config;
pub mod value;

pub use config::{InspectorConfig, HLS_SIGNED_MARKER, HLS_UNSIGNED_MARKER};
pub use value::{InspectedValue, Storage, TypeDescriptor};
