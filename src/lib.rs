// ============================================================================
// Fixed-Point Inspection Library
// Bit-exact decoding and pretty-printing of raw HLS fixed-point values
// ============================================================================

//! # fixpt-inspect
//!
//! Decodes raw fixed-point storage words (`hls::ap_fixpt<W, IW>`,
//! `hls::ap_ufixpt<W, IW>` and similar) into a readable value, for use by
//! debugger pretty-printers and trace tooling.
//!
//! ## Features
//!
//! - **Pure decoder**: `(raw bits, format) -> DecodedValue`, no I/O, no state
//! - **Bit-exact sign recovery** for two's-complement formats, done in integer
//!   arithmetic before the single float conversion
//! - **Type-name parsing** of `name<W, IW, ...>` into an explicit format
//! - **Printer registry** with explicit, idempotent registration and teardown
//!
//! Only one storage word per value is decoded (`W <= 64`), and array-valued
//! objects render their first element.
//!
//! ## Example
//!
//! ```rust
//! use fixpt_inspect::prelude::*;
//! use std::sync::Arc;
//!
//! // Decode directly
//! let fmt = FixedPointFormat::signed(8, 4).unwrap();
//! let value = decode(RawBits::new(0xF0), fmt).unwrap();
//! assert_eq!(value.float_approximation(), -1.0);
//! assert_eq!(value.to_string(), "-1.0 [0xf0] <W:8,IW:4>");
//!
//! // Or through a printer registry
//! let registry = PrinterRegistry::new(Arc::new(NoOpEventHandler));
//! register(&registry, InspectorConfig::hls_math()).unwrap();
//!
//! let inspected = InspectedValue::scalar("gain", "hls::ap_ufixpt<8, 4>", 0xFF);
//! let rendered = registry.render(&inspected).unwrap().unwrap();
//! assert_eq!(rendered, "15.9375 [0xff] <W:8,IW:4>");
//! ```

pub mod domain;
pub mod inspect;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{InspectedValue, InspectorConfig, Storage, TypeDescriptor};
    pub use crate::inspect::{
        register, FixedPointPrinter, InspectError, InspectResult, PrinterRegistry,
    };
    pub use crate::interfaces::{
        CollectingEventHandler, EventHandler, InspectionEvent, LoggingEventHandler,
        NoOpEventHandler, PrettyPrinterEnvironment, RegistrationId, ValuePrinter,
    };
    pub use crate::numeric::{
        decode, decode_element, decode_signed, decode_unsigned, encode_decimal, DecodedValue,
        FixedPointFormat, NumericError, RawBits, Signedness,
    };
}
