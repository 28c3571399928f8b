// ============================================================================
// Inspect Module
// Adapter between inspected objects and the fixed-point decoder
// ============================================================================
//
// Flow: InspectedValue -> printer lookup (pointer / typedef resolution)
//       -> type-name parse (signedness + W/IW) -> numeric::decode_element
//       -> rendered string, reported through the registry's event handler

mod errors;
mod printer;
mod registry;
mod type_name;

pub use errors::{InspectError, InspectResult};
pub use printer::{register, FixedPointPrinter};
pub use registry::PrinterRegistry;
pub use type_name::{classify, parse_type_name};
