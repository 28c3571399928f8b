// ============================================================================
// Fixed-Point Printer
// Resolves an inspected value's type and renders its decoded form
// ============================================================================

use super::errors::{InspectError, InspectResult};
use super::type_name::{classify, parse_type_name};
use crate::domain::{InspectedValue, InspectorConfig, Storage, TypeDescriptor};
use crate::interfaces::{PrettyPrinterEnvironment, RegistrationId, ValuePrinter};
use crate::numeric::{decode_element, DecodedValue, FixedPointFormat};
use std::sync::Arc;

/// Printer for HLS-style fixed-point types.
///
/// Signedness is settled once, from the type name, when the value is
/// resolved; decoding itself only sees a [`FixedPointFormat`].
///
/// # Example
/// ```
/// use fixpt_inspect::prelude::*;
///
/// let printer = FixedPointPrinter::new(InspectorConfig::default()).unwrap();
/// let value = InspectedValue::scalar("x", "hls::ap_fixpt<8, 4>", 0xF0);
/// assert_eq!(printer.to_string(&value).unwrap().unwrap(), "-1.0 [0xf0] <W:8,IW:4>");
/// ```
#[derive(Debug, Clone)]
pub struct FixedPointPrinter {
    config: InspectorConfig,
}

impl FixedPointPrinter {
    /// Create a printer from a validated configuration.
    pub fn new(config: InspectorConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Find the type name this printer should parse for `value`.
    ///
    /// Order: pointee name, pointee with typedefs stripped, declared name,
    /// declared type with typedefs stripped. Returns `None` if nothing matches
    /// a marker.
    pub fn lookup<'a>(&self, value: &'a InspectedValue) -> Option<&'a str> {
        if self.config.follow_pointers {
            if let Some(target) = value.ty.target() {
                if let Some(name) = self.match_type(target) {
                    return Some(name);
                }
            }
        }
        self.match_type(&value.ty)
    }

    fn match_type<'a>(&self, ty: &'a TypeDescriptor) -> Option<&'a str> {
        if classify(&ty.name, &self.config).is_some() {
            return Some(ty.name.as_str());
        }
        if self.config.strip_typedefs {
            let stripped = ty.strip_typedefs();
            if classify(&stripped.name, &self.config).is_some() {
                return Some(stripped.name.as_str());
            }
        }
        None
    }

    /// Resolve and decode `value`.
    ///
    /// Array storage decodes element 0 only.
    ///
    /// Returns `None` if the value's type is not one this printer handles.
    pub fn decode(&self, value: &InspectedValue) -> Option<InspectResult<DecodedValue>> {
        let type_name = self.lookup(value)?;
        Some(self.decode_as(type_name, value))
    }

    fn decode_as(&self, type_name: &str, value: &InspectedValue) -> InspectResult<DecodedValue> {
        let format: FixedPointFormat = parse_type_name(type_name, &self.config)?;

        if matches!(value.storage, Storage::Unavailable) || value.storage.is_empty() {
            return Err(InspectError::UnresolvedSymbol {
                symbol: value.symbol.clone(),
            });
        }

        if value.storage.len() > 1 {
            tracing::trace!(
                symbol = %value.symbol,
                signedness = %format.signedness(),
                elements = value.storage.len(),
                "Decoding first array element only"
            );
        }

        Ok(decode_element(value.storage.words(), format)?)
    }

    /// Display string for `value`, or `None` if the type is not handled.
    pub fn to_string(&self, value: &InspectedValue) -> Option<InspectResult<String>> {
        self.decode(value)
            .map(|decoded| decoded.map(|d| d.to_string()))
    }

    /// Register with `env`. Calling this again returns the same id.
    pub fn register(self: &Arc<Self>, env: &dyn PrettyPrinterEnvironment) -> RegistrationId {
        env.add_printer(Arc::clone(self) as Arc<dyn ValuePrinter>)
    }

    /// Remove this printer's registration from `env`. Returns false if it was
    /// not registered.
    pub fn unregister(&self, env: &dyn PrettyPrinterEnvironment) -> bool {
        env.registration(&self.config.printer_name)
            .map(|id| env.remove_printer(id))
            .unwrap_or(false)
    }
}

impl ValuePrinter for FixedPointPrinter {
    fn name(&self) -> &str {
        &self.config.printer_name
    }

    fn try_render(&self, value: &InspectedValue) -> Option<InspectResult<String>> {
        self.to_string(value)
    }
}

/// Build a printer from `config` and register it with `env`.
///
/// # Errors
/// Returns the validation message if `config` is invalid.
pub fn register(
    env: &dyn PrettyPrinterEnvironment,
    config: InspectorConfig,
) -> Result<RegistrationId, String> {
    let printer = Arc::new(FixedPointPrinter::new(config)?);
    Ok(printer.register(env))
}
