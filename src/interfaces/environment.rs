// ============================================================================
// Pretty-Printer Environment Interface
// Defines the contract between printers and the inspection environment
// ============================================================================

use crate::domain::InspectedValue;
use crate::inspect::InspectResult;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one printer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A printer that may claim an inspected value.
pub trait ValuePrinter: Send + Sync {
    /// Name used for registration; unique within an environment
    fn name(&self) -> &str;

    /// Render `value`, or `None` if this printer does not handle its type.
    fn try_render(&self, value: &InspectedValue) -> Option<InspectResult<String>>;
}

/// The environment printers are registered into (a debugger session, or the
/// in-process registry).
pub trait PrettyPrinterEnvironment: Send + Sync {
    /// Add a printer. Adding a second printer with the same name returns the
    /// existing registration instead.
    fn add_printer(&self, printer: Arc<dyn ValuePrinter>) -> RegistrationId;

    /// Remove a registration. Returns false if it was not present.
    fn remove_printer(&self, id: RegistrationId) -> bool;

    /// Registration for a printer name, if any
    fn registration(&self, name: &str) -> Option<RegistrationId>;

    /// Render a value with the first printer that claims it. `None` means no
    /// printer claimed the value and it should be shown raw.
    fn render(&self, value: &InspectedValue) -> Option<InspectResult<String>>;
}
