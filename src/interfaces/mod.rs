// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod environment;
mod event_handler;

pub use environment::{PrettyPrinterEnvironment, RegistrationId, ValuePrinter};
pub use event_handler::{
    CollectingEventHandler, EventHandler, InspectionEvent, LoggingEventHandler, NoOpEventHandler,
};
