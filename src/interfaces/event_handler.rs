// ============================================================================
// Event Handler Interface
// Defines the contract for reporting inspection outcomes
// ============================================================================

use crate::interfaces::RegistrationId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the printer layer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InspectionEvent {
    /// Printer added to an environment
    PrinterRegistered {
        id: RegistrationId,
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// Printer removed from an environment
    PrinterUnregistered {
        id: RegistrationId,
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// Value rendered successfully
    ValueDecoded {
        symbol: String,
        rendered: String,
        timestamp: DateTime<Utc>,
    },

    /// Value could not be rendered; the session continues
    InspectionFailed {
        symbol: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for inspection events
/// Implementations can surface failures to a user-facing channel, log, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an inspection event
    fn on_event(&self, event: InspectionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<InspectionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: InspectionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: InspectionEvent) {
        match &event {
            InspectionEvent::InspectionFailed { symbol, reason, .. } => {
                tracing::warn!(symbol = %symbol, "Inspection failed: {}", reason);
            }
            _ => tracing::debug!("Inspection event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<InspectionEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<InspectionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events seen so far
    pub fn drain(&self) -> Vec<InspectionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: InspectionEvent) {
        self.events.lock().push(event);
    }
}
