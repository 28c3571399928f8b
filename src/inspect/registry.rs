// ============================================================================
// Printer Registry
// In-process pretty-printer environment with explicit lifecycle
// ============================================================================

use super::errors::InspectResult;
use crate::domain::InspectedValue;
use crate::interfaces::{
    EventHandler, InspectionEvent, PrettyPrinterEnvironment, RegistrationId, ValuePrinter,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

struct Registration {
    id: RegistrationId,
    printer: Arc<dyn ValuePrinter>,
}

/// Ordered list of registered printers.
///
/// Registration is explicit: nothing is added on construction, `add_printer`
/// is idempotent per printer name, and `remove_printer` / `clear` tear
/// registrations down. Renders take a read lock only, so any number of
/// threads may inspect values concurrently.
///
/// Render failures are reported to the event handler and returned to the
/// caller; they never poison the registry.
pub struct PrinterRegistry {
    printers: RwLock<Vec<Registration>>,
    event_handler: Arc<dyn EventHandler>,
}

impl PrinterRegistry {
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            printers: RwLock::new(Vec::new()),
            event_handler,
        }
    }

    /// Number of registered printers
    pub fn len(&self) -> usize {
        self.printers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.read().is_empty()
    }

    /// Names of the registered printers, in lookup order
    pub fn printer_names(&self) -> Vec<String> {
        self.printers
            .read()
            .iter()
            .map(|r| r.printer.name().to_string())
            .collect()
    }

    /// Remove every registration.
    pub fn clear(&self) {
        let removed: Vec<Registration> = std::mem::take(&mut *self.printers.write());
        let events = removed
            .into_iter()
            .map(|r| InspectionEvent::PrinterUnregistered {
                id: r.id,
                name: r.printer.name().to_string(),
                timestamp: Utc::now(),
            })
            .collect();
        self.event_handler.on_events(events);
    }
}

impl PrettyPrinterEnvironment for PrinterRegistry {
    fn add_printer(&self, printer: Arc<dyn ValuePrinter>) -> RegistrationId {
        let id = {
            let mut printers = self.printers.write();
            if let Some(existing) = printers.iter().find(|r| r.printer.name() == printer.name()) {
                tracing::trace!(name = printer.name(), "Printer already registered");
                return existing.id;
            }
            let id = RegistrationId::new();
            printers.push(Registration {
                id,
                printer: Arc::clone(&printer),
            });
            id
        };

        tracing::debug!(name = printer.name(), id = %id, "Printer registered");
        self.event_handler.on_event(InspectionEvent::PrinterRegistered {
            id,
            name: printer.name().to_string(),
            timestamp: Utc::now(),
        });
        id
    }

    fn remove_printer(&self, id: RegistrationId) -> bool {
        let removed = {
            let mut printers = self.printers.write();
            printers
                .iter()
                .position(|r| r.id == id)
                .map(|pos| printers.remove(pos))
        };

        match removed {
            Some(registration) => {
                tracing::debug!(name = registration.printer.name(), id = %id, "Printer unregistered");
                self.event_handler.on_event(InspectionEvent::PrinterUnregistered {
                    id,
                    name: registration.printer.name().to_string(),
                    timestamp: Utc::now(),
                });
                true
            }
            None => false,
        }
    }

    fn registration(&self, name: &str) -> Option<RegistrationId> {
        self.printers
            .read()
            .iter()
            .find(|r| r.printer.name() == name)
            .map(|r| r.id)
    }

    fn render(&self, value: &InspectedValue) -> Option<InspectResult<String>> {
        let result = {
            let printers = self.printers.read();
            printers.iter().find_map(|r| r.printer.try_render(value))
        }?;

        let event = match &result {
            Ok(rendered) => InspectionEvent::ValueDecoded {
                symbol: value.symbol.clone(),
                rendered: rendered.clone(),
                timestamp: Utc::now(),
            },
            Err(err) => InspectionEvent::InspectionFailed {
                symbol: value.symbol.clone(),
                reason: err.to_string(),
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InspectorConfig, Storage, TypeDescriptor};
    use crate::inspect::{register, FixedPointPrinter, InspectError};
    use crate::interfaces::CollectingEventHandler;

    fn setup() -> (PrinterRegistry, Arc<CollectingEventHandler>) {
        let events = Arc::new(CollectingEventHandler::new());
        (PrinterRegistry::new(events.clone()), events)
    }

    #[test]
    fn test_starts_empty() {
        let (registry, events) = setup();
        assert!(registry.is_empty());
        assert!(events.events().is_empty());
        let value = InspectedValue::scalar("x", "hls::ap_fixpt<8, 4>", 0x10);
        assert!(registry.render(&value).is_none());
    }

    #[test]
    fn test_register_is_idempotent() {
        let (registry, events) = setup();
        let printer = Arc::new(FixedPointPrinter::new(InspectorConfig::hls_math()).unwrap());

        let first = printer.register(&registry);
        let second = printer.register(&registry);
        let third = register(&registry, InspectorConfig::hls_math()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(registry.len(), 1);
        assert_eq!(events.events().len(), 1);
    }

    #[test]
    fn test_register_rejects_invalid_config() {
        let (registry, _) = setup();
        let config = InspectorConfig::new("p", "same", "same");
        assert!(register(&registry, config).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_teardown() {
        let (registry, events) = setup();
        let printer = Arc::new(FixedPointPrinter::new(InspectorConfig::hls_math()).unwrap());
        let id = printer.register(&registry);

        assert!(printer.unregister(&registry));
        assert!(!printer.unregister(&registry));
        assert!(!registry.remove_printer(id));
        assert!(registry.is_empty());

        let events = events.drain();
        assert!(matches!(
            events.last(),
            Some(InspectionEvent::PrinterUnregistered { id: removed, .. }) if *removed == id
        ));

        // Re-registering after teardown issues a fresh id
        assert_ne!(printer.register(&registry), id);
    }

    #[test]
    fn test_render_reports_outcomes() {
        let (registry, events) = setup();
        register(&registry, InspectorConfig::hls_math()).unwrap();
        events.drain();

        let ok = InspectedValue::scalar("x", "hls::ap_fixpt<8, 4>", 0xF0);
        assert_eq!(
            registry.render(&ok).unwrap().unwrap(),
            "-1.0 [0xf0] <W:8,IW:4>"
        );

        let missing = InspectedValue::new(
            "y",
            TypeDescriptor::named("hls::ap_fixpt<8, 4>"),
            Storage::Unavailable,
        );
        assert!(matches!(
            registry.render(&missing),
            Some(Err(InspectError::UnresolvedSymbol { .. }))
        ));

        // Session keeps working after a failure
        assert!(registry.render(&ok).unwrap().is_ok());

        let events = events.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], InspectionEvent::ValueDecoded { symbol, .. } if symbol == "x"));
        assert!(
            matches!(&events[1], InspectionEvent::InspectionFailed { symbol, .. } if symbol == "y")
        );
    }

    #[test]
    fn test_multiple_printers_in_order() {
        let (registry, _) = setup();
        register(&registry, InspectorConfig::hls_math()).unwrap();
        register(&registry, InspectorConfig::vitis_ap_fixed()).unwrap();
        assert_eq!(
            registry.printer_names(),
            vec!["hls_ap_fixpt".to_string(), "vitis_ap_fixed".to_string()]
        );

        let ap = InspectedValue::scalar("z", "ap_ufixed<8, 8>", 0x2A);
        assert_eq!(registry.render(&ap).unwrap().unwrap(), "42.0 [0x2a] <W:8,IW:8>");

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_renders() {
        let (registry, events) = setup();
        register(&registry, InspectorConfig::hls_math()).unwrap();
        events.drain();

        std::thread::scope(|s| {
            for i in 0..4u64 {
                let registry = &registry;
                s.spawn(move || {
                    let value = InspectedValue::scalar("v", "hls::ap_ufixpt<8, 4>", i << 4);
                    let rendered = registry.render(&value).unwrap().unwrap();
                    assert_eq!(rendered, format!("{:?} [{:#x}] <W:8,IW:4>", i as f64, i << 4));
                });
            }
        });

        assert_eq!(events.events().len(), 4);
    }
}
