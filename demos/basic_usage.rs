// ============================================================================
// Basic Usage Example
// ============================================================================

use fixpt_inspect::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed-Point Inspection Example ===\n");

    // Decode raw words directly
    let fmt = FixedPointFormat::signed(8, 4).unwrap();
    for raw in [0x00u64, 0x18, 0x7F, 0x80, 0xF0, 0xFF] {
        let value = decode(RawBits::new(raw), fmt).unwrap();
        println!("  {:#04x} -> {}", raw, value);
    }

    // Quantize a few values and show the words they land on
    println!("\nQuantizing into hls::ap_fixpt<16, 6>:");
    let fmt = FixedPointFormat::signed(16, 6).unwrap();
    for value in [Decimal::new(314159, 5), Decimal::new(-275, 2), Decimal::new(-32, 0)] {
        let raw = encode_decimal(value, fmt).unwrap();
        let decoded = decode(raw, fmt).unwrap();
        println!("  {:>9} -> {}", value, decoded);
    }

    // Register a printer and inspect values as a debugger would
    println!("\n=== Printer Registry ===");
    let registry = PrinterRegistry::new(Arc::new(LoggingEventHandler));
    let id = register(&registry, InspectorConfig::hls_math()).unwrap();
    println!("Registered printer {}", id);

    let values = [
        InspectedValue::scalar("gain", "hls::ap_ufixpt<8, 4>", 0xFF),
        InspectedValue::new(
            "*phase",
            TypeDescriptor::pointer_to(TypeDescriptor::typedef(
                "phase_t",
                TypeDescriptor::named("hls::ap_fixpt<18, 3>"),
            )),
            Storage::Scalar(0x3_0000),
        ),
        InspectedValue::new(
            "taps",
            TypeDescriptor::named("hls::ap_fixpt<8, 4>"),
            Storage::from(&[0xF0u64, 0x10, 0x20][..]),
        ),
        InspectedValue::new(
            "lost",
            TypeDescriptor::named("hls::ap_fixpt<8, 4>"),
            Storage::Unavailable,
        ),
        InspectedValue::scalar("count", "int", 3),
    ];

    for value in &values {
        match registry.render(value) {
            Some(Ok(rendered)) => println!("  {} = {}", value.symbol, rendered),
            Some(Err(err)) => println!("  {} = <error: {}>", value.symbol, err),
            None => println!("  {} = (raw) {:?}", value.symbol, value.storage.words()),
        }
    }

    registry.remove_printer(id);
    println!("\nPrinters after teardown: {}", registry.len());
}
