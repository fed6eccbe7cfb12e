//! Example demonstrating a configuration session
//!
//! This example drives the configuration engine the way a connected GATT
//! client would: it reads the current state, rewrites the URI and beacon
//! period, locks the beacon and shows that further writes are rejected.

use eddyblue::codec::UrlCodec;
use eddyblue::eddystone::{service_uuid, DESCRIPTORS};
use eddyblue::{BeaconConfigEngine, Notification};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = BeaconConfigEngine::default();

    // Print every notification the engine emits
    engine.subscribe(|notification| match notification {
        Notification::Changed {
            attribute,
            previous,
            current,
        } => println!("  {} changed: {:?} -> {:?}", attribute, previous, current),
        Notification::Disabled { frozen } => println!("  advertising frozen: {}", frozen),
    });

    println!("Service {}", service_uuid());
    for descriptor in DESCRIPTORS.iter() {
        let value = match engine.read_attribute(descriptor.name) {
            Ok(data) => hex::encode(data),
            Err(_) => "-".to_string(),
        };
        println!(
            "  {:<13} {} props=0x{:02x} value={}",
            descriptor.name.as_str(),
            descriptor.uuid,
            descriptor.access.bits(),
            value
        );
    }

    // New URI
    let uri = UrlCodec.encode("https://example.org")?;
    engine.write("uriData", &uri)?;

    // Freeze, then resume at 250 ms
    engine.write("beaconPeriod", &[0x00, 0x00])?;
    engine.write("beaconPeriod", &250u16.to_le_bytes())?;

    // Lock the beacon; everything but unlock is rejected now
    engine.write("lock", &[])?;
    match engine.write("flags", &[0x01]) {
        Ok(()) => println!("Write unexpectedly accepted"),
        Err(e) => println!(
            "Write rejected: {} (ATT error 0x{:02x})",
            e,
            u8::from(e.to_error_code())
        ),
    }

    engine.write("unlock", &[])?;
    engine.write("reset", &[0x01])?;

    let config = engine.config();
    println!(
        "Final state: uri={} period={} advertising={}",
        config.uri(),
        config.beacon_period(),
        config.advertising_state()
    );

    Ok(())
}
