//! Replay a canned feed into CSV files
//!
//! Configure with `DATAFEED_OUTPUT_PATH`, `DATAFEED_CONTINUOUS` and
//! `DATAFEED_POLL_SECS`. In continuous mode stop with Ctrl+C.

use std::io::IsTerminal;

use chrono::{Duration, Utc};
use datafeed::{
    Device, Diagnostic, Driver, FailureMode, FaultData, FeedConfig, FeedResult, Key, LogRecord,
    MemorySource, NamedEntity, StatusData, Trip,
};

fn sample_feed() -> FeedResult {
    let now = Utc::now();
    let truck = Device::new("Truck, North")
        .with_serial_number("G9A1B2C3D4E5")
        .with_vin("1FUJGLDR12LM12345");
    let van = Device::new("Van 7").with_serial_number("G7Z9Y8X7W6V5");

    let gps_records = vec![
        LogRecord {
            latitude: Some(43.6532),
            longitude: Some(-79.3832),
            speed: Some(62.5),
            ..LogRecord::new(truck.clone(), now)
        },
        LogRecord {
            latitude: Some(43.7001),
            longitude: Some(-79.4163),
            speed: Some(0.0),
            ..LogRecord::new(van.clone(), now)
        },
    ];

    let status_data = vec![StatusData {
        data: Some(87.0),
        ..StatusData::new(
            truck.clone(),
            now,
            Diagnostic::new(NamedEntity::user("Engine coolant temperature"))
                .with_code(110)
                .with_source(NamedEntity::system("SourceJ1939"))
                .measured(NamedEntity::user("Degrees Celsius")),
        )
    }];

    let fault_data = vec![FaultData {
        count: Some(1),
        active: Some(true),
        amber_warning_lamp: Some(true),
        ..FaultData::new(
            van.clone(),
            now,
            Diagnostic::new(NamedEntity::user("Low battery \"main\"")),
            FailureMode::NoFailureMode,
            NamedEntity::system("ControllerNoneId"),
        )
    }];

    let trips = vec![Trip {
        driver: Some(
            Driver::new(NamedEntity::user("Jane Doe"))
                .with_keys([Key::new("KEY-001"), Key::new("KEY-002")]),
        ),
        start: Some(now - Duration::minutes(45)),
        stop: Some(now),
        distance: Some(38.2),
        ..Trip::new(truck)
    }];

    FeedResult {
        gps_records,
        status_data,
        fault_data,
        trips,
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return;
        }
    };

    let source = MemorySource::new("replay").with_results([sample_feed()]);

    if let Err(e) = datafeed::run(config, Box::new(source)).await {
        tracing::error!("{}", e);
    }

    if std::io::stdin().is_terminal() {
        println!("Press Enter to exit...");
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
    }
}
