//! Serializing quantities, with and without their unit symbol.
//!
//! Fields marked `#[serde(with = "dimen::serde_with_unit")]` serialize as `{"value": .., "unit": ".."}` and reject a
//! mismatching unit on the way back in; other fields serialize as the bare value.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() -> Result<(), serde_json::Error> {
    use dimen::{KilometresPerHour, Metres, Millisecond, Quantity};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct TrackSegment {
        #[serde(with = "dimen::serde_with_unit")]
        length: Metres,

        #[serde(with = "dimen::serde_with_unit")]
        speed_limit: KilometresPerHour,

        #[serde(with = "dimen::serde_with_unit")]
        sensor_period: Quantity<Millisecond, u32>,

        // compact: bare number
        elevation: Metres,
    }

    let segment = TrackSegment {
        length: Metres::new(1250.0),
        speed_limit: KilometresPerHour::new(80.0),
        sensor_period: Quantity::new(250),
        elevation: Metres::new(312.5),
    };

    let json = serde_json::to_string_pretty(&segment)?;
    println!("Serialized:\n{}\n", json);

    let restored: TrackSegment = serde_json::from_str(&json)?;
    println!("length:        {}", restored.length);
    println!("speed limit:   {}", restored.speed_limit);
    println!("sensor period: {}", restored.sensor_period);
    println!("elevation:     {}\n", restored.elevation);

    let wrong_unit = r#"{
        "length": {"value": 1.0, "unit": "km"},
        "speed_limit": {"value": 80.0},
        "sensor_period": {"value": 250, "unit": "ms"},
        "elevation": 0.0
    }"#;
    match serde_json::from_str::<TrackSegment>(wrong_unit) {
        Ok(_) => println!("unexpected success with a mismatching unit"),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
