//! JSON shape of the public quirk types, as consumed by host tooling that
//! dumps the table.

use serde_json::json;
use uac_quirks::{QuirkKind, SampleRates, known_quirks, registry::APPLE_ADAPTER_CONFIG};

#[test]
fn sample_rates_serialize_as_valid_entries_only() -> Result<(), serde_json::Error> {
    assert_eq!(
        serde_json::to_value(SampleRates::single(48_000))?,
        json!([48_000])
    );
    assert_eq!(
        serde_json::to_value(SampleRates::pair(44_100, 48_000))?,
        json!([44_100, 48_000])
    );
    Ok(())
}

#[test]
fn sample_rates_reject_more_than_capacity() {
    let parsed: Result<SampleRates, _> = serde_json::from_value(json!([8_000, 16_000, 32_000]));
    assert!(parsed.is_err());
}

#[test]
fn config_quirk_shape() -> Result<(), serde_json::Error> {
    assert_eq!(
        serde_json::to_value(APPLE_ADAPTER_CONFIG)?,
        json!({
            "vendor_id": 0x05AC,
            "product_id": 0x110A,
            "fix": { "FixedConfig": 2 }
        })
    );
    Ok(())
}

#[test]
fn registry_survives_json_dump() -> Result<(), serde_json::Error> {
    let dumped = serde_json::to_string(known_quirks())?;
    let reloaded: Vec<uac_quirks::Quirk> = serde_json::from_str(&dumped)?;
    assert_eq!(reloaded.as_slice(), known_quirks());
    Ok(())
}

#[test]
fn quirk_kind_serializes_by_name() -> Result<(), serde_json::Error> {
    assert_eq!(
        serde_json::to_value(QuirkKind::FixedEndpoint)?,
        json!("FixedEndpoint")
    );
    Ok(())
}
