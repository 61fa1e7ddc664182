//! Compiled-in table of known device quirks.
//!
//! Entries are scanned in order and the first match wins, so when a device
//! has several entries of the same kind the earlier one shadows the later.
//! Add new devices by appending entries here; there is no runtime
//! registration.

use crate::ids::{APPLE_USB_C_HEADPHONE_ADAPTER_PID, APPLE_VENDOR_ID};
use crate::types::{EndpointOverride, Quirk, SampleRates};

/// `bmAttributes` for an isochronous endpoint with asynchronous sync.
pub const EP_ATTR_ISOC_ASYNC: u8 = 0x05;
/// `bmAttributes` for an isochronous endpoint with adaptive sync.
pub const EP_ATTR_ISOC_ADAPTIVE: u8 = 0x09;

/// Apple USB-C headphone adapter: audio is in configuration 2.
pub const APPLE_ADAPTER_CONFIG: Quirk =
    Quirk::fixed_config(APPLE_VENDOR_ID, APPLE_USB_C_HEADPHONE_ADAPTER_PID, 2);

/// Apple USB-C headphone adapter, first streaming format (24-bit).
pub const APPLE_ADAPTER_ENDPOINT_24BIT: Quirk = Quirk::fixed_endpoint(
    APPLE_VENDOR_ID,
    APPLE_USB_C_HEADPHONE_ADAPTER_PID,
    EndpointOverride {
        interface_number: 1,
        alt_setting_index: 0,
        channels: 2,
        bit_resolution: 24,
        endpoint_address: 0x02,
        endpoint_attributes: EP_ATTR_ISOC_ADAPTIVE,
        sample_rates: SampleRates::pair(44_100, 48_000),
    },
);

/// Apple USB-C headphone adapter, second streaming format (16-bit).
pub const APPLE_ADAPTER_ENDPOINT_16BIT: Quirk = Quirk::fixed_endpoint(
    APPLE_VENDOR_ID,
    APPLE_USB_C_HEADPHONE_ADAPTER_PID,
    EndpointOverride {
        interface_number: 1,
        alt_setting_index: 1,
        channels: 2,
        bit_resolution: 16,
        endpoint_address: 0x02,
        endpoint_attributes: EP_ATTR_ISOC_ASYNC,
        sample_rates: SampleRates::pair(44_100, 48_000),
    },
);

static KNOWN_QUIRKS: [Quirk; 3] = [
    APPLE_ADAPTER_CONFIG,
    APPLE_ADAPTER_ENDPOINT_24BIT,
    APPLE_ADAPTER_ENDPOINT_16BIT,
];

/// All registry entries in match order.
pub fn known_quirks() -> &'static [Quirk] {
    &KNOWN_QUIRKS
}
