//! Device IDs for USB audio peripherals that carry quirks
//!
//! VID `0x05AC` is the USB vendor ID registered to Apple Inc.
//!
//! ## Sources
//!
//! - **USB VID registries** (the-sz.com, devicehunt.com, `usb.ids`):
//!   VID `0x05AC` → "Apple, Inc.", PID `0x110A` → "USB-C to 3.5mm Headphone
//!   Jack Adapter".
//!
//! ## Protocol notes
//!
//! Audio lives in configuration 2. The playback streaming interface
//! (interface 1) exposes two formats: 24-bit on an adaptive isochronous
//! endpoint and 16-bit on an asynchronous one, both stereo at
//! 44.1 kHz / 48 kHz on OUT endpoint `0x02`.

use serde::{Deserialize, Serialize};

/// Apple Inc. USB Vendor ID.
pub const APPLE_VENDOR_ID: u16 = 0x05AC;

/// Apple USB-C to 3.5 mm Headphone Jack Adapter.
pub const APPLE_USB_C_HEADPHONE_ADAPTER_PID: u16 = 0x110A;

/// Known USB audio devices that have entries in the quirk registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UacDeviceModel {
    AppleUsbCHeadphoneAdapter,
    Unknown,
}

impl UacDeviceModel {
    pub fn from_ids(vendor_id: u16, product_id: u16) -> Self {
        match (vendor_id, product_id) {
            (APPLE_VENDOR_ID, APPLE_USB_C_HEADPHONE_ADAPTER_PID) => {
                Self::AppleUsbCHeadphoneAdapter
            }
            _ => Self::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AppleUsbCHeadphoneAdapter => "Apple USB-C to 3.5mm Headphone Jack Adapter",
            Self::Unknown => "Unknown USB Audio Device",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_ids() {
        assert_eq!(
            UacDeviceModel::from_ids(APPLE_VENDOR_ID, APPLE_USB_C_HEADPHONE_ADAPTER_PID),
            UacDeviceModel::AppleUsbCHeadphoneAdapter
        );
        assert_eq!(
            UacDeviceModel::from_ids(APPLE_VENDOR_ID, 0xFFFF),
            UacDeviceModel::Unknown
        );
        assert_eq!(
            UacDeviceModel::from_ids(0x1234, APPLE_USB_C_HEADPHONE_ADAPTER_PID),
            UacDeviceModel::Unknown
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            UacDeviceModel::AppleUsbCHeadphoneAdapter.display_name(),
            "Apple USB-C to 3.5mm Headphone Jack Adapter"
        );
        assert_eq!(
            UacDeviceModel::Unknown.display_name(),
            "Unknown USB Audio Device"
        );
    }
}
