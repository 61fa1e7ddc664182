//! Quirk lookups by VID/PID and by interface / alt-setting index.
//!
//! Both lookups are a single linear scan of [`known_quirks`]; the table is
//! tiny and consulted once per attach or per enumerated alt-setting.

use crate::LOG_TARGET;
use crate::registry::known_quirks;
use crate::types::{Quirk, QuirkKind, UsbDeviceIds};
use tracing::info;

/// Find the first quirk for `device` whose kind passes `filter`.
///
/// `QuirkKind::None` matches any kind, so the first entry for the device is
/// returned.
pub fn find_quirk<D: UsbDeviceIds + ?Sized>(device: &D, filter: QuirkKind) -> Option<Quirk> {
    let vid = device.vendor_id();
    let pid = device.product_id();

    let quirk = known_quirks()
        .iter()
        .find(|q| q.matches_device(vid, pid) && filter.accepts(q.kind()))?;

    let kind = u8::from(quirk.kind());
    info!(
        target: LOG_TARGET,
        "Found quirk type {kind} for device VID=0x{vid:04x}, PID=0x{pid:04x}"
    );
    Some(*quirk)
}

/// Find the endpoint quirk for one interface / alt-setting of `device`.
///
/// `alt_setting_index` is the position in the driver's alt-setting array,
/// not `bAlternateSetting`.
pub fn find_endpoint_quirk<D: UsbDeviceIds + ?Sized>(
    device: &D,
    interface_number: u8,
    alt_setting_index: u8,
) -> Option<Quirk> {
    let vid = device.vendor_id();
    let pid = device.product_id();

    let quirk = known_quirks().iter().find(|q| {
        q.matches_device(vid, pid)
            && q.endpoint().is_some_and(|ep| {
                ep.interface_number == interface_number
                    && ep.alt_setting_index == alt_setting_index
            })
    })?;

    info!(
        target: LOG_TARGET,
        "Found endpoint quirk for device VID=0x{vid:04x}, PID=0x{pid:04x}, interface {interface_number}, alt_setting {alt_setting_index}"
    );
    Some(*quirk)
}

/// Configuration number the driver must select for `device`, if forced.
pub fn fixed_config_number<D: UsbDeviceIds + ?Sized>(device: &D) -> Option<u8> {
    find_quirk(device, QuirkKind::FixedConfig).and_then(|q| q.config_number())
}

/// Whether any quirk is registered for `device`.
pub fn has_quirks<D: UsbDeviceIds + ?Sized>(device: &D) -> bool {
    quirks_for_device(device.vendor_id(), device.product_id())
        .next()
        .is_some()
}

/// All registry entries for a VID/PID, in match order.
pub fn quirks_for_device(
    vendor_id: u16,
    product_id: u16,
) -> impl Iterator<Item = &'static Quirk> {
    known_quirks()
        .iter()
        .filter(move |q| q.matches_device(vendor_id, product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{APPLE_USB_C_HEADPHONE_ADAPTER_PID, APPLE_VENDOR_ID};
    use crate::registry::{
        APPLE_ADAPTER_CONFIG, APPLE_ADAPTER_ENDPOINT_16BIT, APPLE_ADAPTER_ENDPOINT_24BIT,
    };
    use crate::types::DeviceDescriptor;

    fn apple_adapter() -> DeviceDescriptor {
        DeviceDescriptor::new(APPLE_VENDOR_ID, APPLE_USB_C_HEADPHONE_ADAPTER_PID)
    }

    #[test]
    fn test_find_quirk_any_kind_returns_first_entry() {
        assert_eq!(
            find_quirk(&apple_adapter(), QuirkKind::None),
            Some(APPLE_ADAPTER_CONFIG)
        );
    }

    #[test]
    fn test_find_quirk_filtered() {
        let device = apple_adapter();
        assert_eq!(
            find_quirk(&device, QuirkKind::FixedConfig),
            Some(APPLE_ADAPTER_CONFIG)
        );
        assert_eq!(
            find_quirk(&device, QuirkKind::FixedEndpoint),
            Some(APPLE_ADAPTER_ENDPOINT_24BIT)
        );
    }

    #[test]
    fn test_find_quirk_unknown_device() {
        let device = DeviceDescriptor::new(0x1234, 0x5678);
        assert_eq!(find_quirk(&device, QuirkKind::None), None);
        assert_eq!(find_quirk(&device, QuirkKind::FixedConfig), None);
        // Right vendor, wrong product.
        assert_eq!(find_quirk(&(APPLE_VENDOR_ID, 0x110B_u16), QuirkKind::None), None);
    }

    #[test]
    fn test_find_endpoint_quirk() {
        let device = apple_adapter();
        assert_eq!(
            find_endpoint_quirk(&device, 1, 0),
            Some(APPLE_ADAPTER_ENDPOINT_24BIT)
        );
        assert_eq!(
            find_endpoint_quirk(&device, 1, 1),
            Some(APPLE_ADAPTER_ENDPOINT_16BIT)
        );
        assert_eq!(find_endpoint_quirk(&device, 1, 2), None);
        assert_eq!(find_endpoint_quirk(&device, 0, 0), None);
        assert_eq!(find_endpoint_quirk(&device, 2, 1), None);
    }

    #[test]
    fn test_fixed_config_number() {
        assert_eq!(fixed_config_number(&apple_adapter()), Some(2));
        assert_eq!(fixed_config_number(&(0x046D_u16, 0x0A44_u16)), None);
    }

    #[test]
    fn test_quirks_for_device() {
        let all: Vec<_> =
            quirks_for_device(APPLE_VENDOR_ID, APPLE_USB_C_HEADPHONE_ADAPTER_PID).collect();
        assert_eq!(all.len(), 3);
        assert!(has_quirks(&apple_adapter()));
        assert!(!has_quirks(&(0x046D_u16, 0x0A44_u16)));
        assert_eq!(quirks_for_device(0x046D, 0x0A44).count(), 0);
    }
}
