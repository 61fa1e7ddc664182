//! Quirk records and the driver-side alt-setting model they are applied to.

use crate::error::{QuirkError, QuirkResult};
use serde::{Deserialize, Serialize};

/// Kind of override a quirk carries.
///
/// `None` is only used as an "any kind" filter when matching; registry
/// entries always carry a concrete kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum QuirkKind {
    #[default]
    None = 0,
    /// Force a specific USB configuration number.
    FixedConfig = 1,
    /// Force endpoint / alt-setting parameters.
    FixedEndpoint = 2,
}

impl QuirkKind {
    /// Whether an entry of kind `other` passes this filter.
    pub fn accepts(self, other: QuirkKind) -> bool {
        self == QuirkKind::None || self == other
    }
}

impl TryFrom<u8> for QuirkKind {
    type Error = QuirkError;

    fn try_from(value: u8) -> QuirkResult<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::FixedConfig),
            2 => Ok(Self::FixedEndpoint),
            other => Err(QuirkError::UnknownKind(other)),
        }
    }
}

impl From<QuirkKind> for u8 {
    fn from(kind: QuirkKind) -> Self {
        kind as u8
    }
}

/// Up to [`SampleRates::CAPACITY`] discrete sample rates in Hz.
///
/// Only the first `len()` entries are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SampleRates {
    rates: [u32; SampleRates::CAPACITY],
    count: u8,
}

impl SampleRates {
    pub const CAPACITY: usize = 2;

    pub const fn pair(first: u32, second: u32) -> Self {
        Self {
            rates: [first, second],
            count: 2,
        }
    }

    pub const fn single(rate: u32) -> Self {
        Self {
            rates: [rate, 0],
            count: 1,
        }
    }

    /// Build from a slice of rates.
    ///
    /// # Errors
    ///
    /// Returns [`QuirkError::TooManySampleRates`] when `rates` is longer than
    /// [`SampleRates::CAPACITY`].
    pub fn from_slice(rates: &[u32]) -> QuirkResult<Self> {
        if rates.len() > Self::CAPACITY {
            return Err(QuirkError::TooManySampleRates {
                max: Self::CAPACITY,
                actual: rates.len(),
            });
        }
        let mut out = Self {
            rates: [0; Self::CAPACITY],
            count: 0,
        };
        for (slot, rate) in out.rates.iter_mut().zip(rates) {
            *slot = *rate;
            out.count = out.count.saturating_add(1);
        }
        Ok(out)
    }

    pub fn len(&self) -> u8 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[u32] {
        self.rates
            .get(..usize::from(self.count))
            .unwrap_or(&self.rates)
    }
}

impl TryFrom<Vec<u32>> for SampleRates {
    type Error = QuirkError;

    fn try_from(rates: Vec<u32>) -> QuirkResult<Self> {
        Self::from_slice(&rates)
    }
}

impl From<SampleRates> for Vec<u32> {
    fn from(rates: SampleRates) -> Self {
        rates.as_slice().to_vec()
    }
}

/// Fixed parameters for one interface alternate setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointOverride {
    pub interface_number: u8,
    /// Position of the alt-setting in the driver's alt-setting array, not the
    /// `bAlternateSetting` value from the descriptor.
    pub alt_setting_index: u8,
    pub channels: u8,
    pub bit_resolution: u8,
    pub endpoint_address: u8,
    pub endpoint_attributes: u8,
    pub sample_rates: SampleRates,
}

/// Override payload, one variant per concrete [`QuirkKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuirkFix {
    /// USB configuration number to select instead of the driver's choice.
    FixedConfig(u8),
    FixedEndpoint(EndpointOverride),
}

/// A device-specific override keyed by VID/PID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quirk {
    pub vendor_id: u16,
    pub product_id: u16,
    pub fix: QuirkFix,
}

impl Quirk {
    pub const fn fixed_config(vendor_id: u16, product_id: u16, config_number: u8) -> Self {
        Self {
            vendor_id,
            product_id,
            fix: QuirkFix::FixedConfig(config_number),
        }
    }

    pub const fn fixed_endpoint(vendor_id: u16, product_id: u16, endpoint: EndpointOverride) -> Self {
        Self {
            vendor_id,
            product_id,
            fix: QuirkFix::FixedEndpoint(endpoint),
        }
    }

    pub fn kind(&self) -> QuirkKind {
        match self.fix {
            QuirkFix::FixedConfig(_) => QuirkKind::FixedConfig,
            QuirkFix::FixedEndpoint(_) => QuirkKind::FixedEndpoint,
        }
    }

    pub fn matches_device(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    pub fn config_number(&self) -> Option<u8> {
        match self.fix {
            QuirkFix::FixedConfig(config) => Some(config),
            QuirkFix::FixedEndpoint(_) => None,
        }
    }

    pub fn endpoint(&self) -> Option<&EndpointOverride> {
        match &self.fix {
            QuirkFix::FixedEndpoint(endpoint) => Some(endpoint),
            QuirkFix::FixedConfig(_) => None,
        }
    }
}

/// Anything that can report a USB vendor/product ID pair.
pub trait UsbDeviceIds {
    fn vendor_id(&self) -> u16;
    fn product_id(&self) -> u16;
}

impl UsbDeviceIds for (u16, u16) {
    fn vendor_id(&self) -> u16 {
        self.0
    }

    fn product_id(&self) -> u16 {
        self.1
    }
}

/// Standard USB device descriptor (USB 2.0 §9.6.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub length: u8,
    pub descriptor_type: u8,
    pub usb_version: u16,
    pub device_class: u8,
    pub device_subclass: u8,
    pub device_protocol: u8,
    pub max_packet_size0: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub device_version: u16,
    pub manufacturer_index: u8,
    pub product_index: u8,
    pub serial_number_index: u8,
    pub num_configurations: u8,
}

impl DeviceDescriptor {
    pub const LENGTH: u8 = 18;
    pub const DESCRIPTOR_TYPE: u8 = 0x01;

    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            ..Self::default()
        }
    }

    pub fn with_num_configurations(mut self, num_configurations: u8) -> Self {
        self.num_configurations = num_configurations;
        self
    }
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            length: Self::LENGTH,
            descriptor_type: Self::DESCRIPTOR_TYPE,
            usb_version: 0x0200,
            device_class: 0,
            device_subclass: 0,
            device_protocol: 0,
            max_packet_size0: 64,
            vendor_id: 0,
            product_id: 0,
            device_version: 0,
            manufacturer_index: 0,
            product_index: 0,
            serial_number_index: 0,
            num_configurations: 1,
        }
    }
}

impl UsbDeviceIds for DeviceDescriptor {
    fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.product_id
    }
}

/// Stream format parameters of one alt-setting, as parsed by the UAC driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AltSettingParams {
    pub channels: u8,
    pub bit_resolution: u8,
    /// `bSamFreqType`: 0 for a continuous range, otherwise the number of
    /// discrete frequencies in `sample_freq`.
    pub sample_freq_type: u8,
    pub sample_freq: [u32; AltSettingParams::MAX_SAMPLE_FREQS],
}

impl AltSettingParams {
    pub const MAX_SAMPLE_FREQS: usize = 8;

    /// Discrete sample frequencies, clamped to the array capacity.
    pub fn discrete_sample_freqs(&self) -> &[u32] {
        let len = usize::from(self.sample_freq_type).min(Self::MAX_SAMPLE_FREQS);
        self.sample_freq.get(..len).unwrap_or(&self.sample_freq)
    }
}

/// One interface alternate setting in the driver's device model.
///
/// Owned by the UAC driver; quirks only write into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceAltSetting {
    pub alt_idx: u8,
    pub ep_addr: u8,
    pub ep_mps: u16,
    pub ep_attr: u8,
    pub interval: u8,
    pub feature_unit: u8,
    pub vol_ch_map: u8,
    pub mute_ch_map: u8,
    pub dev_alt_param: AltSettingParams,
}
