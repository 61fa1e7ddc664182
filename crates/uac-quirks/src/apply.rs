//! Applying endpoint overrides to the driver's alt-setting model.

use crate::LOG_TARGET;
use crate::types::{AltSettingParams, InterfaceAltSetting, Quirk, QuirkFix};
use tracing::info;

/// Feature unit id forced by [`apply_endpoint_quirk`].
///
/// This and the channel maps below describe the Apple USB-C adapter's
/// stereo topology only. They are not derived from the quirk, so a future
/// non-stereo endpoint quirk would get wrong control mappings.
pub const FORCED_FEATURE_UNIT: u8 = 2;
/// Volume control enabled on channels 1 and 2.
pub const FORCED_VOL_CH_MAP: u8 = 0x03;
/// Mute control enabled on channels 1 and 2.
pub const FORCED_MUTE_CH_MAP: u8 = 0x03;

/// Overwrite `target` with the endpoint parameters of `quirk`.
///
/// Does nothing when `quirk` is absent or is not a fixed-endpoint quirk, so
/// the result of [`crate::find_endpoint_quirk`] can be passed straight in.
/// `alt_idx` is only used for logging.
pub fn apply_endpoint_quirk(target: &mut InterfaceAltSetting, quirk: Option<&Quirk>, alt_idx: u8) {
    let Some(quirk) = quirk else {
        return;
    };
    let QuirkFix::FixedEndpoint(endpoint) = &quirk.fix else {
        return;
    };

    let vid = quirk.vendor_id;
    let pid = quirk.product_id;
    info!(
        target: LOG_TARGET,
        "Applying fixed endpoint parameters for VID=0x{vid:04x}, PID=0x{pid:04x}, alt_setting={alt_idx}"
    );

    let params = &mut target.dev_alt_param;
    params.channels = endpoint.channels;
    params.bit_resolution = endpoint.bit_resolution;
    params.sample_freq_type = endpoint.sample_rates.len();
    // Slots past the override's rate count keep whatever the driver parsed.
    for (slot, rate) in params
        .sample_freq
        .iter_mut()
        .zip(endpoint.sample_rates.as_slice())
        .take(AltSettingParams::MAX_SAMPLE_FREQS)
    {
        *slot = *rate;
    }

    target.ep_addr = endpoint.endpoint_address;
    target.ep_attr = endpoint.endpoint_attributes;

    target.feature_unit = FORCED_FEATURE_UNIT;
    target.vol_ch_map = FORCED_VOL_CH_MAP;
    target.mute_ch_map = FORCED_MUTE_CH_MAP;

    info!(
        target: LOG_TARGET,
        "Successfully applied fixed endpoint parameters for alt_setting={alt_idx}"
    );
}
