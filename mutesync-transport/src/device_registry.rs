//! Device registry - USB identifiers of the MuteSync's serial bridge
//!
//! The MuteSync enumerates as a Silicon Labs CP210x USB-to-UART bridge.
//! Nothing else on the port identifies it, so the VID/PID pair is the
//! whole matching rule.

/// Silicon Labs vendor ID
pub const VENDOR_ID: u16 = 0x10C4;

/// CP210x UART bridge product ID
pub const PRODUCT_ID: u16 = 0xEA60;

/// Vendor ID as the hex string OS enumerators report
pub const VENDOR_ID_HEX: &str = "10C4";

/// Product ID as the hex string OS enumerators report
pub const PRODUCT_ID_HEX: &str = "EA60";

/// Compare a numeric USB identifier against a hex string, ignoring case
///
/// Enumerators disagree on casing ("ea60" vs "EA60"), and some pad to
/// four digits while others don't, so the comparison is done on the
/// parsed value.
pub fn matches_hex(id: u16, hex: &str) -> bool {
    let hex = hex.trim();
    let hex = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    u16::from_str_radix(hex, 16).is_ok_and(|v| v == id)
}

/// Check if a VID/PID pair is the MuteSync
#[inline]
pub fn is_mutesync(vid: u16, pid: u16) -> bool {
    matches_hex(vid, VENDOR_ID_HEX) && matches_hex(pid, PRODUCT_ID_HEX)
}
