//! Protocol constants for MuteSync communication
//!
//! The device speaks a bare byte protocol over its USB serial bridge:
//! the host writes fixed 13-byte color frames, the device sends single
//! bytes when the button changes state. There is no framing, checksum
//! or acknowledgment in either direction.

/// Outgoing command bytes (first byte of every frame)
pub mod cmd {
    /// Set the color of all four segments: `[0x41, r0, g0, b0, .. r3, g3, b3]`
    pub const SET_COLORS: u8 = 0x41;

    /// Get human-readable name for command byte
    pub fn name(cmd: u8) -> &'static str {
        match cmd {
            SET_COLORS => "SET_COLORS",
            _ => "UNKNOWN",
        }
    }
}

/// Incoming event bytes
///
/// Each byte read from the device is a complete event.
pub mod event {
    /// Button went down (ASCII '3')
    pub const BUTTON_PRESSED: u8 = 0x33;
    /// Button came back up (ASCII '4')
    pub const BUTTON_RELEASED: u8 = 0x34;

    /// Get human-readable name for event byte
    pub fn name(byte: u8) -> &'static str {
        match byte {
            BUTTON_PRESSED => "BUTTON_PRESSED",
            BUTTON_RELEASED => "BUTTON_RELEASED",
            _ => "UNRECOGNIZED",
        }
    }
}

/// Number of independently colorable LED segments
pub const SEGMENT_COUNT: usize = 4;
/// Bytes per encoded segment color
pub const RGB_SIZE: usize = 3;
/// Color payload size (all segments, excluding the command byte)
pub const COLOR_DATA_SIZE: usize = SEGMENT_COUNT * RGB_SIZE;
/// Complete frame size: command byte + color payload
pub const FRAME_SIZE: usize = 1 + COLOR_DATA_SIZE;
/// Read buffer size for incoming event bytes
pub const READ_BUFFER_SIZE: usize = 100;

/// Timing constants
pub mod timing {
    /// Delay after each step of the attract animation
    pub const ANIMATION_STEP_MS: u64 = 100;
    /// Read poll window; a blocking read returns `Timeout` after this long
    /// so the caller can check for shutdown, then reads again
    pub const READ_POLL_MS: u64 = 250;
}

/// Serial line settings
pub mod serial {
    /// The CP210x bridge ignores the line rate for its virtual COM port;
    /// 9600 matches what the stock host software opens it with.
    pub const DEFAULT_BAUD_RATE: u32 = 9600;
}
