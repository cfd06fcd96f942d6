//! Color codec and frame builders
//!
//! The device takes plain 8-bit RGB per segment. Colors arrive here as
//! alpha-premultiplied RGBA, and the codec scales them back up by
//! `255 / alpha` before they go on the wire.

use std::fmt;

use thiserror::Error;

use crate::protocol::{cmd, COLOR_DATA_SIZE, FRAME_SIZE, RGB_SIZE, SEGMENT_COUNT};

// =============================================================================
// Colors
// =============================================================================

/// Encoded RGB color, exactly as sent for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 128, 0);

    pub const fn to_bytes(self) -> [u8; RGB_SIZE] {
        [self.r, self.g, self.b]
    }
}

/// Alpha-premultiplied RGBA color, the codec's input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    pub const RED: Self = Self::opaque(255, 0, 0);
    /// Web/CSS "green", not full-intensity lime
    pub const GREEN: Self = Self::opaque(0, 128, 0);

    /// Undo alpha premultiplication, discarding alpha
    ///
    /// Each channel becomes `(255 / a) * channel` in 8-bit arithmetic:
    /// the division truncates and the multiply wraps. No clamping; the
    /// output must match existing host software byte for byte.
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        if self.a == 0 {
            return Err(ColorError::ZeroAlpha);
        }
        let scale = 255 / self.a;
        Ok(Rgb::new(
            scale.wrapping_mul(self.r),
            scale.wrapping_mul(self.g),
            scale.wrapping_mul(self.b),
        ))
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

/// Codec failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Fully transparent input; the unpremultiply step would divide by zero
    #[error("Cannot encode color with zero alpha")]
    ZeroAlpha,
}

// =============================================================================
// Frames
// =============================================================================

/// A complete 13-byte frame as written to the device
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([u8; FRAME_SIZE]);

/// All segments dark
pub const OFF_FRAME: Frame = Frame([
    cmd::SET_COLORS,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
    0,
]);

impl Frame {
    /// Assemble a frame from a command byte and payload.
    /// Payload past the frame size is dropped; missing bytes stay zero.
    pub fn from_parts(cmd: u8, data: &[u8]) -> Self {
        let mut buf = [0u8; FRAME_SIZE];
        buf[0] = cmd;
        let len = data.len().min(COLOR_DATA_SIZE);
        buf[1..1 + len].copy_from_slice(&data[..len]);
        Self(buf)
    }

    /// Decode raw bytes into a frame
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let buf: [u8; FRAME_SIZE] = data.try_into().map_err(|_| ParseError::WrongLength {
            expected: FRAME_SIZE,
            got: data.len(),
        })?;
        if buf[0] != cmd::SET_COLORS {
            return Err(ParseError::UnknownOpcode(buf[0]));
        }
        Ok(Self(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn opcode(&self) -> u8 {
        self.0[0]
    }

    /// Per-segment colors in wire order
    pub fn segments(&self) -> [Rgb; SEGMENT_COUNT] {
        let mut out = [Rgb::BLACK; SEGMENT_COUNT];
        for (seg, chunk) in out.iter_mut().zip(self.0[1..].chunks_exact(RGB_SIZE)) {
            *seg = Rgb::new(chunk[0], chunk[1], chunk[2]);
        }
        out
    }

    /// True if every segment is dark
    pub fn is_off(&self) -> bool {
        self.0[1..].iter().all(|&b| b == 0)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({:02x?})", self.0)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", cmd::name(self.opcode()))?;
        for seg in self.segments() {
            write!(f, " #{:02x}{:02x}{:02x}", seg.r, seg.g, seg.b)?;
        }
        Ok(())
    }
}

/// Frame decode error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Frame too short or too long: expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("Unknown opcode 0x{0:02X}")]
    UnknownOpcode(u8),
}

// =============================================================================
// Commands
// =============================================================================

/// A command that can be serialized to a device frame
pub trait DeviceCommand {
    /// Command byte (e.g., 0x41 for SET_COLORS)
    const CMD: u8;

    /// Serialize to bytes (excluding the command byte)
    fn to_data(&self) -> Vec<u8>;

    /// Build the complete frame
    fn build(&self) -> Frame {
        Frame::from_parts(Self::CMD, &self.to_data())
    }
}

/// SET_COLORS command (0x41)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetColors {
    pub segments: [Rgb; SEGMENT_COUNT],
}

impl SetColors {
    pub const fn new(segments: [Rgb; SEGMENT_COUNT]) -> Self {
        Self { segments }
    }

    /// Encode four premultiplied colors, one per segment
    pub fn from_rgba(colors: [Rgba; SEGMENT_COUNT]) -> Result<Self, ColorError> {
        let mut segments = [Rgb::BLACK; SEGMENT_COUNT];
        for (seg, color) in segments.iter_mut().zip(colors) {
            *seg = color.to_rgb()?;
        }
        Ok(Self { segments })
    }

    /// All segments dark
    pub const fn off() -> Self {
        Self::new([Rgb::BLACK; SEGMENT_COUNT])
    }
}

impl DeviceCommand for SetColors {
    const CMD: u8 = cmd::SET_COLORS;

    fn to_data(&self) -> Vec<u8> {
        self.segments.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

/// Build a frame that lights the four segments in argument order
pub fn encode_colors(c1: Rgba, c2: Rgba, c3: Rgba, c4: Rgba) -> Result<Frame, ColorError> {
    Ok(SetColors::from_rgba([c1, c2, c3, c4])?.build())
}

/// The all-dark frame
pub fn encode_off() -> Frame {
    OFF_FRAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_is_identity() {
        for v in [0u8, 1, 64, 127, 128, 200, 255] {
            let rgb = Rgba::opaque(v, 255 - v, v / 2).to_rgb().unwrap();
            assert_eq!(rgb, Rgb::new(v, 255 - v, v / 2));
        }
    }

    #[test]
    fn test_zero_alpha_rejected() {
        assert_eq!(
            Rgba::new(10, 20, 30, 0).to_rgb(),
            Err(ColorError::ZeroAlpha)
        );
    }

    #[test]
    fn test_half_alpha_truncates_scale() {
        // 255 / 128 == 1, so channels pass through unscaled
        let rgb = Rgba::new(100, 50, 10, 128).to_rgb().unwrap();
        assert_eq!(rgb, Rgb::new(100, 50, 10));
    }

    #[test]
    fn test_low_alpha_wraps() {
        // 255 / 100 == 2; 200 * 2 = 400 wraps to 144
        let rgb = Rgba::new(200, 100, 0, 100).to_rgb().unwrap();
        assert_eq!(rgb, Rgb::new(144, 200, 0));
    }

    #[test]
    fn test_encode_colors_layout() {
        let frame = encode_colors(Rgba::RED, Rgba::GREEN, Rgba::RED, Rgba::GREEN).unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[65, 255, 0, 0, 0, 128, 0, 255, 0, 0, 0, 128, 0]
        );
    }

    #[test]
    fn test_named_colors_match_codec() {
        assert_eq!(Rgba::RED.to_rgb(), Ok(Rgb::RED));
        assert_eq!(Rgba::GREEN.to_rgb(), Ok(Rgb::GREEN));
    }

    #[test]
    fn test_encode_colors_argument_order() {
        let frame = encode_colors(
            Rgba::opaque(1, 2, 3),
            Rgba::opaque(4, 5, 6),
            Rgba::opaque(7, 8, 9),
            Rgba::opaque(10, 11, 12),
        )
        .unwrap();
        assert_eq!(frame.opcode(), 65);
        assert_eq!(&frame.as_bytes()[1..], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_encode_colors_propagates_zero_alpha() {
        let result = encode_colors(
            Rgba::RED,
            Rgba::RED,
            Rgba::new(1, 1, 1, 0),
            Rgba::RED,
        );
        assert_eq!(result, Err(ColorError::ZeroAlpha));
    }

    #[test]
    fn test_encode_off() {
        assert_eq!(
            encode_off().as_bytes(),
            &[65, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(SetColors::off().build(), OFF_FRAME);
        assert!(OFF_FRAME.is_off());
    }

    #[test]
    fn test_parse_recovers_segments() {
        let set = SetColors::new([
            Rgb::new(255, 0, 0),
            Rgb::new(0, 128, 0),
            Rgb::new(1, 2, 3),
            Rgb::new(9, 9, 9),
        ]);
        let frame = set.build();
        let parsed = Frame::parse(frame.as_bytes()).unwrap();
        assert_eq!(parsed.opcode(), cmd::SET_COLORS);
        assert_eq!(parsed.segments(), set.segments);
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_parse_rejects_bad_frames() {
        assert_eq!(
            Frame::parse(&[65, 0, 0]),
            Err(ParseError::WrongLength {
                expected: 13,
                got: 3
            })
        );
        assert_eq!(
            Frame::parse(&[0x42; 13]),
            Err(ParseError::UnknownOpcode(0x42))
        );
    }

    #[test]
    fn test_display() {
        let frame = encode_colors(Rgba::RED, Rgba::GREEN, Rgba::RED, Rgba::GREEN).unwrap();
        assert_eq!(
            frame.to_string(),
            "SET_COLORS #ff0000 #008000 #ff0000 #008000"
        );
    }
}
