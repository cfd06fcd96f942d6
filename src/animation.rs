//! Attract animation and pacing
//!
//! The animation is data, not behavior: a short list of frames with the
//! pause that follows each one. The event loop walks the steps, writes
//! each frame and hands the pause to a `Pacer`, so tests can swap the
//! wall clock out.

use std::time::Duration;

use mutesync_transport::protocol::timing;
use mutesync_transport::{DeviceCommand, Frame, Rgb, SetColors};

/// One frame of an animation and the pause after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub frame: Frame,
    pub delay: Duration,
}

/// Alternating red/green flash played on startup and on every press
///
/// Ends on the second pattern; the device stays lit until something
/// writes the off frame.
#[derive(Debug, Clone)]
pub struct AttractAnimation {
    steps: [AnimationStep; 2],
}

impl AttractAnimation {
    pub fn new() -> Self {
        let delay = Duration::from_millis(timing::ANIMATION_STEP_MS);
        let (red, green) = (Rgb::RED, Rgb::GREEN);
        Self {
            steps: [
                AnimationStep {
                    frame: SetColors::new([red, green, red, green]).build(),
                    delay,
                },
                AnimationStep {
                    frame: SetColors::new([green, red, green, red]).build(),
                    delay,
                },
            ],
        }
    }

    /// A fresh pass over the steps; each call starts from the beginning
    pub fn steps(&self) -> impl Iterator<Item = AnimationStep> + '_ {
        self.steps.iter().copied()
    }

    /// Wall-clock length of one pass
    pub fn duration(&self) -> Duration {
        self.steps().map(|s| s.delay).sum()
    }

    /// Frame left on the device when the animation finishes
    pub fn final_frame(&self) -> Frame {
        self.steps[self.steps.len() - 1].frame
    }
}

/// Waits between animation steps
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

impl Default for AttractAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Pacer that blocks the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_steps_100ms() {
        let anim = AttractAnimation::new();
        let steps: Vec<_> = anim.steps().collect();
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.delay == Duration::from_millis(100)));
        assert_eq!(anim.duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_patterns_alternate() {
        let anim = AttractAnimation::new();
        let steps: Vec<_> = anim.steps().collect();
        assert_eq!(
            steps[0].frame.as_bytes(),
            &[65, 255, 0, 0, 0, 128, 0, 255, 0, 0, 0, 128, 0]
        );
        assert_eq!(
            steps[1].frame.as_bytes(),
            &[65, 0, 128, 0, 255, 0, 0, 0, 128, 0, 255, 0, 0]
        );
        assert_eq!(anim.final_frame(), steps[1].frame);
        assert!(!anim.final_frame().is_off());
    }

    #[test]
    fn test_frames_match_encoded_colors() {
        use mutesync_transport::{encode_colors, Rgba};

        let (red, green) = (Rgba::RED, Rgba::GREEN);
        let steps: Vec<_> = AttractAnimation::new().steps().collect();
        assert_eq!(steps[0].frame, encode_colors(red, green, red, green).unwrap());
        assert_eq!(steps[1].frame, encode_colors(green, red, green, red).unwrap());
    }

    #[test]
    fn test_steps_restart() {
        let anim = AttractAnimation::new();
        let first: Vec<_> = anim.steps().collect();
        let second: Vec<_> = anim.steps().collect();
        assert_eq!(first, second);
    }
}
