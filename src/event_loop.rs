//! Button event loop
//!
//! Reads event bytes from the device and answers each one with light
//! frames. The state machine itself (`LightState::on_event`) is pure; the
//! `EventLoop` owns the transport and carries out the reactions in order.
//!
//! Startup plays the attract animation, then turns the lights off. After
//! that a press replays the animation (leaving the segments lit) and a
//! release turns them off. Unknown bytes are ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mutesync_transport::protocol::READ_BUFFER_SIZE;
use mutesync_transport::{encode_off, parse_event, DeviceEvent, Transport, TransportError};
use tracing::{debug, error, info, trace, warn};

use crate::animation::{AttractAnimation, Pacer, ThreadPacer};
use crate::error::DriverError;

/// What the segments are currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    /// Lights off, waiting for a press
    #[default]
    Idle,
    /// Animation played, lit until release
    Active,
}

/// Output owed for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Play the attract animation
    Animate,
    /// Write the off frame
    TurnOff,
    /// No write
    Ignore,
}

impl LightState {
    /// Transition for one event
    ///
    /// A press always animates and a release always turns off, whatever
    /// the current state; the device may have been lit or cleared by
    /// someone else since we last wrote.
    pub fn on_event(self, event: DeviceEvent) -> (LightState, Reaction) {
        match event {
            DeviceEvent::ButtonPressed => (LightState::Active, Reaction::Animate),
            DeviceEvent::ButtonReleased => (LightState::Idle, Reaction::TurnOff),
            DeviceEvent::Unrecognized(_) => (self, Reaction::Ignore),
        }
    }
}

/// Drives the device from its own button events
pub struct EventLoop<T: Transport, P: Pacer = ThreadPacer> {
    transport: T,
    pacer: P,
    animation: AttractAnimation,
    state: LightState,
    running: Arc<AtomicBool>,
}

impl<T: Transport> EventLoop<T, ThreadPacer> {
    /// Event loop pacing animations with real sleeps
    pub fn new(transport: T) -> Self {
        Self::with_pacer(transport, ThreadPacer)
    }
}

impl<T: Transport, P: Pacer> EventLoop<T, P> {
    pub fn with_pacer(transport: T, pacer: P) -> Self {
        Self {
            transport,
            pacer,
            animation: AttractAnimation::new(),
            state: LightState::Idle,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stop cleanly when `running` is cleared (e.g. from a Ctrl-C handler)
    pub fn with_shutdown_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Play the attract animation, leaving the last pattern lit
    fn play_attract(&mut self) -> Result<(), TransportError> {
        for step in self.animation.steps() {
            self.transport.write_frame(&step.frame)?;
            self.pacer.pause(step.delay);
        }
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), TransportError> {
        self.transport.write_frame(&encode_off())
    }

    /// Startup sequence: animation, then dark
    ///
    /// Runs exactly like a press followed by a release.
    pub fn start(&mut self) -> Result<(), TransportError> {
        info!("Starting on {}", self.transport.device_info());
        self.handle_event(DeviceEvent::ButtonPressed)?;
        self.handle_event(DeviceEvent::ButtonReleased)
    }

    /// React to one event
    pub fn handle_event(&mut self, event: DeviceEvent) -> Result<(), TransportError> {
        let (next, reaction) = self.state.on_event(event);
        match reaction {
            Reaction::Animate => {
                debug!("{} in {:?}: animating", event, self.state);
                self.play_attract()?;
            }
            Reaction::TurnOff => {
                debug!("{} in {:?}: lights off", event, self.state);
                self.turn_off()?;
            }
            Reaction::Ignore => {
                trace!("Ignoring {}", event);
            }
        }
        self.state = next;
        Ok(())
    }

    /// React to every byte of one read, in arrival order
    pub fn process_chunk(&mut self, data: &[u8]) -> Result<(), TransportError> {
        for &byte in data {
            self.handle_event(parse_event(byte))?;
        }
        Ok(())
    }

    /// Run until a transport error or shutdown
    ///
    /// A zero-byte read is logged and otherwise ignored. On shutdown the
    /// lights are turned off before returning `Ok`.
    pub fn run(&mut self) -> Result<(), DriverError> {
        self.start()?;

        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            if !self.running.load(Ordering::SeqCst) {
                info!("Shutting down");
                self.handle_event(DeviceEvent::ButtonReleased)?;
                return Ok(());
            }

            match self.transport.read(&mut buf) {
                Ok(0) => warn!("Read returned no data (end of stream)"),
                Ok(n) => self.process_chunk(&buf[..n])?,
                Err(TransportError::Timeout) => continue,
                Err(e) => {
                    error!("Read failed: {}", e);
                    return Err(e.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_animates_from_any_state() {
        for state in [LightState::Idle, LightState::Active] {
            assert_eq!(
                state.on_event(DeviceEvent::ButtonPressed),
                (LightState::Active, Reaction::Animate)
            );
        }
    }

    #[test]
    fn test_release_turns_off_from_any_state() {
        for state in [LightState::Idle, LightState::Active] {
            assert_eq!(
                state.on_event(DeviceEvent::ButtonReleased),
                (LightState::Idle, Reaction::TurnOff)
            );
        }
    }

    #[test]
    fn test_unrecognized_keeps_state() {
        for state in [LightState::Idle, LightState::Active] {
            assert_eq!(
                state.on_event(DeviceEvent::Unrecognized(7)),
                (state, Reaction::Ignore)
            );
        }
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LightState::default(), LightState::Idle);
    }
}
