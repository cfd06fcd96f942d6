// MuteSync Linux Driver - Shared Library
// Attract animation and the button event loop

pub mod animation;
pub mod error;
pub mod event_loop;

pub use animation::{AnimationStep, AttractAnimation, Pacer, ThreadPacer};
pub use error::DriverError;
pub use event_loop::{EventLoop, LightState, Reaction};
