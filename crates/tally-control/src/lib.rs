#![no_std]

//! Tally light control core.
//!
//! Hardware-free control loop for a hub-driven tally light:
//! - `command` - wire format of inbound render commands
//! - `clock` - microsecond timestamps with 32-bit wraparound semantics
//! - `watchdog` - connectivity state machine with a silence timeout
//! - `heartbeat` - once-per-second liveness schedule and payload format
//! - `renderer` - solid-color strip rendering over [`OutputDriver`]
//! - `engine` - per-iteration composition of the above
//!
//! The engine is generic over `OutputDriver`, allowing different hardware
//! backends (and in-memory drivers in tests). It never blocks: the
//! surrounding task owns the sockets and feeds datagrams and timestamps in.

pub mod clock;
pub mod command;
pub mod engine;
pub mod heartbeat;
pub mod renderer;
pub mod watchdog;

pub use clock::Micros;
pub use command::{ParseError, RenderCommand};
pub use engine::{PollOutcome, TallyConfig, TallyEngine};
pub use heartbeat::{HeartbeatMessage, HeartbeatSchedule};
pub use renderer::StripRenderer;
pub use watchdog::{ConnectionState, Watchdog};

/// Color of a single strip pixel.
pub type Rgb = smart_leds::RGB8;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The control engine is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
