//! Liveness heartbeat towards the hub.
//!
//! The device reports itself alive roughly once per second while connected.
//! The schedule is a coarse window derived from the microsecond clock; exact
//! period alignment is not needed, only "at most once per window" and
//! "never while disconnected".

use core::fmt::Write;

use heapless::String;

use crate::clock::Micros;
use crate::watchdog::ConnectionState;

/// Width of one heartbeat window.
const WINDOW_MICROS: u32 = 1_000_000;

/// Longest device name carried in a heartbeat payload.
pub const MAX_DEVICE_NAME_LEN: usize = 32;

/// `tally-ho "<name>"` with the longest permitted name.
pub const MAX_MESSAGE_LEN: usize = MAX_DEVICE_NAME_LEN + 11;

/// Formatted outbound heartbeat payload.
pub type HeartbeatMessage = String<MAX_MESSAGE_LEN>;

/// Coarse once-per-second heartbeat schedule.
pub struct HeartbeatSchedule {
    last_window: u32,
}

impl HeartbeatSchedule {
    pub fn new(now: Micros) -> Self {
        Self {
            last_window: now.raw() / WINDOW_MICROS,
        }
    }

    /// Returns true when a heartbeat is due.
    ///
    /// Fires at most once per window. A window that passes while
    /// disconnected is consumed without firing, so reconnecting never
    /// releases a burst of queued heartbeats.
    pub fn poll(&mut self, now: Micros, state: ConnectionState) -> bool {
        let window = now.raw() / WINDOW_MICROS;
        if window == self.last_window {
            return false;
        }
        self.last_window = window;
        state == ConnectionState::Connected
    }
}

/// Format the liveness payload for `device_name`.
pub fn message(device_name: &str) -> HeartbeatMessage {
    let mut payload = HeartbeatMessage::new();
    let _ = write!(payload, "tally-ho \"{device_name}\"");
    payload
}
