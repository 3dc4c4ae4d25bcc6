//! Connectivity watchdog.
//!
//! Two-state machine re-evaluated once per control-loop iteration: the
//! device counts as connected while hub packets keep arriving, and flips to
//! disconnected after three seconds of silence. State-change logging is
//! edge-triggered so a stable state never floods the log.

use crate::clock::Micros;

/// Hub silence threshold before declaring the link lost.
pub const DISCONNECT_TIMEOUT_MICROS: u32 = 3_000_000;

/// Hub connectivity as seen by the watchdog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

/// Tracks time since the last accepted packet and owns [`ConnectionState`].
pub struct Watchdog {
    last_received: Micros,
    state: ConnectionState,
}

impl Watchdog {
    /// Create a watchdog that counts silence from `now`.
    pub fn new(now: Micros) -> Self {
        Self {
            last_received: now,
            state: ConnectionState::Connected,
        }
    }

    /// Record an accepted packet.
    pub fn packet_received(&mut self, now: Micros) {
        self.last_received = now;
    }

    /// Current connectivity state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Timestamp of the last accepted packet.
    pub fn last_received(&self) -> Micros {
        self.last_received
    }

    /// Re-evaluate the state machine.
    ///
    /// Returns the new state only when it changed, so callers and the log
    /// see exactly one event per transition. Elapsed time of exactly the
    /// timeout still counts as connected.
    pub fn evaluate(&mut self, now: Micros) -> Option<ConnectionState> {
        let elapsed = now.elapsed_since(self.last_received);
        let next = if elapsed > DISCONNECT_TIMEOUT_MICROS {
            ConnectionState::Disconnected
        } else {
            ConnectionState::Connected
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        match next {
            ConnectionState::Disconnected => {
                log::warn!("watchdog: hub silent for {elapsed} us, disconnected");
            }
            ConnectionState::Connected => {
                log::info!("watchdog: hub traffic resumed, connected");
            }
        }
        Some(next)
    }
}
