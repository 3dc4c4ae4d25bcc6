//! Per-iteration control loop composition.
//!
//! [`TallyEngine`] is the explicit context threaded through the control
//! loop: it owns the strip renderer, the connectivity watchdog, the
//! heartbeat schedule and the pending timed-render deadline. Per iteration
//! the surrounding task feeds in at most one datagram via
//! [`TallyEngine::handle_datagram`] and then calls [`TallyEngine::poll`].
//!
//! Timed commands are tracked as a render-until deadline instead of a
//! blocking hold: the loop keeps draining packets, re-evaluating the
//! watchdog and emitting heartbeats while a render expiry is pending.

use heapless::String;

use crate::clock::Micros;
use crate::command::{RenderCommand, TIMED_PAYLOAD_MIN_LEN};
use crate::heartbeat::{self, HeartbeatMessage, HeartbeatSchedule, MAX_DEVICE_NAME_LEN};
use crate::renderer::StripRenderer;
use crate::watchdog::{ConnectionState, Watchdog};
use crate::{OutputDriver, Rgb};

/// Override color shown while disconnected from the hub.
pub const ALERT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Control loop configuration, supplied once at startup and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Device name reported in heartbeats.
    pub device_name: String<MAX_DEVICE_NAME_LEN>,
    /// Number of pixels on the attached strip.
    pub led_count: usize,
}

/// Outcome of one control-loop iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollOutcome {
    /// A liveness heartbeat should be sent to the hub now.
    pub heartbeat_due: bool,
    /// Connectivity changed during this iteration.
    pub transition: Option<ConnectionState>,
}

/// Armed timed render: revert to `standby` once the duration has elapsed.
struct PendingRevert {
    armed_at: Micros,
    duration_micros: u32,
    standby: Rgb,
}

/// The tally control loop state.
pub struct TallyEngine<const MAX_LEDS: usize> {
    device_name: String<MAX_DEVICE_NAME_LEN>,
    renderer: StripRenderer<MAX_LEDS>,
    watchdog: Watchdog,
    heartbeat: HeartbeatSchedule,
    pending: Option<PendingRevert>,
}

impl<const MAX_LEDS: usize> TallyEngine<MAX_LEDS> {
    pub fn new(config: &TallyConfig, now: Micros) -> Self {
        Self {
            device_name: config.device_name.clone(),
            renderer: StripRenderer::new(config.led_count),
            watchdog: Watchdog::new(now),
            heartbeat: HeartbeatSchedule::new(now),
            pending: None,
        }
    }

    /// Feed one received datagram into the loop.
    ///
    /// A well-formed command stamps the watchdog and renders its operator
    /// color. Payloads long enough to be timed commands additionally arm
    /// the render-until deadline. Malformed payloads are dropped without
    /// touching any state.
    pub fn handle_datagram<D: OutputDriver>(
        &mut self,
        now: Micros,
        payload: &[u8],
        driver: &mut D,
    ) {
        if payload.is_empty() {
            return;
        }
        let command = match RenderCommand::parse(payload) {
            Ok(command) => command,
            Err(_) => {
                log::debug!("engine: dropping malformed datagram ({} bytes)", payload.len());
                return;
            }
        };

        self.watchdog.packet_received(now);
        self.renderer.solid(command.operator, driver);
        self.pending = if payload.len() >= TIMED_PAYLOAD_MIN_LEN && command.duration_ms > 0 {
            Some(PendingRevert {
                armed_at: now,
                duration_micros: command.duration_ms.saturating_mul(1000),
                standby: command.standby,
            })
        } else {
            None
        };
    }

    /// Advance one loop iteration.
    ///
    /// In order: expire a pending timed render (reverting to its standby
    /// color), re-evaluate connectivity (overriding the strip with
    /// [`ALERT_COLOR`] on entering disconnected), then check the heartbeat
    /// schedule. Never blocks.
    pub fn poll<D: OutputDriver>(&mut self, now: Micros, driver: &mut D) -> PollOutcome {
        if let Some(pending) = &self.pending {
            if now.elapsed_since(pending.armed_at) >= pending.duration_micros {
                let standby = pending.standby;
                self.pending = None;
                self.renderer.solid(standby, driver);
            }
        }

        let transition = self.watchdog.evaluate(now);
        if transition == Some(ConnectionState::Disconnected) {
            // The alert override wins over whatever the last command showed.
            self.pending = None;
            self.renderer.solid(ALERT_COLOR, driver);
        }

        let heartbeat_due = self.heartbeat.poll(now, self.watchdog.state());
        PollOutcome {
            heartbeat_due,
            transition,
        }
    }

    /// Formatted liveness payload for the hub.
    pub fn heartbeat_message(&self) -> HeartbeatMessage {
        heartbeat::message(self.device_name.as_str())
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.watchdog.state()
    }

    /// Configured strip length.
    pub fn strip_len(&self) -> usize {
        self.renderer.len()
    }
}
