//! Tally Control Loop Task
//!
//! Owns the UDP socket and drives the `tally-control` engine: one datagram
//! at most per iteration, then a poll that expires timed renders,
//! re-evaluates connectivity and emits the heartbeat when due.

use embassy_futures::select::{Either, select};
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{IpEndpoint, Stack};
use embassy_time::{Duration, Instant, Timer};
use esp_println::println;
use heapless::String;

use tally_control::command::MAX_COMMAND_LEN;
use tally_control::{Micros, TallyConfig, TallyEngine};

use crate::config;
use crate::infrastructure::drivers::{EspLedDriver, resolve_host};

/// Idle tick when no datagram arrives; bounds watchdog and heartbeat latency.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The control loop task.
///
/// Binds the command port, resolves the hub once, then loops forever. No
/// failure in here is fatal: bad datagrams are dropped, send failures are
/// logged once per link transition and the loop carries on.
#[embassy_executor::task]
pub async fn tally_task(stack: Stack<'static>, mut driver: EspLedDriver<'static>) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 256];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    if let Err(e) = socket.bind(config::STRIP.listen_port) {
        println!("tally: failed to bind port {}: {:?}", config::STRIP.listen_port, e);
        return;
    }
    println!("tally: listening on port {}", config::STRIP.listen_port);

    let hub = loop {
        match resolve_host(stack, config::HUB.host).await {
            Ok(address) => break IpEndpoint::new(address, config::HUB.port),
            Err(()) => {
                println!("tally: cannot resolve hub {}, retrying", config::HUB.host);
                Timer::after(Duration::from_secs(2)).await;
            }
        }
    };
    println!("tally: hub is {:?}", hub);

    let tally_config = TallyConfig {
        device_name: String::try_from(config::DEVICE.name).expect("device name too long"),
        led_count: config::STRIP.led_count,
    };
    let mut engine: TallyEngine<{ config::MAX_LED_COUNT }> =
        TallyEngine::new(&tally_config, now_micros());

    let mut packet = [0u8; MAX_COMMAND_LEN];
    let mut link_ok = true;

    loop {
        match select(socket.recv_from(&mut packet), Timer::after(IDLE_POLL_INTERVAL)).await {
            Either::First(Ok((len, _remote))) => {
                engine.handle_datagram(now_micros(), &packet[..len], &mut driver);
            }
            // Receive errors and idle ticks both fall through to the poll.
            Either::First(Err(_)) | Either::Second(()) => {}
        }

        let outcome = engine.poll(now_micros(), &mut driver);
        if outcome.heartbeat_due {
            let message = engine.heartbeat_message();
            match socket.send_to(message.as_bytes(), hub).await {
                Ok(()) => {
                    if !link_ok {
                        println!("tally: heartbeat delivery restored");
                        link_ok = true;
                    }
                }
                Err(e) => {
                    if link_ok {
                        println!("tally: heartbeat send failed: {:?}", e);
                        link_ok = false;
                    }
                }
            }
        }
    }
}

/// Current device clock reading.
///
/// Truncating the 64-bit tick count to 32 bits gives the wraparound
/// semantics the control core expects.
fn now_micros() -> Micros {
    Micros::new(Instant::now().as_micros() as u32)
}
