use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, IpAddress, Runner, Stack, StackResources, dns::DnsQueryType};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{
    AuthMethod, ClientConfig, Config, ModeConfig, WifiController, WifiDevice, WifiEvent,
    WifiStaState,
};
use heapless::String;
use static_cell::make_static;

use super::random::get_seed;

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

const MAX_NETWORK_CONNECTIONS: usize = 4;

/// Type alias for the hostname
pub type Hostname = heapless::String<MAX_HOSTNAME_LEN>;

/// Start the Wi-Fi STA (Station) mode
///
/// Brings the stack up, spawns the reconnect and runner tasks and waits
/// until the device holds a DHCP lease. The control loop only starts once
/// this returns.
pub async fn start_wifi_sta(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    ssid: String<32>,
    password: String<64>,
    hostname: Hostname,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).unwrap();
    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Some(hostname);

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = make_static!(StackResources::<{ MAX_NETWORK_CONNECTIONS }>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.sta, net_config, network_resources, get_seed());

    spawner
        .spawn(wifi_connection_task(controller, ssid, password))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    wait_for_connection(stack).await;

    stack
}

/// Background task for connecting to the `WiFi` network and reconnecting if needed
#[embassy_executor::task]
pub async fn wifi_connection_task(
    mut controller: WifiController<'static>,
    ssid: String<32>,
    password: String<64>,
) {
    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            Timer::after(Duration::from_millis(2000)).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if password.is_empty() {
                ClientConfig::default()
                    .with_ssid(ssid.as_str().into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(ssid.as_str().into())
                    .with_password(password.as_str().into())
            };
            let mode_config = ModeConfig::Client(client_config);
            controller.set_config(&mode_config).unwrap();
            controller.start_async().await.unwrap();
        }

        println!("network: connecting");
        if let Err(e) = controller.connect_async().await {
            println!("network: error connecting: {e:?}");
            Timer::after(Duration::from_millis(5000)).await;
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Wait for full network connectivity (link + IP address)
async fn wait_for_connection(stack: Stack<'_>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }

    loop {
        if stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}

/// Resolves a hostname to an IP address
pub async fn resolve_host(stack: Stack<'static>, host: &str) -> Result<IpAddress, ()> {
    if let Ok(ip) = host.parse::<embassy_net::Ipv4Address>() {
        return Ok(IpAddress::Ipv4(ip));
    }

    let Ok(addresses) = stack.dns_query(host, DnsQueryType::A).await else {
        return Err(());
    };

    addresses.first().copied().ok_or(())
}
