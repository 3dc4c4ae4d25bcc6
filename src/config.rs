#![allow(clippy::unreadable_literal)]

pub(crate) struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub(crate) struct DeviceConfig {
    pub name: &'static str,
    pub hostname: &'static str,
}

pub(crate) struct HubConfig {
    pub host: &'static str,
    pub port: u16,
}

pub(crate) struct StripConfig {
    pub led_count: usize,
    pub listen_port: u16,
}

/// Upper bound for the frame buffer; the configured strip length selects
/// the active prefix.
pub const MAX_LED_COUNT: usize = 128;

pub(crate) const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "Tally 1",
    hostname: "tally-1",
};

pub(crate) const HUB: HubConfig = HubConfig {
    host: env!("HUB_HOST"),
    port: 7411,
};

pub(crate) const STRIP: StripConfig = StripConfig {
    led_count: 16,
    listen_port: 7411,
};
