#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use heapless::String;

use tally_esp_light::config;
use tally_esp_light::infrastructure::drivers::{EspLedDriver, start_wifi_sta, wifi_sta::Hostname};
use tally_esp_light::infrastructure::tasks::tally_task;
use tally_esp_light::led_gpio;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory (WiFi needs dynamic allocation)
    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Strip driver on the configured data pin
    let driver = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals));

    // Bring up WiFi and wait for a DHCP lease before starting the loop
    let ssid = String::try_from(config::WIFI.ssid).expect("SSID too long");
    let password = String::try_from(config::WIFI.password).expect("password too long");
    let hostname = Hostname::try_from(config::DEVICE.hostname).expect("hostname too long");
    let stack = start_wifi_sta(spawner, peripherals.WIFI, ssid, password, hostname).await;

    // Spawn the control loop
    spawner.spawn(tally_task(stack, driver)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
