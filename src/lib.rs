#![no_std]

pub mod config;
pub mod infrastructure;

/// GPIO pin driving the strip data line.
#[macro_export]
macro_rules! led_gpio {
    ($peripherals:expr) => {
        $peripherals.GPIO16
    };
}
