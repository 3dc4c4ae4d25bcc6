//! Microsecond timestamps with 32-bit wraparound semantics.
//!
//! The device clock is a free-running 32-bit microsecond counter that wraps
//! roughly every 71 minutes. All elapsed-time math in the control loop goes
//! through [`Micros::elapsed_since`], which stays correct across the wrap.

/// A point on the device's monotonic microsecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Micros(u32);

impl Micros {
    /// Wrap a raw counter reading.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw counter value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Microseconds elapsed since `earlier`.
    ///
    /// Exact modular subtraction: a timestamp taken just before the counter
    /// wraps and a reading just past zero yield the true small interval, not
    /// an underflowed one.
    pub const fn elapsed_since(self, earlier: Micros) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}
