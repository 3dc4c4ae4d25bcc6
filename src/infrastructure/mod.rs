//! Infrastructure layer - hardware drivers and background tasks.

pub mod drivers;
pub mod tasks;
