//! Shared helpers: angle arithmetic and the fixed-step tick clock.

/// Angle wrapping and interpolation in degrees.
pub mod angle;
/// Fixed-step accumulator turning frame time into ticks.
pub mod tick_clock;
