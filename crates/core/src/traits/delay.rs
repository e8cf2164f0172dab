//! One-tick pacing abstraction for the run controller.

/// Paces the run loop by one simulated millisecond per tick.
///
/// Implementations:
/// - `HostDelay` (in the sim crate) sleeps 1 ms of wall time per tick
/// - [`NoopDelay`] returns immediately, letting tests run thousands of
///   simulated ticks without real delays
pub trait TickDelay {
    /// Blocks until one tick worth of time has passed.
    fn delay_tick(&mut self);
}

/// Delay that returns immediately (simulated time only).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDelay;

impl TickDelay for NoopDelay {
    fn delay_tick(&mut self) {}
}
