//! tickwheel_sim - Host harness for the tickwheel scheduler core.
//!
//! Provides the std-backed platform services the `no_std` core injects via
//! traits (monotonic clock, one-millisecond tick pacing), plus a demo
//! runner binary in `src/bin/`.

pub mod error;
pub mod platform;

pub use error::SimError;
pub use platform::{HostDelay, HostTime};
