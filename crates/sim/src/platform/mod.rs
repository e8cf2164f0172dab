//! Host implementations of the core platform traits.

pub mod time;

pub use time::{HostDelay, HostTime};
