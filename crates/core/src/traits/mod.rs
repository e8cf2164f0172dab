//! Core traits for platform-agnostic scheduling.
//!
//! This module provides trait abstractions that decouple the scheduler core
//! from platform-specific timing implementations.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (std clock, hardware timers) live in host or
//!   firmware crates

pub mod delay;
pub mod time;

pub use delay::{NoopDelay, TickDelay};
pub use time::{MockTime, TimeSource};
