//! tickwheel_core - Pure no_std cooperative scheduler core
//!
//! This crate contains the platform-agnostic scheduling and memory-pool
//! logic that can be tested on host without any feature flags or runtime
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//! - **No global state**: The scheduler is a context object owned by the
//!   caller, so multiple independent instances can coexist
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource, TickDelay)
//! - [`scheduler`]: Fixed-capacity cooperative task scheduler
//! - [`pool`]: Fixed-block memory pool with allocation diagnostics

#![no_std]

pub mod pool;
pub mod scheduler;
pub mod traits;
