//! home-telemetry - Sensor dashboard client for a home IoT node
//!
//! This library exposes the core modules for testing and reuse.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
