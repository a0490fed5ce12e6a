//! Common test utilities for jobprune integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated base directory, job folder and home directory
//! - Fixtures: Job file builders

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
