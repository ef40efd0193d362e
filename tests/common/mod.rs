#![allow(dead_code)]

//! Common test utilities for sitedeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated base directory with a global config and site dirs
//! - Fixtures: Reusable config content and fake generators

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
