//! Common test utilities for primer CLI tests.
//!
//! - `TestEnv`: isolated working directory and home, plus CLI runners

#![allow(dead_code)]

pub mod env;

pub use env::*;
