//! Shared helpers for xcadd integration tests.

#![allow(dead_code)]

mod env;

pub use env::{TestEnv, TestResult};
