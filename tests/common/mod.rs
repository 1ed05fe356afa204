//! Common test utilities for cmaps.
//!
//! This module provides shared fixtures and assertions for integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod image_utils;
pub mod test_data;
