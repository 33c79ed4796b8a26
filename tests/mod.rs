//! Test suite for Re:Watch
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
