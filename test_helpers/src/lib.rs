//! Test helpers shared across crates.
//!
//! This crate provides unique message generation for factory tests and text
//! normalization for behavioural step arguments.

pub mod messages;
pub mod text;
