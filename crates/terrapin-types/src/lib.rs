//! Shared domain types for Terrapin.
//!
//! This crate contains the core domain types used across the Terrapin
//! workspace: drawing preferences, shape enums, colors, session configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod color;
pub mod config;
pub mod error;
pub mod prefs;
pub mod shape;
