//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the editor core:
//! - Math types and transforms
//! - Collections and handle maps
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
