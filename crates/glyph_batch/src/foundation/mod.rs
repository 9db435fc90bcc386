//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types for 2D text placement
//! - Logging bootstrap

pub mod math;
pub mod logging;
