//! Core types for Minutemart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount;
pub mod envelope;
pub mod id;
pub mod status;

pub use discount::discount_percent;
pub use envelope::ApiEnvelope;
pub use id::*;
pub use status::*;
