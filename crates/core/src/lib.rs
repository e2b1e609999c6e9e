//! Minutemart Core - Shared types library.
//!
//! This crate provides common types used across Minutemart components:
//! - `server` - MCP server exposing the quick-commerce API as agent tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure derivations - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, status enums, the
//!   upstream response envelope, and discount derivation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
