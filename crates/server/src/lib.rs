//! Minutemart MCP server library.
//!
//! Exposes the quick-commerce REST API as MCP tools over stdio: discovery,
//! confirmation-gated cart mutation, co-purchase recommendations, and the
//! checkout and order lifecycle.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart_view;
pub mod config;
pub mod error;
pub mod images;
pub mod instructions;
pub mod mcp;
pub mod recommend;
pub mod tools;
