//! MCP protocol layer: JSON-RPC 2.0 types and the stdio serving loop.

mod server;
pub mod types;

pub use server::McpServer;
