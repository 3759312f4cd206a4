// MCP (Model Context Protocol) server implementation
// Exposes the HomeGenie data tools to agent clients over stdio JSON-RPC.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
