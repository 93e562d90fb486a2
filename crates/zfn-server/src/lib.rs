//! MCP tool surface for the ZFN academic portal
//!
//! Five tools (session check, grades, class schedule, student info, and
//! exam schedule), each rendering a plain text summary. Failures are
//! rendered into the text too; no tool ever raises past its boundary.

pub mod format;
pub mod params;
pub mod server;
pub mod stdio;

// Re-exports
pub use server::PortalServer;
