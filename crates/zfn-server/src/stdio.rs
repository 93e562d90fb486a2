//! Stdio MCP transport.
//!
//! Stdout carries the MCP protocol; anything the process wants to say to a
//! human goes to stderr.

use crate::server::PortalServer;
use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::info;
use zfn_session::SessionProvider;

/// Serve the portal tools over stdin/stdout until EOF.
///
/// The session provider is shared with every tool invocation; no login
/// happens here. Authentication stays lazy until the first tool call
/// needs it.
pub async fn run(sessions: Arc<SessionProvider>) -> Result<()> {
    let server = PortalServer::new(sessions);

    let service = server
        .serve(stdio())
        .await
        .context("Failed to start stdio MCP service")?;

    info!("Portal MCP server running on stdio");

    service.waiting().await?;

    info!("Portal MCP server shutdown");
    Ok(())
}
