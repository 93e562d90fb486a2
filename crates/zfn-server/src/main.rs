use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use zfn_session::{RevalidatePolicy, SessionProvider};

/// MCP server for the ZFN academic portal
///
/// Connection settings come from the environment: ZFN_URL, ZFN_SID and
/// ZFN_PASSWORD. They are read lazily, on the first tool call that needs a
/// session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Probe a cached session before reusing it, instead of trusting it
    /// until the process exits
    #[arg(long)]
    revalidate_session: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {:?}", path))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    // Stdout belongs to the MCP protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let policy = if cli.revalidate_session {
        RevalidatePolicy::ProbeOnAcquire
    } else {
        RevalidatePolicy::TrustCached
    };

    let sessions = Arc::new(SessionProvider::new(policy));

    zfn_server::stdio::run(sessions).await
}
