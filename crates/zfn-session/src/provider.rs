use std::sync::Arc;
use tokio::sync::RwLock;
use zfn_client::HttpPortalClient;
use zfn_core::{Error, PortalApi, PortalConfig, Result};

/// How `acquire` treats a cached handle whose credential set is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevalidatePolicy {
    /// Return the cached handle unchanged (the default). A session the
    /// portal has expired server-side keeps being handed out until the
    /// process restarts.
    #[default]
    TrustCached,

    /// Probe the cached handle with a lightweight query first; on any
    /// failure, discard it and log in fresh.
    ProbeOnAcquire,
}

type ConnectFn = Box<dyn Fn(&PortalConfig) -> Result<Arc<dyn PortalApi>> + Send + Sync>;
type ConfigFn = Box<dyn Fn() -> Result<PortalConfig> + Send + Sync>;

/// Lazily-authenticating provider of the shared portal session.
///
/// Constructed once at startup and shared with every tool handler. The
/// slot lock is held only to read or replace the handle, never across a
/// network call; two first acquisitions racing each other may both log in,
/// and the last writer wins. Either handle serves subsequent calls.
pub struct SessionProvider {
    slot: RwLock<Option<Arc<dyn PortalApi>>>,
    connect: ConnectFn,
    config_source: ConfigFn,
    policy: RevalidatePolicy,
}

impl SessionProvider {
    /// Provider over HTTP with configuration from the process environment.
    pub fn new(policy: RevalidatePolicy) -> Self {
        Self::builder().policy(policy).build()
    }

    pub fn builder() -> SessionProviderBuilder {
        SessionProviderBuilder::new()
    }

    /// Get the shared session handle, authenticating on first use.
    ///
    /// Fails with [`Error::Config`] when a required environment variable is
    /// absent and with [`Error::Auth`] when the portal rejects the login;
    /// both carry messages meant for display.
    pub async fn acquire(&self) -> Result<Arc<dyn PortalApi>> {
        if let Some(client) = self.cached().await {
            match self.policy {
                RevalidatePolicy::TrustCached => return Ok(client),
                RevalidatePolicy::ProbeOnAcquire => match client.info().await {
                    Ok(_) => return Ok(client),
                    Err(e) => {
                        tracing::warn!(error = %e, "Cached session failed revalidation, discarding");
                        self.slot.write().await.take();
                    }
                },
            }
        }

        // Configuration is read per attempt, never cached on its own.
        let config = (self.config_source)()?;
        let client = (self.connect)(&config)?;

        tracing::info!(base_url = %config.base_url, sid = %config.sid, "Opening portal session");

        if let Err(e) = client.login(&config.sid, &config.password).await {
            return Err(match e {
                Error::Portal { msg, .. } => Error::Auth(msg),
                other => other,
            });
        }

        let mut slot = self.slot.write().await;
        *slot = Some(Arc::clone(&client));

        Ok(client)
    }

    async fn cached(&self) -> Option<Arc<dyn PortalApi>> {
        let slot = self.slot.read().await;
        slot.as_ref().filter(|c| c.has_credentials()).cloned()
    }
}

/// Builder for [`SessionProvider`]
pub struct SessionProviderBuilder {
    connect: Option<ConnectFn>,
    config_source: Option<ConfigFn>,
    policy: RevalidatePolicy,
}

impl SessionProviderBuilder {
    pub fn new() -> Self {
        Self {
            connect: None,
            config_source: None,
            policy: RevalidatePolicy::default(),
        }
    }

    pub fn policy(mut self, policy: RevalidatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace how clients are constructed from a config.
    pub fn connector<F>(mut self, f: F) -> Self
    where
        F: Fn(&PortalConfig) -> Result<Arc<dyn PortalApi>> + Send + Sync + 'static,
    {
        self.connect = Some(Box::new(f));
        self
    }

    /// Replace where configuration is read from.
    pub fn config_source<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<PortalConfig> + Send + Sync + 'static,
    {
        self.config_source = Some(Box::new(f));
        self
    }

    pub fn build(self) -> SessionProvider {
        SessionProvider {
            slot: RwLock::new(None),
            connect: self.connect.unwrap_or_else(|| {
                Box::new(|config| {
                    HttpPortalClient::new(&config.base_url)
                        .map(|client| Arc::new(client) as Arc<dyn PortalApi>)
                })
            }),
            config_source: self
                .config_source
                .unwrap_or_else(|| Box::new(PortalConfig::from_env)),
            policy: self.policy,
        }
    }
}

impl Default for SessionProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
