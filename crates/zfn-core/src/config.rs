//! Environment-sourced portal configuration.
//!
//! Three variables, all required, no defaults. They are read once per
//! session acquisition attempt, never cached on their own.

use crate::{Error, Result};

/// Base address of the portal service.
pub const ENV_BASE_URL: &str = "ZFN_URL";
/// Student account identifier.
pub const ENV_SID: &str = "ZFN_SID";
/// Student account secret.
pub const ENV_PASSWORD: &str = "ZFN_PASSWORD";

/// Connection parameters for the academic portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub sid: String,
    pub password: String,
}

impl PortalConfig {
    /// Read the three required variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary lookup.
    ///
    /// Empty values count as missing, matching how the portal login form
    /// treats them. The error names every absent variable, not just the
    /// first one found.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = get(ENV_BASE_URL).filter(|v| !v.is_empty());
        let sid = get(ENV_SID).filter(|v| !v.is_empty());
        let password = get(ENV_PASSWORD).filter(|v| !v.is_empty());

        match (base_url, sid, password) {
            (Some(base_url), Some(sid), Some(password)) => Ok(Self {
                base_url,
                sid,
                password,
            }),
            (base_url, sid, password) => {
                let missing: Vec<&str> = [
                    (ENV_BASE_URL, base_url.is_none()),
                    (ENV_SID, sid.is_none()),
                    (ENV_PASSWORD, password.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| name)
                .collect();

                Err(Error::Config(format!(
                    "Missing required environment variable(s): {}",
                    missing.join(", ")
                )))
            }
        }
    }
}
