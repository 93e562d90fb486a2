//! Session management for the ZFN portal
//!
//! One process holds at most one authenticated portal connection. The
//! [`SessionProvider`] creates it lazily on first acquisition and hands the
//! same handle to every caller afterwards. There is no logout, rotation, or
//! teardown; the handle lives until the process exits.

pub mod provider;

// Re-exports
pub use provider::{RevalidatePolicy, SessionProvider, SessionProviderBuilder};
