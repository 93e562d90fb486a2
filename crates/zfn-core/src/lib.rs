//! Core types for the ZFN portal toolset
//!
//! This crate provides the foundational pieces the other crates build on:
//! the error taxonomy, the portal wire envelope, environment configuration,
//! and the `PortalApi` trait.

pub mod config;
pub mod envelope;
pub mod error;
pub mod portal;
pub mod types;

// Re-exports
pub use config::PortalConfig;
pub use envelope::{CODE_OK, Envelope};
pub use error::{Error, Result};
pub use portal::PortalApi;
pub use types::{
    ExamEntry, ExamSchedule, GradeItem, GradeReport, ScheduleEntry, SchedulePage, StudentProfile,
};
