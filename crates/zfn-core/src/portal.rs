//! The seam between this workspace and the remote academic portal.

use crate::{ExamSchedule, GradeReport, Result, SchedulePage, StudentProfile};
use async_trait::async_trait;

/// A connection to the academic portal.
///
/// Implementations own whatever credential state the portal hands back at
/// login; `has_credentials` reports whether that state is non-empty. A
/// rejected login or a non-success query code surfaces as
/// [`Error::Portal`](crate::Error::Portal) carrying the remote message.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Whether this connection holds a non-empty credential set.
    ///
    /// This is a local check only; it says nothing about whether the
    /// portal still honors those credentials.
    fn has_credentials(&self) -> bool;

    /// Authenticate with the student identifier and password.
    async fn login(&self, sid: &str, password: &str) -> Result<()>;

    /// Fetch the student's personal record.
    async fn info(&self) -> Result<StudentProfile>;

    /// Fetch grades for a year and term. Term `0` means the whole year;
    /// the portal interprets it, not this crate.
    async fn grades(&self, year: i32, term: i32) -> Result<GradeReport>;

    /// Fetch the class schedule for a year and term.
    async fn schedule(&self, year: i32, term: i32) -> Result<SchedulePage>;

    /// Fetch the exam schedule for a year and term. Term `0` means the
    /// whole year.
    async fn exams(&self, year: i32, term: i32) -> Result<ExamSchedule>;
}
