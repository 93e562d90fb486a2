//! Typed records decoded from portal responses.
//!
//! Fields the portal is known to send as either numbers or strings stay
//! `serde_json::Value` and are rendered as-is by the display layer. Every
//! field defaults when absent; the portal contract promises nothing.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One course line in a grade report.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub grade: Value,
    #[serde(default)]
    pub credit: Value,
    #[serde(default)]
    pub grade_point: Value,
}

/// Grade report for one year/term query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeReport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub courses: Vec<GradeItem>,
}

/// One class meeting in a schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub weekday: Value,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub place: String,
}

/// Class schedule for one year/term query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedulePage {
    #[serde(default)]
    pub courses: Vec<ScheduleEntry>,
}

/// One exam sitting.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    /// Seat number. The portal sends it under its `zwh` key and omits it
    /// when no seat is assigned.
    #[serde(default, rename = "zwh")]
    pub seat: Option<Value>,
}

/// Exam schedule for one year/term query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamSchedule {
    #[serde(default)]
    pub courses: Vec<ExamEntry>,
}

/// The student's personal record.
///
/// `name` and `sid` are the two fields the portal always returns; anything
/// else it sends is kept in `extra` for display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sid: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
