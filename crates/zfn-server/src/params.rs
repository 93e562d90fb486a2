//! Tool parameter schemas.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the grade query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GradesParams {
    /// The academic year (e.g., 2023 for 2023-2024).
    pub year: i32,

    /// The term number. 1 for first term, 2 for second term. 0 for the
    /// whole year.
    #[serde(default)]
    pub term: i32,
}

/// Parameters for the class schedule query. Unlike grades and exams, the
/// term is required here.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScheduleParams {
    /// The academic year (e.g., 2023).
    pub year: i32,

    /// The term number (1 or 2).
    pub term: i32,
}

/// Parameters for the exam schedule query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExamParams {
    /// The academic year.
    pub year: i32,

    /// The term number (1 or 2, 0 for whole year).
    #[serde(default)]
    pub term: i32,
}
