//! Text rendering for tool output.
//!
//! Pure functions from typed records to the strings handed back to the
//! calling agent. Grades and exams special-case the empty list with a
//! "no records" sentence; the schedule renders its header alone.

use serde_json::Value;
use zfn_core::{ExamSchedule, GradeReport, SchedulePage, StudentProfile};

/// Render a wire value for display: strings unquoted, numbers exactly as
/// they came off the wire (`3` stays `3`, `4.0` stays `4.0`).
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One-line summary of a verified login.
pub fn login_summary(profile: &StudentProfile) -> String {
    format!("Login successful. User: {} ({})", profile.name, profile.sid)
}

/// Grade listing, or the "no grades" sentence for an empty report.
pub fn grades(report: &GradeReport, year: i32, term: i32) -> String {
    if report.courses.is_empty() {
        return format!("No grades found for {} term {}.", year, term);
    }

    let mut lines = vec![format!("Grades for {} ({}-{}):", report.name, year, term)];
    for course in &report.courses {
        lines.push(format!(
            "- {}: {} (Credit: {}, Point: {})",
            course.title,
            display_value(&course.grade),
            display_value(&course.credit),
            display_value(&course.grade_point)
        ));
    }
    lines.join("\n")
}

/// Class schedule listing. An empty schedule yields the header alone.
pub fn schedule(page: &SchedulePage, year: i32, term: i32) -> String {
    let mut lines = vec![format!("Schedule for {} term {}:", year, term)];
    for course in &page.courses {
        lines.push(format!(
            "- {} ({}): {} {} @ {}",
            course.title,
            course.teacher,
            display_value(&course.weekday),
            course.time,
            course.place
        ));
    }
    lines.join("\n")
}

/// Exam listing, or the "no exams" sentence for an empty schedule.
pub fn exams(schedule: &ExamSchedule, year: i32, term: i32) -> String {
    if schedule.courses.is_empty() {
        return "No exams found.".to_string();
    }

    let mut lines = vec![format!("Exam Schedule for {} term {}:", year, term)];
    for exam in &schedule.courses {
        let seat = exam
            .seat
            .as_ref()
            .map(display_value)
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!(
            "- {}: {} @ {} (Seat: {})",
            exam.title, exam.time, exam.location, seat
        ));
    }
    lines.join("\n")
}

/// The student record as `key: value` lines. `name` and `sid` come first,
/// remaining portal fields follow in key order.
pub fn student_info(profile: &StudentProfile) -> String {
    let mut lines = vec![
        format!("name: {}", profile.name),
        format!("sid: {}", profile.sid),
    ];
    for (key, value) in &profile.extra {
        lines.push(format!("{}: {}", key, display_value(value)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grades_listing() {
        let report: GradeReport = serde_json::from_value(json!({
            "name": "A",
            "courses": [
                {"title": "Math", "grade": "A", "credit": 3, "grade_point": 4.0}
            ]
        }))
        .unwrap();

        assert_eq!(
            grades(&report, 2023, 1),
            "Grades for A (2023-1):\n- Math: A (Credit: 3, Point: 4.0)"
        );
    }

    #[test]
    fn test_grades_empty_list_sentence() {
        let report = GradeReport::default();
        assert_eq!(grades(&report, 2023, 2), "No grades found for 2023 term 2.");
    }

    #[test]
    fn test_schedule_listing() {
        let page: SchedulePage = serde_json::from_value(json!({
            "courses": [
                {"title": "Math", "teacher": "Dr. Wu", "weekday": 3,
                 "time": "08:00-09:40", "place": "A-101"}
            ]
        }))
        .unwrap();

        assert_eq!(
            schedule(&page, 2023, 1),
            "Schedule for 2023 term 1:\n- Math (Dr. Wu): 3 08:00-09:40 @ A-101"
        );
    }

    #[test]
    fn test_schedule_empty_list_keeps_bare_header() {
        // Unlike grades and exams, an empty schedule gets no "no records" sentence.
        let page = SchedulePage::default();
        assert_eq!(schedule(&page, 2023, 1), "Schedule for 2023 term 1:");
    }

    #[test]
    fn test_exams_listing_with_and_without_seat() {
        let exam_schedule: ExamSchedule = serde_json::from_value(json!({
            "courses": [
                {"title": "Math", "time": "09:00", "location": "A-101", "zwh": 42},
                {"title": "Physics", "time": "14:00", "location": "B-202"}
            ]
        }))
        .unwrap();

        assert_eq!(
            exams(&exam_schedule, 2023, 0),
            "Exam Schedule for 2023 term 0:\n\
             - Math: 09:00 @ A-101 (Seat: 42)\n\
             - Physics: 14:00 @ B-202 (Seat: N/A)"
        );
    }

    #[test]
    fn test_exams_empty_list_sentence() {
        let exam_schedule = ExamSchedule::default();
        assert_eq!(exams(&exam_schedule, 2023, 0), "No exams found.");
    }

    #[test]
    fn test_student_info_key_value_lines() {
        let profile: StudentProfile = serde_json::from_value(json!({
            "name": "A",
            "sid": "2021000001",
            "college_name": "Engineering",
            "class_name": "CS-2101"
        }))
        .unwrap();

        assert_eq!(
            student_info(&profile),
            "name: A\nsid: 2021000001\nclass_name: CS-2101\ncollege_name: Engineering"
        );
    }

    #[test]
    fn test_login_summary() {
        let profile: StudentProfile =
            serde_json::from_value(json!({"name": "A", "sid": "2021000001"})).unwrap();
        assert_eq!(
            login_summary(&profile),
            "Login successful. User: A (2021000001)"
        );
    }

    #[test]
    fn test_string_credits_render_unquoted() {
        let report: GradeReport = serde_json::from_value(json!({
            "name": "A",
            "courses": [
                {"title": "PE", "grade": 85, "credit": "1.5", "grade_point": "3.7"}
            ]
        }))
        .unwrap();

        assert_eq!(
            grades(&report, 2024, 1),
            "Grades for A (2024-1):\n- PE: 85 (Credit: 1.5, Point: 3.7)"
        );
    }
}
