//! The five portal tools exposed over MCP.

use crate::format;
use crate::params::{ExamParams, GradesParams, ScheduleParams};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use zfn_core::Error;
use zfn_session::SessionProvider;

/// MCP server exposing the portal operations as tools.
///
/// Every tool resolves to a single text block. Failures never surface as
/// protocol errors; they are rendered into the text itself, so the calling
/// agent always gets a sentence it can show.
#[derive(Clone)]
pub struct PortalServer {
    sessions: Arc<SessionProvider>,
    tool_router: ToolRouter<Self>,
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl PortalServer {
    pub fn new(sessions: Arc<SessionProvider>) -> Self {
        Self {
            sessions,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Check if the current session is valid and login is successful.")]
    async fn login_check(&self) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.login_check_text().await))
    }

    #[tool(
        description = "Get grades for a specific year and term. Term 0 means the whole year."
    )]
    async fn get_my_grades(
        &self,
        Parameters(params): Parameters<GradesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.grades_text(params.year, params.term).await))
    }

    #[tool(description = "Get the class schedule for a specific year and term.")]
    async fn get_my_schedule(
        &self,
        Parameters(params): Parameters<ScheduleParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(
            self.schedule_text(params.year, params.term).await,
        ))
    }

    #[tool(description = "Get the student's personal information.")]
    async fn get_student_info(&self) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.student_info_text().await))
    }

    #[tool(
        description = "Get the exam schedule for a specific year and term. Term 0 means the whole year."
    )]
    async fn get_exam_schedule(
        &self,
        Parameters(params): Parameters<ExamParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(self.exams_text(params.year, params.term).await))
    }
}

// Text-producing operations behind the tools. Split out of the router impl
// so integration tests can drive them without MCP plumbing.
impl PortalServer {
    /// Session check: acquire a session and verify it with a lightweight
    /// authenticated query.
    pub async fn login_check_text(&self) -> String {
        match self.try_login_check().await {
            Ok(text) => text,
            Err(Error::Portal { msg, .. }) => format!("Session check failed: {}", msg),
            Err(e) => format!("Login check error: {}", e),
        }
    }

    pub async fn grades_text(&self, year: i32, term: i32) -> String {
        match self.try_grades(year, term).await {
            Ok(text) => text,
            Err(Error::Portal { msg, .. }) => format!("Error getting grades: {}", msg),
            Err(e) => format!("Error executing get_my_grades: {}", e),
        }
    }

    pub async fn schedule_text(&self, year: i32, term: i32) -> String {
        match self.try_schedule(year, term).await {
            Ok(text) => text,
            Err(Error::Portal { msg, .. }) => format!("Error getting schedule: {}", msg),
            Err(e) => format!("Error executing get_my_schedule: {}", e),
        }
    }

    pub async fn student_info_text(&self) -> String {
        match self.try_student_info().await {
            Ok(text) => text,
            Err(Error::Portal { msg, .. }) => format!("Error getting student info: {}", msg),
            Err(e) => format!("Error executing get_student_info: {}", e),
        }
    }

    pub async fn exams_text(&self, year: i32, term: i32) -> String {
        match self.try_exams(year, term).await {
            Ok(text) => text,
            Err(Error::Portal { msg, .. }) => format!("Error getting exam schedule: {}", msg),
            Err(e) => format!("Error executing get_exam_schedule: {}", e),
        }
    }

    async fn try_login_check(&self) -> zfn_core::Result<String> {
        let client = self.sessions.acquire().await?;
        let profile = client.info().await?;
        Ok(format::login_summary(&profile))
    }

    async fn try_grades(&self, year: i32, term: i32) -> zfn_core::Result<String> {
        let client = self.sessions.acquire().await?;
        let report = client.grades(year, term).await?;
        Ok(format::grades(&report, year, term))
    }

    async fn try_schedule(&self, year: i32, term: i32) -> zfn_core::Result<String> {
        let client = self.sessions.acquire().await?;
        let page = client.schedule(year, term).await?;
        Ok(format::schedule(&page, year, term))
    }

    async fn try_student_info(&self) -> zfn_core::Result<String> {
        let client = self.sessions.acquire().await?;
        let profile = client.info().await?;
        Ok(format::student_info(&profile))
    }

    async fn try_exams(&self, year: i32, term: i32) -> zfn_core::Result<String> {
        let client = self.sessions.acquire().await?;
        let exam_schedule = client.exams(year, term).await?;
        Ok(format::exams(&exam_schedule, year, term))
    }
}

#[tool_handler]
impl ServerHandler for PortalServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Zhengfang academic portal tools.\n\n\
                Query a university academic information system on behalf of a\n\
                logged-in student: check the session, list grades, the class\n\
                schedule, the exam schedule, and personal information. Year is\n\
                the academic year (2023 means 2023-2024); term is 1 or 2, and 0\n\
                means the whole year where a tool accepts it. Every tool returns\n\
                a plain text summary; failures come back as text sentences, not\n\
                protocol errors."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use zfn_core::{
        ExamSchedule, GradeReport, PortalApi, PortalConfig, Result, SchedulePage, StudentProfile,
    };

    // Portal whose queries all fail with the same scripted outcome.
    struct ScriptedPortal {
        query_error: Option<(i64, String)>,
    }

    impl ScriptedPortal {
        fn healthy() -> Self {
            Self { query_error: None }
        }

        fn failing(code: i64, msg: &str) -> Self {
            Self {
                query_error: Some((code, msg.to_string())),
            }
        }

        fn check(&self) -> Result<()> {
            match &self.query_error {
                Some((code, msg)) => Err(Error::Portal {
                    code: *code,
                    msg: msg.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PortalApi for ScriptedPortal {
        fn has_credentials(&self) -> bool {
            true
        }

        async fn login(&self, _sid: &str, _password: &str) -> Result<()> {
            Ok(())
        }

        async fn info(&self) -> Result<StudentProfile> {
            self.check()?;
            Ok(serde_json::from_value(
                serde_json::json!({"name": "A", "sid": "2021000001"}),
            )?)
        }

        async fn grades(&self, _year: i32, _term: i32) -> Result<GradeReport> {
            self.check()?;
            Ok(GradeReport::default())
        }

        async fn schedule(&self, _year: i32, _term: i32) -> Result<SchedulePage> {
            self.check()?;
            Ok(SchedulePage::default())
        }

        async fn exams(&self, _year: i32, _term: i32) -> Result<ExamSchedule> {
            self.check()?;
            Ok(ExamSchedule::default())
        }
    }

    fn server_over(portal: ScriptedPortal) -> PortalServer {
        let portal = Arc::new(portal);
        let provider = SessionProvider::builder()
            .config_source(|| {
                Ok(PortalConfig {
                    base_url: "https://jw.example.edu".to_string(),
                    sid: "2021000001".to_string(),
                    password: "hunter2".to_string(),
                })
            })
            .connector(move |_| Ok(Arc::clone(&portal) as Arc<dyn PortalApi>))
            .build();
        PortalServer::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_login_check_reports_user() {
        let server = server_over(ScriptedPortal::healthy());
        assert_eq!(
            server.login_check_text().await,
            "Login successful. User: A (2021000001)"
        );
    }

    #[tokio::test]
    async fn test_portal_rejection_renders_operation_sentence() {
        let server = server_over(ScriptedPortal::failing(1005, "Evaluation not completed"));

        assert_eq!(
            server.grades_text(2023, 1).await,
            "Error getting grades: Evaluation not completed"
        );
        assert_eq!(
            server.schedule_text(2023, 1).await,
            "Error getting schedule: Evaluation not completed"
        );
        assert_eq!(
            server.student_info_text().await,
            "Error getting student info: Evaluation not completed"
        );
        assert_eq!(
            server.exams_text(2023, 0).await,
            "Error getting exam schedule: Evaluation not completed"
        );
        assert_eq!(
            server.login_check_text().await,
            "Session check failed: Evaluation not completed"
        );
    }

    #[tokio::test]
    async fn test_config_error_renders_executing_sentence() {
        let provider = SessionProvider::builder()
            .config_source(|| PortalConfig::from_lookup(|_| None))
            .build();
        let server = PortalServer::new(Arc::new(provider));

        let text = server.grades_text(2023, 1).await;
        assert!(text.starts_with("Error executing get_my_grades:"), "{}", text);
        assert!(text.contains("ZFN_URL"), "{}", text);

        let text = server.login_check_text().await;
        assert!(text.starts_with("Login check error:"), "{}", text);
    }

    #[tokio::test]
    async fn test_empty_listings() {
        let server = server_over(ScriptedPortal::healthy());

        assert_eq!(
            server.grades_text(2023, 1).await,
            "No grades found for 2023 term 1."
        );
        assert_eq!(server.exams_text(2023, 0).await, "No exams found.");
        assert_eq!(
            server.schedule_text(2023, 1).await,
            "Schedule for 2023 term 1:"
        );
    }
}
