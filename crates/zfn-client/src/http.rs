//! reqwest-backed portal client.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use zfn_core::{
    Envelope, Error, ExamSchedule, GradeReport, PortalApi, Result, SchedulePage, StudentProfile,
};

/// HTTP client for the portal's JSON API.
///
/// Credentials live in the cookie jar the portal populates at login;
/// `has_credentials` inspects that jar and nothing else. The client has no
/// logout path and no retry behavior.
#[derive(Debug)]
pub struct HttpPortalClient {
    client: reqwest::Client,
    jar: Arc<Jar>,
    base: Url,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    sid: &'a str,
    password: &'a str,
}

impl HttpPortalClient {
    /// Create a client bound to the portal base address.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid portal base address: {}", e)))?;

        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self { client, jar, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::message(format!("Invalid portal endpoint '{}': {}", path, e)))
    }

    async fn query<T: DeserializeOwned + Default>(&self, path: &str, params: &[(&str, i32)]) -> Result<T> {
        let url = self.endpoint(path)?;

        tracing::debug!(path = %path, params = ?params, "Querying portal");

        let envelope: Envelope<T> = self
            .client
            .get(url)
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        envelope.into_result()
    }
}

#[async_trait]
impl PortalApi for HttpPortalClient {
    fn has_credentials(&self) -> bool {
        self.jar.cookies(&self.base).is_some()
    }

    async fn login(&self, sid: &str, password: &str) -> Result<()> {
        let url = self.endpoint("login")?;

        tracing::debug!(sid = %sid, "Logging in to portal");

        let envelope: Envelope<serde_json::Value> = self
            .client
            .post(url)
            .json(&LoginRequest { sid, password })
            .send()
            .await?
            .json()
            .await?;

        envelope.ack()
    }

    async fn info(&self) -> Result<StudentProfile> {
        self.query("info", &[]).await
    }

    async fn grades(&self, year: i32, term: i32) -> Result<GradeReport> {
        self.query("grade", &[("year", year), ("term", term)]).await
    }

    async fn schedule(&self, year: i32, term: i32) -> Result<SchedulePage> {
        self.query("schedule", &[("year", year), ("term", term)])
            .await
    }

    async fn exams(&self, year: i32, term: i32) -> Result<ExamSchedule> {
        self.query("exam_schedule", &[("year", year), ("term", term)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_below_base_path() {
        let client = HttpPortalClient::new("https://jw.example.edu/jwglxt").unwrap();
        let url = client.endpoint("grade").unwrap();
        assert_eq!(url.as_str(), "https://jw.example.edu/jwglxt/grade");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = HttpPortalClient::new("https://jw.example.edu/").unwrap();
        let url = client.endpoint("login").unwrap();
        assert_eq!(url.as_str(), "https://jw.example.edu/login");
    }

    #[test]
    fn test_invalid_base_address_is_a_config_error() {
        let err = HttpPortalClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_fresh_client_has_no_credentials() {
        let client = HttpPortalClient::new("https://jw.example.edu").unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_cookie_set_counts_as_credentials() {
        let client = HttpPortalClient::new("https://jw.example.edu").unwrap();
        client
            .jar
            .add_cookie_str("JSESSIONID=abc123; Path=/", &client.base);
        assert!(client.has_credentials());
    }
}
