use crate::config::DesignerNewsConfig;
use crate::error::{DesignerNewsError, Result};
use crate::models::{Comment, CommentsEnvelope};
use crate::response::ServiceResponse;
use crate::service::CommentService;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, Response};

#[derive(Clone, Debug)]
pub struct DesignerNewsClient {
    http: HttpClient,
    config: DesignerNewsConfig,
}

impl DesignerNewsClient {
    pub fn new(config: DesignerNewsConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &DesignerNewsConfig {
        &self.config
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        let trimmed = path.trim_start_matches('/');
        base.push_str(trimmed);
        base
    }

    async fn read_comments(response: Response) -> Result<ServiceResponse<Vec<Comment>>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, %body, "comments request rejected");
            return Ok(ServiceResponse::new(status, None));
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ServiceResponse::new(status, None));
        }
        let envelope = serde_json::from_slice::<Option<CommentsEnvelope>>(&bytes)?;
        Ok(ServiceResponse::new(
            status,
            envelope.and_then(|payload| payload.comments),
        ))
    }
}

#[async_trait]
impl CommentService for DesignerNewsClient {
    async fn get_comments(&self, ids: &str) -> Result<ServiceResponse<Vec<Comment>>> {
        let url = self.url_for(&format!("comments/{}", ids));
        tracing::debug!(ids, "requesting comments");
        let response = self.http.get(url).send().await?;
        Self::read_comments(response).await
    }
}

fn build_http_client(config: &DesignerNewsConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    if let Some(token) = &config.access_token {
        let mut auth_value = header_value(format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
    }

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| DesignerNewsError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| DesignerNewsError::Other(err.to_string()))
}
