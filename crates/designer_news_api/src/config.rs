use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://www.designernews.co";
pub const DEFAULT_API_VERSION: &str = "v2";
pub const DEFAULT_USER_AGENT: &str = "designer-news-comments";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct DesignerNewsConfig {
    pub base_url: String,
    pub api_version: String,
    pub access_token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl fmt::Debug for DesignerNewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignerNewsConfig")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl Default for DesignerNewsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerNewsConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!(
            "{}/api/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_v2_api() {
        let config = DesignerNewsConfig::new();
        assert_eq!(config.api_root(), "https://www.designernews.co/api/v2/");
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn api_root_tolerates_stray_slashes() {
        let config = DesignerNewsConfig::new()
            .with_base_url("http://127.0.0.1:1234/")
            .with_api_version("/v1/");
        assert_eq!(config.api_root(), "http://127.0.0.1:1234/api/v1/");
    }

    #[test]
    fn debug_output_hides_access_token() {
        let config = DesignerNewsConfig::new().with_access_token("top-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("https://www.designernews.co"));
    }
}
