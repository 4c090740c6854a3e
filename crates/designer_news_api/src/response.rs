//! HTTP-like response handed back by a [`CommentService`](crate::CommentService).

use reqwest::StatusCode;

/// Status line plus an optional decoded body, mirroring what a REST call reports before the caller decides whether it succeeded.
#[derive(Debug, Clone)]
pub struct ServiceResponse<T> {
    status: StatusCode,
    body: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        Self { status, body }
    }

    /// True for any 2xx status.
    pub fn is_successful(&self) -> bool {
        self.status.is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Reason phrase for the status, empty when the code has none.
    pub fn message(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceResponse;
    use reqwest::StatusCode;

    #[test]
    fn exposes_code_and_reason_phrase() {
        let response = ServiceResponse::<Vec<u8>>::new(StatusCode::NOT_FOUND, None);
        assert!(!response.is_successful());
        assert_eq!(response.code(), 404);
        assert_eq!(response.message(), "Not Found");
    }

    #[test]
    fn unknown_status_has_empty_message() {
        let status = StatusCode::from_u16(599).unwrap();
        let response = ServiceResponse::new(status, Some(vec![1u8]));
        assert_eq!(response.message(), "");
        assert_eq!(response.into_body(), Some(vec![1u8]));
    }
}
