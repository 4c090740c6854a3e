use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use reqwest::StatusCode;

use crate::error::{DesignerNewsError, Result};
use crate::models::Comment;
use crate::response::ServiceResponse;
use crate::result::FetchResult;
use crate::service::CommentService;

static INSTANCE: OnceCell<CommentsRemoteDataSource> = OnceCell::new();

/// Fetches batches of comments by id and folds every outcome into a [`FetchResult`].
pub struct CommentsRemoteDataSource {
    service: Arc<dyn CommentService>,
}

impl fmt::Debug for CommentsRemoteDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentsRemoteDataSource").finish_non_exhaustive()
    }
}

impl CommentsRemoteDataSource {
    pub fn new(service: Arc<dyn CommentService>) -> Self {
        Self { service }
    }

    /// Returns the process-wide data source, creating it from `service` on first use.
    ///
    /// Concurrent first callers block until one of them has initialised the
    /// instance. Once it exists the `service` argument is ignored.
    pub fn get_instance(service: Arc<dyn CommentService>) -> &'static CommentsRemoteDataSource {
        INSTANCE.get_or_init(|| Self::new(service))
    }

    /// Requests all `ids` in a single call. Any failure fails the whole batch.
    pub async fn get_comments(&self, ids: &[u64]) -> FetchResult<Vec<Comment>> {
        let request_ids = join_ids(ids);
        let outcome = self
            .service
            .get_comments(&request_ids)
            .await
            .map_err(|err| {
                tracing::warn!(ids = %request_ids, error = %err, "comments request failed");
                err
            })
            .and_then(comments_from);
        FetchResult::from(outcome)
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn comments_from(response: ServiceResponse<Vec<Comment>>) -> Result<Vec<Comment>> {
    let status = response.status();
    if response.is_successful() {
        if let Some(comments) = response.into_body() {
            return Ok(comments);
        }
    }
    tracing::warn!(%status, "comments response unusable");
    Err(fetch_failure(status))
}

fn fetch_failure(status: StatusCode) -> DesignerNewsError {
    DesignerNewsError::http(
        status,
        format!(
            "Error getting comments {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ),
    )
}
