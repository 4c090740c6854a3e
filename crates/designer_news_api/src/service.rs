//! Remote capability the comment fetcher is built on.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Comment;
use crate::response::ServiceResponse;

/// Looks up comments for a comma-joined list of identifiers.
///
/// Implementations report HTTP-level outcomes through [`ServiceResponse`]
/// and reserve `Err` for failures where no response was obtained at all
/// (connection, timeout, undecodable payload).
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn get_comments(&self, ids: &str) -> Result<ServiceResponse<Vec<Comment>>>;
}
