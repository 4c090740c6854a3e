//! Typed Designer News API client crate used by the app backend.

pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod result;
pub mod service;

pub use client::DesignerNewsClient;
pub use comments::CommentsRemoteDataSource;
pub use config::DesignerNewsConfig;
pub use error::{DesignerNewsError, Result};
pub use models::{Comment, CommentLinks};
pub use response::ServiceResponse;
pub use result::FetchResult;
pub use service::CommentService;

pub use reqwest::StatusCode;
