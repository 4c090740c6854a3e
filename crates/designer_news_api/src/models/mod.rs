mod comment;

pub use comment::{Comment, CommentLinks, CommentsEnvelope};
