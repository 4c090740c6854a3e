use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub body: Option<String>,
    pub body_html: Option<String>,
    pub created_at: Option<String>,
    pub depth: Option<u32>,
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub links: CommentLinks,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CommentLinks {
    pub user: Option<u64>,
    pub story: Option<u64>,
    pub parent_comment: Option<u64>,
    #[serde(default)]
    pub comments: Vec<u64>,
    #[serde(default)]
    pub comment_upvotes: Vec<String>,
    #[serde(default)]
    pub comment_downvotes: Vec<String>,
}

/// Top-level object the comments endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct CommentsEnvelope {
    pub comments: Option<Vec<Comment>>,
}

#[cfg(test)]
mod tests {
    use super::{Comment, CommentsEnvelope};

    #[test]
    fn decodes_full_comment_payload() {
        let payload = r#"{
            "id": 2,
            "body": "Nice!",
            "body_html": "<p>Nice!</p>",
            "created_at": "2018-04-12T09:30:00.000Z",
            "depth": 1,
            "vote_count": 7,
            "links": {
                "user": 42,
                "story": 9,
                "parent_comment": 1,
                "comments": [3, 4],
                "comment_upvotes": ["u1"]
            }
        }"#;
        let comment: Comment = serde_json::from_str(payload).unwrap();
        assert_eq!(comment.id, 2);
        assert_eq!(comment.vote_count, Some(7));
        assert_eq!(comment.links.parent_comment, Some(1));
        assert_eq!(comment.links.comments, vec![3, 4]);
        assert!(comment.links.comment_downvotes.is_empty());
    }

    #[test]
    fn missing_links_default_to_empty() {
        let comment: Comment = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(comment.links.user, None);
        assert!(comment.links.comments.is_empty());
    }

    #[test]
    fn envelope_without_comments_key_has_no_body() {
        let envelope: CommentsEnvelope = serde_json::from_str(r#"{"linked": {}}"#).unwrap();
        assert!(envelope.comments.is_none());
    }
}
