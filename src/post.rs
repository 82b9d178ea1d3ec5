use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cover used when a post comes without an image, or with a blank one.
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800";

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog post as the backend sends it.
///
/// Example of a detailed post
/// {"id": 1, "title": "Hello", "content": "...", "image": "", "timestamp": "2026-01-01",
///  "authorName": "thiago", "hasComments": []}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "authorName", default)]
    pub author_name: String,
    #[serde(rename = "hasComments", default)]
    pub has_comments: Option<Value>,
}

impl PostRecord {
    /// Number of comments, only when the backend sent a list.
    pub fn comment_count(&self) -> Option<usize> {
        match self.has_comments {
            Some(Value::Array(ref comments)) => Some(comments.len()),
            _ => None,
        }
    }
}

impl Display for PostRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, author={}\ntitle={}\ncontent:\n{}",
               self.id,
               self.timestamp,
               self.author_name,
               self.title,
               self.content
        )
    }
}

/// Returns the post image, or the fallback when it is missing or blank.
pub fn resolve_image<'a>(image: Option<&'a str>, fallback: &'a str) -> &'a str {
    match image.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ if !fallback.trim().is_empty() => fallback,
        _ => DEFAULT_IMAGE,
    }
}

/// Body of the create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub content: String,
    pub image: String,
    pub timestamp: String,
    #[serde(rename = "hasComments")]
    pub has_comments: Vec<i64>,
}

/// Single post as returned by `GET /blogpost/{id}/`.
#[derive(Debug, Deserialize)]
pub struct PostDetail {
    pub blogpost: PostRecord,
    #[serde(rename = "hasComments_ids", default)]
    pub comment_ids: Vec<i64>,
}

impl From<PostDetail> for PostRecord {
    fn from(detail: PostDetail) -> Self {
        let comments = detail.comment_ids.into_iter().map(Value::from).collect();
        PostRecord {
            has_comments: Some(Value::Array(comments)),
            ..detail.blogpost
        }
    }
}
