use std::sync::Arc;

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use spdlog::debug;

use crate::errors::{ApiError, ErrorBody};
use crate::post::{NewPost, PostDetail, PostId, PostRecord};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Typed access to the blog backend.
#[derive(Clone)]
pub struct BlogApi {
    client: Client,
    base_url: Arc<Url>,
}

impl BlogApi {
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with a slash
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Arc::new(Url::parse(&base)?);

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the detailed feed. Anything but a JSON array is an empty feed.
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>> {
        let url = self.base_url.join("blogpost/")?;
        debug!("GET {}", url);

        let res = self.client
            .get(url)
            .query(&[("detailed", "true")])
            .send()
            .await?;

        let bytes = Self::success_bytes(res).await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(vec![]),
        }
    }

    /// Creates a post and returns what the backend echoed back, when it could be read.
    pub async fn create_post(&self, post: &NewPost) -> Result<Option<PostRecord>> {
        let url = self.base_url.join("blogpost/")?;
        debug!("POST {} title={}", url, post.title);

        let res = self.client
            .post(url)
            .json(post)
            .send()
            .await?;

        let bytes = Self::success_bytes(res).await?;
        Ok(Self::parse_created(&bytes))
    }

    pub async fn get_post(&self, id: PostId) -> Result<PostRecord> {
        let url = self.base_url.join(&format!("blogpost/{}/", id))?;
        debug!("GET {}", url);

        let res = self.client.get(url).send().await?;
        let bytes = Self::success_bytes(res).await?;
        let detail = serde_json::from_slice::<PostDetail>(&bytes)?;

        Ok(detail.into())
    }

    pub async fn health(&self) -> Result<Health> {
        let url = self.base_url.join("health")?;
        debug!("GET {}", url);

        let res = self.client.get(url).send().await?;
        let bytes = Self::success_bytes(res).await?;

        Ok(serde_json::from_slice::<Health>(&bytes)?)
    }

    async fn success_bytes(res: Response) -> Result<Vec<u8>> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if !status.is_success() {
            let detail = ErrorBody::parse_detail(&bytes);
            return Err(ApiError::Rejected { status, detail });
        }

        Ok(bytes.to_vec())
    }

    // The backend answers either {"blogpost": {...}, "hasComments_ids": []} or the bare post
    fn parse_created(bytes: &[u8]) -> Option<PostRecord> {
        if let Ok(detail) = serde_json::from_slice::<PostDetail>(bytes) {
            return Some(detail.into());
        }
        serde_json::from_slice::<PostRecord>(bytes).ok()
    }
}
