//! HTTP boundary for the user resource.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{Result, TransportError, UserError};
use crate::types::{UserDto, UserId};

const USERS_PATH: [&str; 2] = ["api", "users"];

/// The three operations the user resource supports.
///
/// Payloads come back as raw JSON; shaping them is the repository's job.
/// Each call is a single attempt with no retry and no timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_user(&self, id: &UserId) -> std::result::Result<Value, TransportError>;

    async fn replace_user(&self, dto: &UserDto) -> std::result::Result<Value, TransportError>;

    async fn delete_user(&self, id: &UserId) -> std::result::Result<(), TransportError>;
}

pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| UserError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(UserError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            http: Client::new(),
            base_url: parsed,
        })
    }

    /// `{base}/api/users/{id}`, with the id percent-encoded as one segment.
    pub fn user_url(&self, id: &UserId) -> Url {
        let mut url = self.base_url.clone();
        let id = id.to_string();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(USERS_PATH)
                .push(&id);
        }
        url
    }

    async fn check_status(response: Response) -> std::result::Result<Response, TransportError> {
        if response.status().is_success() {
            return Ok(response);
        }

        Err(TransportError::Status {
            status: response.status().as_u16(),
            message: response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string()),
        })
    }

    async fn decode(response: Response) -> std::result::Result<Value, TransportError> {
        let body = Self::check_status(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_user(&self, id: &UserId) -> std::result::Result<Value, TransportError> {
        let url = self.user_url(id);
        debug!(%url, "GET user");

        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn replace_user(&self, dto: &UserDto) -> std::result::Result<Value, TransportError> {
        let url = self.user_url(&dto.id);
        debug!(%url, "PUT user");

        let response = self
            .http
            .put(url)
            .json(dto)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_user(&self, id: &UserId) -> std::result::Result<(), TransportError> {
        let url = self.user_url(id);
        debug!(%url, "DELETE user");

        let response = self.http.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
