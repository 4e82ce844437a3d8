use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};

use crate::error::InvokeError;

/// A response as it came off the wire, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport {
    /// Sends `body` as a JSON POST to `url` and hands back whatever the server
    /// answered with, whatever the status code.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, InvokeError>;
}

#[async_trait]
impl<T: Transport + Sync + ?Sized> Transport for &T {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, InvokeError> {
        (**self).post_json(url, body).await
    }
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, InvokeError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
