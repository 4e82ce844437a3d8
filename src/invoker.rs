use serde_json::Value;

use crate::{
    config::ApiConfig, error::InvokeError, payload::RegistrationPayload, transport::Transport,
};

/// A response body that decoded as JSON, along with the status it came with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Receives the terminal state of a request. Exactly one method is called
/// per [`RequestInvoker::run`].
pub trait OutcomeHandler {
    fn on_success(&mut self, response: &ApiResponse);
    fn on_failure(&mut self, error: &InvokeError);
}

pub struct RequestInvoker<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> RequestInvoker<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn url(&self) -> String {
        self.config.url()
    }

    /// Sends the registration payload once and decodes the reply.
    ///
    /// The status code is not inspected: a 4xx/5xx reply whose body is valid
    /// JSON is an `Ok`. Only transport and decode failures are errors.
    pub async fn invoke(&self) -> Result<ApiResponse, InvokeError> {
        let url = self.url();
        let body =
            serde_json::to_vec(&RegistrationPayload::example()).map_err(InvokeError::Encode)?;

        tracing::debug!("POST {}", url);
        let raw = self.transport.post_json(&url, body).await?;

        let body = serde_json::from_slice::<Value>(&raw.body).map_err(InvokeError::Decode)?;
        let response = ApiResponse {
            status: raw.status,
            body,
        };

        if !response.is_success_status() {
            tracing::warn!(status = response.status, "non-2xx response treated as success");
        }

        Ok(response)
    }

    /// Runs [`invoke`](Self::invoke) and routes the result to `handler`.
    /// Returns `true` when the success branch was taken.
    pub async fn run<H: OutcomeHandler + ?Sized>(&self, handler: &mut H) -> bool {
        match self.invoke().await {
            Ok(response) => {
                handler.on_success(&response);
                true
            }
            Err(err) => {
                tracing::debug!("request to {} failed", self.url());
                handler.on_failure(&err);
                false
            }
        }
    }
}
