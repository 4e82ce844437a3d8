use thiserror::Error;

/// Everything that can go wrong between building the request and holding a
/// decoded body. Both variants end up on the same failure branch.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// Transport failure raised by something other than reqwest.
    #[error("transport failure: {0}")]
    Connection(String),
    #[error("could not decode response body as json: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl InvokeError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Connection(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Renders `err` followed by every cause in its source chain, skipping causes
/// whose text is already part of the message.
pub fn report(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
