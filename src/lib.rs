pub mod config;
pub mod error;
pub mod invoker;
pub mod payload;
pub mod transport;

pub use config::ApiConfig;
pub use error::InvokeError;
pub use invoker::{ApiResponse, OutcomeHandler, RequestInvoker};
pub use payload::{RegistrationPayload, UserRecord};
pub use transport::{HttpTransport, RawResponse, Transport};
