//! Backend access: transport, response envelopes, request bodies and the
//! typed REST client.

pub mod client;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod transport;

#[cfg(test)]
pub mod mock;

pub use client::{ApiClient, Operation};
pub use error::ApiError;
pub use payload::{Part, Payload, UploadFile, UploadSet};
pub use transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport};

use crate::config::AppConfig;
use crate::system::auth::AuthContext;

/// Browser client for the configured backend.
pub fn browser_client(config: &AppConfig) -> ApiClient<GlooTransport> {
    ApiClient::new(config.api_base.clone(), AuthContext::from_storage, GlooTransport)
}
