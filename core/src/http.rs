//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the fetch request and its response as plain data.
//! The core builds an `HttpRequest` and parses an `HttpResponse` without
//! touching the network; whoever implements `Transport` performs the actual
//! round-trip. All fields use owned types so values can be handed to any
//! HTTP client without lifetime concerns.

use crate::error::FetchError;

/// A GET request described as plain data.
///
/// Built by `TodoClient::build_fetch_todos`. The caller executes it and
/// returns the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Executes an `HttpRequest` against the network.
///
/// Implementations must return non-2xx responses as `Ok` data and reserve
/// `Err` for failures where no response was received.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        (**self).execute(request)
    }
}
