//! Cart API Transport
//!
//! Raw request/response plumbing between the cart client and the server.
//! The browser build talks through `fetch`; tests plug in canned replies.

mod fetch;

use async_trait::async_trait;

use crate::error::CartError;

pub use fetch::FetchTransport;

// ========================
// Endpoints
// ========================

pub const ADD_PATH: &str = "/api/cart/add";
pub const GET_PATH: &str = "/api/cart/get";
pub const UPDATE_PATH: &str = "/api/cart/update";
pub const REMOVE_PATH: &str = "/api/cart/remove";
pub const CLEAR_PATH: &str = "/api/cart/clear";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One outgoing request; `body` is already-serialized JSON
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<String>,
}

/// Status and raw body of a completed request
#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait CartTransport {
    /// Perform the request. Only transport failures are errors; any HTTP
    /// status comes back as a reply.
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, CartError>;
}
