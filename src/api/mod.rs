// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensu API passthrough layer
//!
//! Builds and sends one HTTP request per call ([`SensuClient`]) and
//! classifies the reply into an [`Outcome`] ([`interpret`]).

mod client;
mod outcome;

pub use client::SensuClient;
pub use outcome::{interpret, Outcome, Severity, StatusMessage};

use serde::{Deserialize, Serialize};

/// One logical API request: verb, path, and (for POST) a JSON payload.
///
/// Constructed per call and consumed by [`SensuClient::request`]. The path
/// is used verbatim as the HTTP target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: String,
    pub path: String,
    pub payload: Option<serde_json::Value>,
}

impl RequestSpec {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        payload: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            payload,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path, None)
    }

    pub fn post(path: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new("POST", path, Some(payload))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path, None)
    }
}

/// Raw status and body of the server's reply, before interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("request timed out")]
    Timeout,

    #[error("TLS handshake failed: {0}")]
    TlsHandshake(String),

    #[error("response body is not valid JSON: {0}")]
    MalformedResponseBody(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(String),
}
