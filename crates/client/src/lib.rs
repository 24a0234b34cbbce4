// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP submission transport for the PestAway booking wizard.
//!
//! [`BookingClient`] delivers a finalized booking payload to the booking
//! endpoint with a single `POST` per attempt. It never retries
//! internally: retry is always a fresh user-initiated action in the
//! wizard, and no timeout or backoff is layered on top of the underlying
//! client's defaults.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(test)]
mod tests;

use pestaway::{BookingPayload, SubmissionTransport, TransportError};
use serde::Deserialize;

/// The booking endpoint's JSON error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    /// The human-readable failure reason.
    message: Option<String>,
}

/// Extracts the endpoint's failure reason from a non-success response.
///
/// Falls back to the HTTP status when the body does not carry the
/// documented error shape.
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| format!("HTTP status {status}"))
}

/// HTTP transport targeting the booking endpoint.
#[derive(Debug, Clone)]
pub struct BookingClient {
    /// Base URL of the booking service (no trailing slash).
    base_url: String,
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl BookingClient {
    /// Creates a transport for the given booking service.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the booking service (no trailing slash)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the bookings endpoint URL.
    fn bookings_url(&self) -> String {
        format!("{}/bookings", self.base_url)
    }
}

impl SubmissionTransport for BookingClient {
    async fn submit(&self, payload: &BookingPayload) -> Result<(), TransportError> {
        let response = self
            .http
            .post(self.bookings_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: String = response.text().await.unwrap_or_default();
        Err(TransportError::Endpoint {
            message: failure_message(status.as_u16(), &body),
        })
    }
}
