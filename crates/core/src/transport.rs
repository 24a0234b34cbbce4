// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::payload::BookingPayload;

/// Errors a submission attempt can report.
///
/// Exactly one of these reaches the wizard per `submit` call; the
/// transport never retries internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered with a failure and a human-readable reason.
    Endpoint {
        /// The endpoint's error message.
        message: String,
    },
    /// The endpoint could not be reached.
    Connection {
        /// A description of the connection failure.
        message: String,
    },
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Endpoint { message } => {
                write!(f, "Booking endpoint rejected the submission: {message}")
            }
            Self::Connection { message } => {
                write!(f, "Failed to reach the booking endpoint: {message}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Delivers a finalized booking payload to the booking endpoint.
///
/// Implementations issue exactly one outbound request per call and
/// propagate exactly one of success or failure(reason); retry policy
/// belongs to the caller.
pub trait SubmissionTransport {
    /// Submits the payload, awaiting the endpoint's structured response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the endpoint rejects the submission
    /// or cannot be reached.
    fn submit(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}
