// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while building or sending notification email.
///
/// Messages never include credential material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// A sender or recipient address failed to parse.
    #[error("Invalid email address: {0}")]
    Address(String),
    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(String),
    /// The SMTP relay could not be configured.
    #[error("SMTP relay error: {0}")]
    Relay(String),
    /// The send itself failed.
    #[error("Failed to send email: {0}")]
    Send(String),
    /// The blocking send task failed to complete.
    #[error("Email task failed: {0}")]
    Task(String),
}
