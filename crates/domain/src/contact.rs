// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// A validated contact-form inquiry.
///
/// Submissions are created only after validation succeeds, written once
/// to the store, and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// The submitter's name.
    pub name: String,
    /// The submitter's email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional inquiry subject.
    pub subject: Option<String>,
    /// The inquiry message body.
    pub message: String,
    /// When the submission was accepted.
    pub submitted_at: OffsetDateTime,
}

impl ContactSubmission {
    /// Creates a new `ContactSubmission`.
    ///
    /// # Arguments
    ///
    /// * `name` - The submitter's name
    /// * `email` - The submitter's email address
    /// * `phone` - Optional phone number
    /// * `subject` - Optional inquiry subject
    /// * `message` - The inquiry message body
    /// * `submitted_at` - When the submission was accepted
    #[must_use]
    pub const fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
        submitted_at: OffsetDateTime,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            subject,
            message,
            submitted_at,
        }
    }
}
