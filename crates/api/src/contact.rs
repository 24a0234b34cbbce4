// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The contact pipeline: validate, persist, then best-effort notify.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{ContactRequest, ContactResponse};
use pestaway_domain::{ContactSubmission, validate_contact_fields};
use pestaway_notify::Notifier;
use pestaway_persistence::SqliteStore;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Validates a contact request's required fields.
///
/// Requires a non-empty name, a structurally valid email, and a
/// non-empty message; phone and subject are optional.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the offending field.
pub fn validate_contact(request: &ContactRequest) -> Result<(), ApiError> {
    validate_contact_fields(&request.name, &request.email, &request.message)
        .map_err(translate_domain_error)
}

/// Runs the contact pipeline for one request.
///
/// On validation success the submission is persisted first; the durable
/// record is the business value, so a persistence failure fails the
/// whole operation with the underlying detail. The two notification
/// emails are then attempted best-effort: a missing notifier or a failed
/// send is logged and never affects the reported outcome.
///
/// # Arguments
///
/// * `store` - The contact submission store
/// * `notifier` - The notifier, when email credentials are configured
/// * `request` - The contact request to process
/// * `now` - The acceptance timestamp recorded on the submission
///
/// # Errors
///
/// * `ApiError::InvalidInput` if validation fails
/// * `ApiError::PersistenceFailure` if the durable write fails
pub async fn submit_contact<N: Notifier + Sync>(
    store: &SqliteStore,
    notifier: Option<&N>,
    request: &ContactRequest,
    now: OffsetDateTime,
) -> Result<ContactResponse, ApiError> {
    validate_contact(request)?;

    let submission = ContactSubmission::new(
        request.name.clone(),
        request.email.clone(),
        request.phone.clone(),
        request.subject.clone(),
        request.message.clone(),
        now,
    );

    let id: i64 = store
        .insert_contact_submission(&submission)
        .map_err(|e| ApiError::PersistenceFailure {
            message: e.to_string(),
            partial_id: None,
        })?;

    if let Some(notifier) = notifier {
        if let Err(e) = notifier.send_contact_confirmation(&submission).await {
            warn!(error = %e, id, "Contact confirmation email failed");
        }
        if let Err(e) = notifier.send_contact_alert(&submission).await {
            warn!(error = %e, id, "Contact alert email failed");
        }
    } else {
        info!(id, "Email not configured; submission persisted without notifications");
    }

    Ok(ContactResponse {
        success: true,
        message: String::from("Thanks for reaching out! We'll get back to you shortly."),
        submission_id: Some(id),
    })
}
