// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use pestaway_domain::{DomainError, Field};

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract;
/// the HTTP layer maps them onto status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The wire name of the invalid field.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The durable write failed; the submission was not captured.
    PersistenceFailure {
        /// A description of the underlying failure.
        message: String,
        /// Whatever partial identifier was produced before the failure.
        partial_id: Option<i64>,
    },
    /// Notification email is not configured, and the operation requires it.
    NotificationUnavailable,
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::PersistenceFailure { message, .. } => {
                write!(f, "Failed to save the submission: {message}")
            }
            Self::NotificationUnavailable => {
                write!(f, "Booking is temporarily unavailable, please try again later")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Returns a booking-form field's wire (camelCase) name.
const fn wire_name(field: Field) -> &'static str {
    match field {
        Field::PestType => "pestType",
        Field::PropertyType => "propertyType",
        Field::BusinessInfo => "businessInfo",
        Field::PestInfo => "pestInfo",
        Field::Address => "address",
        Field::GateCode => "gateCode",
        Field::FirstName => "firstName",
        Field::LastName => "lastName",
        Field::Email => "email",
        Field::Phone => "phone",
        Field::SelectedDate => "selectedDate",
        Field::SelectedTime => "selectedTime",
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly; field identifiers are converted to their wire names.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPestType(msg) => ApiError::InvalidInput {
            field: String::from("pestType"),
            message: msg,
        },
        DomainError::InvalidPropertyType(msg) => ApiError::InvalidInput {
            field: String::from("propertyType"),
            message: msg,
        },
        DomainError::InvalidTimeSlot(msg) => ApiError::InvalidInput {
            field: String::from("selectedTime"),
            message: msg.to_string(),
        },
        DomainError::UnknownTimeSlot(slot) => ApiError::InvalidInput {
            field: String::from("selectedTime"),
            message: format!("Unknown time slot: '{slot}'"),
        },
        DomainError::FieldRequired { field } => ApiError::InvalidInput {
            field: wire_name(field).to_string(),
            message: format!("Field '{}' is required", wire_name(field)),
        },
        DomainError::FieldTooLong { field, limit } => ApiError::InvalidInput {
            field: wire_name(field).to_string(),
            message: format!(
                "Field '{}' exceeds the {limit} character limit",
                wire_name(field)
            ),
        },
        DomainError::MissingContactField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Field '{field}' is required"),
        },
        DomainError::InvalidEmail { reason } => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("Invalid email address: {reason}"),
        },
        DomainError::DateInPast { date } => ApiError::InvalidInput {
            field: String::from("selectedDate"),
            message: format!("Service date {date} must be today or later"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("selectedDate"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}
