// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Field;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Pest type string is not recognized.
    InvalidPestType(String),
    /// Property type string is not recognized.
    InvalidPropertyType(String),
    /// Slot hour falls outside the bookable window.
    InvalidTimeSlot(&'static str),
    /// Slot display string is not one of the bookable slots.
    UnknownTimeSlot(String),
    /// A required field is empty or unset.
    FieldRequired {
        /// The field that is missing.
        field: Field,
    },
    /// A free-text field exceeds its length ceiling.
    FieldTooLong {
        /// The field that is too long.
        field: Field,
        /// The maximum permitted length in characters.
        limit: usize,
    },
    /// A required contact-form field is empty.
    MissingContactField {
        /// The wire name of the missing field.
        field: &'static str,
    },
    /// Email address does not match the structural `local@domain.tld` shape.
    InvalidEmail {
        /// A description of the structural failure.
        reason: &'static str,
    },
    /// Service date falls before the current date.
    DateInPast {
        /// The rejected date.
        date: time::Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPestType(msg) => write!(f, "Invalid pest type: {msg}"),
            Self::InvalidPropertyType(msg) => write!(f, "Invalid property type: {msg}"),
            Self::InvalidTimeSlot(msg) => write!(f, "Invalid time slot: {msg}"),
            Self::UnknownTimeSlot(slot) => write!(f, "Unknown time slot: '{slot}'"),
            Self::FieldRequired { field } => write!(f, "Field '{field}' is required"),
            Self::FieldTooLong { field, limit } => {
                write!(f, "Field '{field}' exceeds the {limit} character limit")
            }
            Self::MissingContactField { field } => {
                write!(f, "Contact field '{field}' is required")
            }
            Self::InvalidEmail { reason } => write!(f, "Invalid email address: {reason}"),
            Self::DateInPast { date } => {
                write!(f, "Service date {date} must be today or later")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
