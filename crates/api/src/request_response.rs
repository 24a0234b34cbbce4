// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// API request delivered to the booking endpoint.
///
/// This is the wire counterpart of the wizard's submission payload:
/// enums and slots arrive as display strings, the date as an ISO
/// calendar date string or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// The reported pest category (e.g., "Ants", "Bed Bugs").
    pub pest_type: String,
    /// The property kind ("Residential" or "Commercial").
    pub property_type: String,
    /// Business context for the visit.
    pub business_info: String,
    /// Free-text elaboration of the pest problem.
    pub pest_info: String,
    /// The service address.
    pub address: String,
    /// Gate code or access notes (may be empty).
    #[serde(default)]
    pub gate_code: String,
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's email address.
    pub email: String,
    /// The customer's phone number.
    pub phone: String,
    /// The requested service date as `YYYY-MM-DD`, or null.
    pub selected_date: Option<String>,
    /// The requested time slot's display string (e.g., "11:00 AM").
    pub selected_time: String,
}

/// API response for a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Success indicator.
    pub success: bool,
    /// A human-readable acknowledgment.
    pub message: String,
}

/// API request delivered to the contact endpoint.
///
/// The canonical subject key is `subject`; the legacy `service` wire key
/// is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// The submitter's name.
    pub name: String,
    /// The submitter's email address.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional inquiry subject.
    #[serde(default, alias = "service")]
    pub subject: Option<String>,
    /// The inquiry message body.
    pub message: String,
}

/// API response for a contact submission.
///
/// Always carries `success` and `message`; the identifier is present on
/// success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Success indicator.
    pub success: bool,
    /// A human-readable acknowledgment.
    pub message: String,
    /// The persisted submission's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<i64>,
}
