// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pestaway_domain::BookingForm;
use serde::{Deserialize, Serialize};

/// The wire shape delivered to the booking endpoint.
///
/// Field names follow the endpoint contract (camelCase). The service
/// date is pre-serialized to an ISO calendar date string (`YYYY-MM-DD`)
/// or null when unset; enums and slots are carried as their display
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// The reported pest category.
    pub pest_type: String,
    /// The property kind.
    pub property_type: String,
    /// Business context for the visit.
    pub business_info: String,
    /// Free-text elaboration of the pest problem.
    pub pest_info: String,
    /// The service address.
    pub address: String,
    /// Gate code or access notes (may be empty).
    pub gate_code: String,
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's email address.
    pub email: String,
    /// The customer's phone number.
    pub phone: String,
    /// The requested service date as `YYYY-MM-DD`, or null if unset.
    pub selected_date: Option<String>,
    /// The requested time slot's display string (empty if unset).
    pub selected_time: String,
}

impl BookingPayload {
    /// Serializes a booking form into the wire shape.
    ///
    /// The wizard's step gates guarantee a fully-populated form at
    /// submission time; unset optional values serialize to null (date)
    /// or the empty string (selections) rather than failing.
    #[must_use]
    pub fn from_form(form: &BookingForm) -> Self {
        Self {
            pest_type: form
                .pest_type
                .map_or_else(String::new, |p| p.as_str().to_string()),
            property_type: form
                .property_type
                .map_or_else(String::new, |p| p.as_str().to_string()),
            business_info: form.business_info.clone(),
            pest_info: form.pest_info.clone(),
            address: form.address.clone(),
            gate_code: form.gate_code.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            selected_date: form.selected_date.map(|date| date.to_string()),
            selected_time: form
                .selected_time
                .map_or_else(String::new, |slot| slot.as_str().to_string()),
        }
    }
}
