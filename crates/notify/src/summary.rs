// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The customer-facing view of an accepted booking request.
///
/// Carries display strings only; the API layer builds one from its
/// validated booking after the domain checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's email address (confirmation recipient).
    pub email: String,
    /// The customer's phone number.
    pub phone: String,
    /// The reported pest category, as displayed.
    pub pest_type: String,
    /// The property kind, as displayed.
    pub property_type: String,
    /// Business context for the visit.
    pub business_info: String,
    /// Free-text elaboration of the pest problem.
    pub pest_info: String,
    /// The service address.
    pub address: String,
    /// Gate code or access notes (may be empty).
    pub gate_code: String,
    /// The requested service date as `YYYY-MM-DD`, if chosen.
    pub selected_date: Option<String>,
    /// The requested time slot's display string.
    pub selected_time: String,
}

impl BookingSummary {
    /// Returns the customer's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the requested appointment as a display string.
    #[must_use]
    pub fn appointment(&self) -> String {
        match &self.selected_date {
            Some(date) => format!("{date} at {}", self.selected_time),
            None => String::from("date to be confirmed"),
        }
    }
}
