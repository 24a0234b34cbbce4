// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{PestType, PropertyType, TimeSlot};
use time::Date;

/// Maximum length, in characters, of the free-text booking fields
/// (`business_info`, `pest_info`, `gate_code`).
pub const FREE_TEXT_LIMIT: usize = 250;

/// All user input collected across the booking wizard's data-entry steps.
///
/// A form is created fresh per wizard session and destroyed when the
/// wizard is closed or reset. Fields start at their empty value and are
/// only ever written by the wizard's setters; navigation never clears
/// entered data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    /// The reported pest category.
    pub pest_type: Option<PestType>,
    /// The property kind.
    pub property_type: Option<PropertyType>,
    /// Business context for the visit ("n/a" for residential customers).
    pub business_info: String,
    /// Free-text elaboration of the pest problem.
    pub pest_info: String,
    /// The service address.
    pub address: String,
    /// Optional gate code or access notes.
    pub gate_code: String,
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's email address.
    pub email: String,
    /// The customer's phone number.
    pub phone: String,
    /// The requested service date.
    pub selected_date: Option<Date>,
    /// The requested time slot. Cleared whenever the date changes.
    pub selected_time: Option<TimeSlot>,
}

impl BookingForm {
    /// Creates an empty booking form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

