// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingPayload, SubmissionTransport, TransportError, WizardState};
use pestaway_domain::{PestType, PropertyType, TimeSlot};
use std::str::FromStr;
use std::sync::Mutex;
use time::Date;
use time::macros::date;

/// Fixed "current date" for deterministic scheduling tests.
pub fn today() -> Date {
    date!(2026 - 03 - 10)
}

/// The day after [`today`].
pub fn tomorrow() -> Date {
    date!(2026 - 03 - 11)
}

/// Fills step 1 (pest and property selections).
pub fn fill_pest_selection(wizard: &mut WizardState) {
    wizard.set_pest_type(PestType::Ants);
    wizard.set_property_type(PropertyType::Residential);
}

/// Fills step 2 (business and pest details).
pub fn fill_details(wizard: &mut WizardState) {
    wizard.set_business_info("n/a");
    wizard.set_pest_info("small ants in kitchen");
}

/// Fills step 3 (service address).
pub fn fill_location(wizard: &mut WizardState) {
    wizard.set_address("1 Main St");
}

/// Fills step 4 (contact details).
pub fn fill_contact(wizard: &mut WizardState) {
    wizard.set_first_name("Jane");
    wizard.set_last_name("Doe");
    wizard.set_email("j@x.com");
    wizard.set_phone("555-0100");
}

/// Fills step 5 (date and slot).
pub fn fill_schedule(wizard: &mut WizardState) {
    wizard.set_selected_date(Some(tomorrow()));
    wizard.set_selected_time(TimeSlot::from_str("11:00 AM").unwrap());
}

/// Walks a fresh wizard through every data-entry step to the review step.
pub fn wizard_at_review() -> WizardState {
    let mut wizard = WizardState::new();
    fill_pest_selection(&mut wizard);
    wizard.advance().unwrap();
    fill_details(&mut wizard);
    wizard.advance().unwrap();
    fill_location(&mut wizard);
    wizard.advance().unwrap();
    fill_contact(&mut wizard);
    wizard.advance().unwrap();
    fill_schedule(&mut wizard);
    wizard.advance().unwrap();
    wizard
}

/// Test transport that records every payload it receives and answers
/// with a fixed outcome.
pub struct RecordingTransport {
    /// The outcome every `submit` call reports.
    outcome: Result<(), TransportError>,
    /// Payloads received, in call order.
    payloads: Mutex<Vec<BookingPayload>>,
}

impl RecordingTransport {
    /// Creates a transport that accepts every submission.
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Creates a transport that rejects every submission with the given
    /// endpoint message.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(TransportError::Endpoint {
                message: message.to_string(),
            }),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Returns how many submissions were attempted.
    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Returns the most recently submitted payload.
    pub fn last_payload(&self) -> Option<BookingPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

impl SubmissionTransport for RecordingTransport {
    async fn submit(&self, payload: &BookingPayload) -> Result<(), TransportError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}
