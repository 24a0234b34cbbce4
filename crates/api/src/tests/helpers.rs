// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{BookingRequest, ContactRequest};
use pestaway_domain::ContactSubmission;
use pestaway_notify::{BookingSummary, Notifier, NotifyError};
use std::sync::Mutex;

/// Builds a fully-valid booking request.
pub fn valid_booking_request() -> BookingRequest {
    BookingRequest {
        pest_type: String::from("Ants"),
        property_type: String::from("Residential"),
        business_info: String::from("n/a"),
        pest_info: String::from("small ants in kitchen"),
        address: String::from("1 Main St"),
        gate_code: String::new(),
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("j@x.com"),
        phone: String::from("555-0100"),
        selected_date: Some(String::from("2026-03-11")),
        selected_time: String::from("11:00 AM"),
    }
}

/// Builds a fully-valid contact request.
pub fn valid_contact_request() -> ContactRequest {
    ContactRequest {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: Some(String::from("555-0100")),
        subject: Some(String::from("Quarterly service")),
        message: String::from("Seeing ants again near the garage."),
    }
}

/// Test notifier that records send labels and answers with a fixed
/// outcome.
pub struct MockNotifier {
    /// Whether every send fails.
    fail_sends: bool,
    /// Labels of attempted sends, in call order.
    sent: Mutex<Vec<&'static str>>,
}

impl MockNotifier {
    /// Creates a notifier whose sends all succeed.
    pub fn reliable() -> Self {
        Self {
            fail_sends: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Creates a notifier whose sends all fail.
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Returns the labels of attempted sends so far.
    pub fn sent(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, label: &'static str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(label);
        if self.fail_sends {
            Err(NotifyError::Send(String::from("relay refused connection")))
        } else {
            Ok(())
        }
    }
}

impl Notifier for MockNotifier {
    async fn send_booking_confirmation(&self, _: &BookingSummary) -> Result<(), NotifyError> {
        self.record("booking_confirmation")
    }

    async fn send_booking_alert(&self, _: &BookingSummary) -> Result<(), NotifyError> {
        self.record("booking_alert")
    }

    async fn send_contact_confirmation(&self, _: &ContactSubmission) -> Result<(), NotifyError> {
        self.record("contact_confirmation")
    }

    async fn send_contact_alert(&self, _: &ContactSubmission) -> Result<(), NotifyError> {
        self.record("contact_alert")
    }
}
