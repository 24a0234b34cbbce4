// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{BookingClient, failure_message};

#[test]
fn test_failure_message_prefers_endpoint_body() {
    let body = r#"{"error": true, "message": "Booking is temporarily unavailable"}"#;

    assert_eq!(
        failure_message(503, body),
        "Booking is temporarily unavailable"
    );
}

#[test]
fn test_failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, "<html>bad gateway</html>"), "HTTP status 502");
    assert_eq!(failure_message(500, ""), "HTTP status 500");
}

#[test]
fn test_failure_message_handles_bodies_without_message() {
    let body = r#"{"error": true}"#;

    assert_eq!(failure_message(422, body), "HTTP status 422");
}

#[test]
fn test_client_targets_the_bookings_route() {
    let client = BookingClient::new("http://127.0.0.1:3000");

    assert_eq!(client.bookings_url(), "http://127.0.0.1:3000/bookings");
}
