// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for submission payload construction and wire naming.

use crate::BookingPayload;
use pestaway_domain::{BookingForm, PestType, PropertyType, TimeSlot};
use time::macros::date;

#[test]
fn test_payload_serializes_date_as_iso_calendar_date() {
    let mut form = BookingForm::new();
    form.selected_date = Some(date!(2026 - 07 - 04));

    let payload = BookingPayload::from_form(&form);

    assert_eq!(payload.selected_date.as_deref(), Some("2026-07-04"));
}

#[test]
fn test_payload_serializes_unset_date_as_null() {
    let form = BookingForm::new();

    let payload = BookingPayload::from_form(&form);
    let json = serde_json::to_value(&payload).unwrap();

    assert!(json.get("selectedDate").unwrap().is_null());
}

#[test]
fn test_payload_uses_camel_case_wire_names() {
    let mut form = BookingForm::new();
    form.pest_type = Some(PestType::BedBugs);
    form.property_type = Some(PropertyType::Commercial);
    form.business_info = String::from("warehouse");
    form.gate_code = String::from("#4421");
    form.selected_time = Some(TimeSlot::new(14).unwrap());

    let json = serde_json::to_value(BookingPayload::from_form(&form)).unwrap();

    assert_eq!(json.get("pestType").unwrap(), "Bed Bugs");
    assert_eq!(json.get("propertyType").unwrap(), "Commercial");
    assert_eq!(json.get("businessInfo").unwrap(), "warehouse");
    assert_eq!(json.get("gateCode").unwrap(), "#4421");
    assert_eq!(json.get("selectedTime").unwrap(), "2:00 PM");
}

#[test]
fn test_payload_round_trips_through_json() {
    let mut form = BookingForm::new();
    form.pest_type = Some(PestType::Ants);
    form.email = String::from("j@x.com");
    form.selected_date = Some(date!(2026 - 03 - 11));

    let payload = BookingPayload::from_form(&form);
    let json = serde_json::to_string(&payload).unwrap();
    let decoded: BookingPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, payload);
}
