// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingForm, DomainError, FREE_TEXT_LIMIT, Field, PestType, PropertyType, TimeSlot,
    validate_contact_fields, validate_email, validate_field,
};
use time::macros::date;

fn test_today() -> time::Date {
    date!(2026 - 03 - 10)
}

// ============================================================================
// Email Validation Tests
// ============================================================================

#[test]
fn test_validate_email_rejects_empty_string() {
    assert!(validate_email("").is_err());
}

#[test]
fn test_validate_email_rejects_missing_at() {
    assert!(validate_email("abc").is_err());
}

#[test]
fn test_validate_email_rejects_empty_domain() {
    assert!(validate_email("abc@").is_err());
}

#[test]
fn test_validate_email_rejects_domain_without_tld() {
    assert!(validate_email("abc@def").is_err());
}

#[test]
fn test_validate_email_rejects_double_at() {
    assert!(validate_email("a@b@c.com").is_err());
}

#[test]
fn test_validate_email_rejects_empty_domain_labels() {
    assert!(validate_email("a@.com").is_err());
    assert!(validate_email("a@b.").is_err());
}

#[test]
fn test_validate_email_accepts_structural_address() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("j@x.com").is_ok());
    assert!(validate_email("first.last@mail.example.co").is_ok());
}

// ============================================================================
// Booking Field Validation Tests
// ============================================================================

#[test]
fn test_validate_field_requires_pest_and_property_selections() {
    let form = BookingForm::new();

    assert!(matches!(
        validate_field(Field::PestType, &form, test_today()),
        Err(DomainError::FieldRequired {
            field: Field::PestType
        })
    ));
    assert!(matches!(
        validate_field(Field::PropertyType, &form, test_today()),
        Err(DomainError::FieldRequired {
            field: Field::PropertyType
        })
    ));
}

#[test]
fn test_validate_field_accepts_set_selections() {
    let mut form = BookingForm::new();
    form.pest_type = Some(PestType::Ants);
    form.property_type = Some(PropertyType::Residential);

    assert!(validate_field(Field::PestType, &form, test_today()).is_ok());
    assert!(validate_field(Field::PropertyType, &form, test_today()).is_ok());
}

#[test]
fn test_validate_field_enforces_free_text_ceiling() {
    let mut form = BookingForm::new();
    form.pest_info = "x".repeat(FREE_TEXT_LIMIT + 1);

    let result = validate_field(Field::PestInfo, &form, test_today());

    assert!(matches!(
        result,
        Err(DomainError::FieldTooLong {
            field: Field::PestInfo,
            limit: FREE_TEXT_LIMIT
        })
    ));
}

#[test]
fn test_validate_field_gate_code_is_optional_but_length_limited() {
    let mut form = BookingForm::new();

    assert!(validate_field(Field::GateCode, &form, test_today()).is_ok());

    form.gate_code = "x".repeat(FREE_TEXT_LIMIT + 1);
    assert!(validate_field(Field::GateCode, &form, test_today()).is_err());
}

#[test]
fn test_validate_field_rejects_whitespace_only_required_text() {
    let mut form = BookingForm::new();
    form.address = String::from("   ");

    assert!(matches!(
        validate_field(Field::Address, &form, test_today()),
        Err(DomainError::FieldRequired {
            field: Field::Address
        })
    ));
}

#[test]
fn test_validate_field_phone_only_requires_presence() {
    let mut form = BookingForm::new();
    form.phone = String::from("not-even-a-number");

    assert!(validate_field(Field::Phone, &form, test_today()).is_ok());
}

#[test]
fn test_validate_field_rejects_past_service_date() {
    let mut form = BookingForm::new();
    form.selected_date = Some(date!(2026 - 03 - 09));

    let result = validate_field(Field::SelectedDate, &form, test_today());

    assert!(matches!(result, Err(DomainError::DateInPast { .. })));
}

#[test]
fn test_validate_field_accepts_today_and_future_dates() {
    let mut form = BookingForm::new();

    form.selected_date = Some(test_today());
    assert!(validate_field(Field::SelectedDate, &form, test_today()).is_ok());

    form.selected_date = Some(date!(2026 - 04 - 01));
    assert!(validate_field(Field::SelectedDate, &form, test_today()).is_ok());
}

#[test]
fn test_validate_field_requires_time_slot() {
    let mut form = BookingForm::new();

    assert!(validate_field(Field::SelectedTime, &form, test_today()).is_err());

    form.selected_time = Some(TimeSlot::new(11).unwrap());
    assert!(validate_field(Field::SelectedTime, &form, test_today()).is_ok());
}

// ============================================================================
// Contact Field Validation Tests
// ============================================================================

#[test]
fn test_validate_contact_fields_rejects_missing_name() {
    let result = validate_contact_fields("", "a@b.com", "hi");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::MissingContactField { field: "name" }
    ));
}

#[test]
fn test_validate_contact_fields_rejects_bad_email() {
    let result = validate_contact_fields("A", "bad", "hi");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidEmail { .. }
    ));
}

#[test]
fn test_validate_contact_fields_rejects_missing_message() {
    let result = validate_contact_fields("A", "a@b.com", "");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::MissingContactField { field: "message" }
    ));
}

#[test]
fn test_validate_contact_fields_accepts_required_trio() {
    assert!(validate_contact_fields("A", "a@b.com", "hi").is_ok());
}
