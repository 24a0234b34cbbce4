// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::{BookingForm, FREE_TEXT_LIMIT};
use crate::error::DomainError;
use crate::types::Field;
use time::Date;

/// Validates that an email address matches the structural
/// `local@domain.tld` shape.
///
/// This is a structural check only: exactly one `@`, a non-empty local
/// part, and a domain containing at least one `.` with non-empty labels
/// on both sides. It makes no attempt at full RFC 5322 conformance.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` describing the first structural
/// failure found.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail {
            reason: "missing '@' separator",
        });
    };
    if local.is_empty() {
        return Err(DomainError::InvalidEmail {
            reason: "missing local part before '@'",
        });
    }
    if domain.contains('@') {
        return Err(DomainError::InvalidEmail {
            reason: "more than one '@' separator",
        });
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(DomainError::InvalidEmail {
            reason: "domain is missing a '.' separator",
        });
    };
    if host.is_empty() || tld.is_empty() {
        return Err(DomainError::InvalidEmail {
            reason: "domain labels must be non-empty",
        });
    }
    Ok(())
}

/// Validates a free-text field against its length ceiling.
fn validate_free_text_limit(field: Field, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > FREE_TEXT_LIMIT {
        return Err(DomainError::FieldTooLong {
            field,
            limit: FREE_TEXT_LIMIT,
        });
    }
    Ok(())
}

/// Validates that a required text field is non-empty.
fn validate_required_text(field: Field, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::FieldRequired { field });
    }
    Ok(())
}

/// Validates a single booking-form field against its rule.
///
/// This function is pure: it inspects the form and never mutates it.
/// The rules are the ones the wizard's step gates re-check on `advance`:
/// presence for required fields, the structural email check, length
/// ceilings for the free-text fields, and today-or-later for the service
/// date. `gate_code` is optional and only fails on length.
///
/// # Arguments
///
/// * `field` - The field to validate
/// * `form` - The form holding the field's current value
/// * `today` - The current calendar date, used for the service-date rule
///
/// # Errors
///
/// Returns a `DomainError` describing the rule violation, if any.
pub fn validate_field(field: Field, form: &BookingForm, today: Date) -> Result<(), DomainError> {
    match field {
        Field::PestType => {
            if form.pest_type.is_none() {
                return Err(DomainError::FieldRequired { field });
            }
            Ok(())
        }
        Field::PropertyType => {
            if form.property_type.is_none() {
                return Err(DomainError::FieldRequired { field });
            }
            Ok(())
        }
        Field::BusinessInfo => {
            validate_required_text(field, &form.business_info)?;
            validate_free_text_limit(field, &form.business_info)
        }
        Field::PestInfo => {
            validate_required_text(field, &form.pest_info)?;
            validate_free_text_limit(field, &form.pest_info)
        }
        Field::Address => validate_required_text(field, &form.address),
        Field::GateCode => validate_free_text_limit(field, &form.gate_code),
        Field::FirstName => validate_required_text(field, &form.first_name),
        Field::LastName => validate_required_text(field, &form.last_name),
        Field::Email => {
            validate_required_text(field, &form.email)?;
            validate_email(&form.email)
        }
        Field::Phone => validate_required_text(field, &form.phone),
        Field::SelectedDate => match form.selected_date {
            None => Err(DomainError::FieldRequired { field }),
            Some(date) if date < today => Err(DomainError::DateInPast { date }),
            Some(_) => Ok(()),
        },
        Field::SelectedTime => {
            if form.selected_time.is_none() {
                return Err(DomainError::FieldRequired { field });
            }
            Ok(())
        }
    }
}

/// Validates a booking form's non-date field constraints.
///
/// This is the aggregate check the booking endpoint runs over a parsed
/// request: both selections set, required text present, free-text
/// ceilings respected, and the email structurally valid. Date rules are
/// not applied here; the today-or-later rule belongs to the wizard,
/// which knows the client's calendar.
///
/// # Errors
///
/// Returns a `DomainError` for the first field that violates its rule.
pub fn validate_booking_fields(form: &BookingForm) -> Result<(), DomainError> {
    if form.pest_type.is_none() {
        return Err(DomainError::FieldRequired {
            field: Field::PestType,
        });
    }
    if form.property_type.is_none() {
        return Err(DomainError::FieldRequired {
            field: Field::PropertyType,
        });
    }
    validate_required_text(Field::BusinessInfo, &form.business_info)?;
    validate_free_text_limit(Field::BusinessInfo, &form.business_info)?;
    validate_required_text(Field::PestInfo, &form.pest_info)?;
    validate_free_text_limit(Field::PestInfo, &form.pest_info)?;
    validate_required_text(Field::Address, &form.address)?;
    validate_free_text_limit(Field::GateCode, &form.gate_code)?;
    validate_required_text(Field::FirstName, &form.first_name)?;
    validate_required_text(Field::LastName, &form.last_name)?;
    validate_required_text(Field::Email, &form.email)?;
    validate_email(&form.email)?;
    validate_required_text(Field::Phone, &form.phone)
}

/// Validates the contact pipeline's required field trio.
///
/// The contact form requires a non-empty name, a structurally valid
/// email, and a non-empty message; all other fields are optional.
///
/// # Errors
///
/// Returns a `DomainError` for the first missing or malformed field.
pub fn validate_contact_fields(name: &str, email: &str, message: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::MissingContactField { field: "name" });
    }
    if email.trim().is_empty() {
        return Err(DomainError::MissingContactField { field: "email" });
    }
    validate_email(email)?;
    if message.trim().is_empty() {
        return Err(DomainError::MissingContactField { field: "message" });
    }
    Ok(())
}
