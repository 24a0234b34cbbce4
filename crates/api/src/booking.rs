// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking endpoint operations: request validation and notification
//! dispatch.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{BookingRequest, BookingResponse};
use pestaway_domain::{
    BookingForm, DomainError, PestType, PropertyType, TimeSlot, validate_booking_fields,
};
use pestaway_notify::{BookingSummary, Notifier};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;
use tracing::{error, info, warn};

/// Parses an optional `YYYY-MM-DD` date string.
fn parse_selected_date(raw: Option<&str>) -> Result<Option<Date>, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    match raw {
        None => Ok(None),
        Some(s) => Date::parse(s, format)
            .map(Some)
            .map_err(|e| DomainError::DateParseError {
                date_string: s.to_string(),
                error: e.to_string(),
            }),
    }
}

/// Validates a booking request against the domain rules, yielding the
/// typed form.
///
/// Every field is checked: enum and slot parses, presence of required
/// text, free-text ceilings, and the structural email shape. The date,
/// when present, must parse as an ISO calendar date; the today-or-later
/// rule stays with the wizard, which knows the client's calendar.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the offending wire field.
pub fn validate_booking(request: &BookingRequest) -> Result<BookingForm, ApiError> {
    let pest_type: PestType =
        PestType::parse(&request.pest_type).map_err(translate_domain_error)?;
    let property_type: PropertyType =
        PropertyType::parse(&request.property_type).map_err(translate_domain_error)?;
    let selected_date: Option<Date> =
        parse_selected_date(request.selected_date.as_deref()).map_err(translate_domain_error)?;
    let selected_time: TimeSlot =
        TimeSlot::from_str(&request.selected_time).map_err(translate_domain_error)?;

    let form = BookingForm {
        pest_type: Some(pest_type),
        property_type: Some(property_type),
        business_info: request.business_info.clone(),
        pest_info: request.pest_info.clone(),
        address: request.address.clone(),
        gate_code: request.gate_code.clone(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        selected_date,
        selected_time: Some(selected_time),
    };

    validate_booking_fields(&form).map_err(translate_domain_error)?;

    Ok(form)
}

/// Builds the notification view of a validated booking form.
fn booking_summary(form: &BookingForm) -> BookingSummary {
    BookingSummary {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
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
        selected_date: form.selected_date.map(|date| date.to_string()),
        selected_time: form
            .selected_time
            .map_or_else(String::new, |slot| slot.as_str().to_string()),
    }
}

/// Dispatches the two booking notification emails.
///
/// The booking endpoint's entire effect is email, so a configured
/// notifier is required. Both sends - the branded customer confirmation
/// and the administrative summary - are always attempted regardless of
/// each other's outcome; if either fails the dispatch fails so the
/// wizard can offer a retry.
///
/// # Errors
///
/// * `ApiError::NotificationUnavailable` when no notifier is configured
/// * `ApiError::Internal` when a send fails
pub async fn dispatch_booking<N: Notifier + Sync>(
    notifier: Option<&N>,
    form: &BookingForm,
) -> Result<BookingResponse, ApiError> {
    let Some(notifier) = notifier else {
        warn!("Booking request received without configured email credentials");
        return Err(ApiError::NotificationUnavailable);
    };

    let summary: BookingSummary = booking_summary(form);

    let confirmation = notifier.send_booking_confirmation(&summary).await;
    let alert = notifier.send_booking_alert(&summary).await;

    if let Err(e) = &confirmation {
        error!(error = %e, "Booking confirmation email failed");
    }
    if let Err(e) = &alert {
        error!(error = %e, "Booking alert email failed");
    }
    if confirmation.is_err() || alert.is_err() {
        return Err(ApiError::Internal {
            message: String::from("Failed to send booking notifications"),
        });
    }

    info!(email = %summary.email, "Booking request dispatched");

    Ok(BookingResponse {
        success: true,
        message: String::from("Service request received! We'll be in touch shortly."),
    })
}
