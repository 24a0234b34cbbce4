// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod booking;
mod contact;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::{BookingForm, FREE_TEXT_LIMIT};
pub use contact::ContactSubmission;
pub use error::DomainError;
pub use types::{Field, PestType, PropertyType, TimeSlot};
pub use validation::{
    validate_booking_fields, validate_contact_fields, validate_email, validate_field,
};
