// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handling for the PestAway booking platform.
//!
//! This crate owns the wire contracts of the two endpoints, the API
//! error taxonomy, and the operations behind them: booking validation
//! and notification dispatch, and the contact pipeline
//! (persist-then-best-effort-notify). The HTTP server wraps these
//! functions; they never deal in status codes themselves.

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
mod request_response;

#[cfg(test)]
mod tests;

pub use booking::{dispatch_booking, validate_booking};
pub use contact::{submit_contact, validate_contact};
pub use error::{ApiError, translate_domain_error};
pub use request_response::{BookingRequest, BookingResponse, ContactRequest, ContactResponse};
