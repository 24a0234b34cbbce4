// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound email for the PestAway booking platform.
//!
//! Two notification pairs exist: a booking produces a branded
//! confirmation to the customer plus a summary alert to the
//! administrative address, and a contact submission produces the same
//! pair for the inquiry. Sends go out over SMTP via lettre. When the
//! SMTP credentials are absent from the environment the platform runs
//! without a notifier: the contact pipeline degrades to persist-only and
//! the booking endpoint reports itself unavailable.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod smtp;
mod summary;

#[cfg(test)]
mod tests;

pub use config::SmtpConfig;
pub use error::NotifyError;
pub use smtp::SmtpNotifier;
pub use summary::BookingSummary;

use pestaway_domain::ContactSubmission;

/// Dispatches notification email for bookings and contact submissions.
///
/// Implementations send exactly one message per call. Callers own the
/// best-effort policy: the contact pipeline logs and swallows failures,
/// the booking dispatch propagates them.
pub trait Notifier {
    /// Sends the branded booking confirmation to the customer.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the message cannot be built or sent.
    fn send_booking_confirmation(
        &self,
        booking: &BookingSummary,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;

    /// Sends the booking summary alert to the administrative address.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the message cannot be built or sent.
    fn send_booking_alert(
        &self,
        booking: &BookingSummary,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;

    /// Sends the branded inquiry confirmation to the submitter.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the message cannot be built or sent.
    fn send_contact_confirmation(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;

    /// Sends the inquiry alert to the administrative address.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the message cannot be built or sent.
    fn send_contact_alert(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
