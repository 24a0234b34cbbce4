// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Notifier;
use crate::config::SmtpConfig;
use crate::error::NotifyError;
use crate::summary::BookingSummary;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use pestaway_domain::ContactSubmission;
use tracing::debug;

/// SMTP notifier over lettre.
///
/// Builds a fresh relay transport per send to avoid connection pooling
/// issues, and runs the blocking send off the async runtime.
#[derive(Clone)]
pub struct SmtpNotifier {
    /// The resolved SMTP account configuration.
    config: SmtpConfig,
    /// SMTP credentials derived from the configuration.
    credentials: Credentials,
}

impl SmtpNotifier {
    /// Creates a notifier from resolved configuration.
    #[must_use]
    pub fn new(config: SmtpConfig) -> Self {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        Self {
            config,
            credentials,
        }
    }

    /// Builds the relay transport for one send.
    fn build_transport(&self) -> Result<SmtpTransport, NotifyError> {
        Ok(SmtpTransport::relay(&self.config.server)
            .map_err(|e| NotifyError::Relay(e.to_string()))?
            .port(self.config.port)
            .credentials(self.credentials.clone())
            .build())
    }

    /// Builds the "From" mailbox header.
    fn from_header(&self) -> String {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
    }

    /// Assembles and sends one message.
    async fn send(
        &self,
        to: &str,
        subject: &str,
        content_type: ContentType,
        body: String,
    ) -> Result<(), NotifyError> {
        let email: Message = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| NotifyError::Address(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| NotifyError::Address(format!("Invalid to address: {e}")))?)
            .subject(subject)
            .header(content_type)
            .body(body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let mailer: SmtpTransport = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map(|_| ())
                .map_err(|e| NotifyError::Send(e.to_string()))
        })
        .await
        .map_err(|e| NotifyError::Task(e.to_string()))??;

        debug!(subject, "Notification email sent");
        Ok(())
    }
}

impl Notifier for SmtpNotifier {
    async fn send_booking_confirmation(
        &self,
        booking: &BookingSummary,
    ) -> Result<(), NotifyError> {
        self.send(
            &booking.email,
            "Your PestAway service request",
            ContentType::TEXT_HTML,
            booking_confirmation_html(booking),
        )
        .await
    }

    async fn send_booking_alert(&self, booking: &BookingSummary) -> Result<(), NotifyError> {
        self.send(
            &self.config.admin_email,
            &format!("New service request: {}", booking.full_name()),
            ContentType::TEXT_PLAIN,
            booking_alert_text(booking),
        )
        .await
    }

    async fn send_contact_confirmation(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), NotifyError> {
        self.send(
            &submission.email,
            "We received your message",
            ContentType::TEXT_HTML,
            contact_confirmation_html(submission),
        )
        .await
    }

    async fn send_contact_alert(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        self.send(
            &self.config.admin_email,
            &format!("New inquiry from {}", submission.name),
            ContentType::TEXT_PLAIN,
            contact_alert_text(submission),
        )
        .await
    }
}

/// Branded confirmation body for an accepted booking request.
pub(crate) fn booking_confirmation_html(booking: &BookingSummary) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Your PestAway service request</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #15803d;">Thanks, {first_name} - we're on it!</h2>
        <p>We received your service request and will reach out shortly to confirm your appointment.</p>
        <div style="background-color: #f0fdf4; border-left: 4px solid #15803d; padding: 15px; margin: 20px 0;">
            <p style="margin: 0;"><strong>Pest:</strong> {pest_type}</p>
            <p style="margin: 0;"><strong>Property:</strong> {property_type}</p>
            <p style="margin: 0;"><strong>Address:</strong> {address}</p>
            <p style="margin: 0;"><strong>Requested time:</strong> {appointment}</p>
        </div>
        <p style="color: #666; font-size: 14px;">
            Need to make a change? Just reply to this email or give us a call.
        </p>
    </div>
</body>
</html>
        "#,
        first_name = booking.first_name,
        pest_type = booking.pest_type,
        property_type = booking.property_type,
        address = booking.address,
        appointment = booking.appointment(),
    )
}

/// Plain-text summary for the administrative recipient.
pub(crate) fn booking_alert_text(booking: &BookingSummary) -> String {
    format!(
        "New service request\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Pest: {pest_type}\n\
         Property: {property_type}\n\
         Business info: {business_info}\n\
         Details: {pest_info}\n\
         Address: {address}\n\
         Gate code: {gate_code}\n\
         Requested: {appointment}\n",
        name = booking.full_name(),
        email = booking.email,
        phone = booking.phone,
        pest_type = booking.pest_type,
        property_type = booking.property_type,
        business_info = booking.business_info,
        pest_info = booking.pest_info,
        address = booking.address,
        gate_code = booking.gate_code,
        appointment = booking.appointment(),
    )
}

/// Branded confirmation body for a contact inquiry.
pub(crate) fn contact_confirmation_html(submission: &ContactSubmission) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>We received your message</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #15803d;">Thanks for reaching out, {name}!</h2>
        <p>Your message is in our inbox and a member of our team will get back to you within one business day.</p>
        <p style="color: #666; font-size: 14px;">
            If your pest problem is urgent, call us directly for same-day help.
        </p>
    </div>
</body>
</html>
        "#,
        name = submission.name,
    )
}

/// Plain-text inquiry alert for the administrative recipient.
pub(crate) fn contact_alert_text(submission: &ContactSubmission) -> String {
    format!(
        "New contact inquiry\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Subject: {subject}\n\
         \n\
         {message}\n",
        name = submission.name,
        email = submission.email,
        phone = submission.phone.as_deref().unwrap_or("-"),
        subject = submission.subject.as_deref().unwrap_or("-"),
        message = submission.message,
    )
}
