// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::warn;

/// SMTP account configuration for outbound notification email.
///
/// Does not implement `Debug`: the password must never reach logs or
/// error output.
#[derive(Clone)]
pub struct SmtpConfig {
    /// SMTP server address (e.g., "smtp.example.com").
    pub server: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP authentication username.
    pub username: String,
    /// SMTP authentication password.
    pub password: String,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
    /// Administrative recipient for alert email.
    pub admin_email: String,
}

impl SmtpConfig {
    /// Default SMTP submission port.
    pub const DEFAULT_PORT: u16 = 587;
    /// Default sender display name.
    pub const DEFAULT_FROM_NAME: &'static str = "PestAway Pest Control";

    /// Resolves configuration through a variable lookup.
    ///
    /// Returns `None` when any required variable (`SMTP_SERVER`,
    /// `SMTP_USERNAME`, `SMTP_PASSWORD`, `NOTIFY_ADMIN_EMAIL`) is absent:
    /// the platform then runs without a notifier rather than failing
    /// startup. `SMTP_PORT`, `NOTIFY_FROM`, and `NOTIFY_FROM_NAME` are
    /// optional with defaults (587, the username, and the business name).
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a named variable, if set
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let server: String = lookup("SMTP_SERVER")?;
        let username: String = lookup("SMTP_USERNAME")?;
        let password: String = lookup("SMTP_PASSWORD")?;
        let admin_email: String = lookup("NOTIFY_ADMIN_EMAIL")?;

        let port: u16 = lookup("SMTP_PORT").map_or(Self::DEFAULT_PORT, |raw| {
            raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Ignoring unparseable SMTP_PORT");
                Self::DEFAULT_PORT
            })
        });
        let from_email: String = lookup("NOTIFY_FROM").unwrap_or_else(|| username.clone());
        let from_name: String =
            lookup("NOTIFY_FROM_NAME").unwrap_or_else(|| String::from(Self::DEFAULT_FROM_NAME));

        Some(Self {
            server,
            port,
            username,
            password,
            from_email,
            from_name,
            admin_email,
        })
    }

    /// Resolves configuration from the process environment.
    ///
    /// See [`Self::from_lookup`] for the variable set and degradation
    /// behavior.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}
