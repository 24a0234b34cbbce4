// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::WizardError;
use crate::payload::BookingPayload;
use crate::transport::SubmissionTransport;
use pestaway_domain::{
    BookingForm, Field, PestType, PropertyType, TimeSlot, validate_field,
};
use std::collections::HashMap;
use time::Date;
use tracing::debug;

/// One stage of the booking wizard.
///
/// Stages 1 through 6 collect and review data; `Confirmed` (7) is the
/// terminal state reached only through a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Step 1: pest category and property kind.
    PestSelection,
    /// Step 2: business context and pest description.
    Details,
    /// Step 3: service address and access notes.
    Location,
    /// Step 4: customer contact details.
    Contact,
    /// Step 5: service date and time slot.
    Schedule,
    /// Step 6: review of all entered data; advanced only via `submit`.
    Review,
    /// Step 7: terminal confirmation state.
    Confirmed,
}

impl Step {
    /// Returns this step's 1-based position in the wizard.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::PestSelection => 1,
            Self::Details => 2,
            Self::Location => 3,
            Self::Contact => 4,
            Self::Schedule => 5,
            Self::Review => 6,
            Self::Confirmed => 7,
        }
    }

    /// Returns the step one position back, if any.
    ///
    /// `Confirmed` has no predecessor: the terminal state cannot be
    /// navigated out of.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::PestSelection | Self::Confirmed => None,
            Self::Details => Some(Self::PestSelection),
            Self::Location => Some(Self::Details),
            Self::Contact => Some(Self::Location),
            Self::Schedule => Some(Self::Contact),
            Self::Review => Some(Self::Schedule),
        }
    }

    /// Returns whether this is the terminal confirmation state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The result of a successful forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTransition {
    /// The step the wizard is now on.
    pub step: Step,
    /// Signal for the presentation layer to scroll the content viewport
    /// back to its origin.
    pub reset_viewport: bool,
}

/// Checks whether the form satisfies a step's completion gate.
///
/// This predicate is pure and re-evaluates the live form on every call:
///
/// * step 1: pest type and property type both set
/// * step 2: business info and pest info both non-empty
/// * step 3: address non-empty (gate code optional)
/// * step 4: all four contact fields non-empty and the email structurally
///   valid
/// * step 5: service date and time slot both set
/// * step 6: always passes (the review step advances via submission)
#[must_use]
pub fn can_advance(form: &BookingForm, step: Step) -> bool {
    match step {
        Step::PestSelection => form.pest_type.is_some() && form.property_type.is_some(),
        Step::Details => {
            !form.business_info.trim().is_empty() && !form.pest_info.trim().is_empty()
        }
        Step::Location => !form.address.trim().is_empty(),
        Step::Contact => {
            !form.first_name.trim().is_empty()
                && !form.last_name.trim().is_empty()
                && !form.phone.trim().is_empty()
                && pestaway_domain::validate_email(&form.email).is_ok()
        }
        Step::Schedule => form.selected_date.is_some() && form.selected_time.is_some(),
        Step::Review => true,
        Step::Confirmed => false,
    }
}

/// The booking wizard's complete state for one booking attempt.
///
/// A wizard owns its form exclusively: it is created fresh when the
/// booking panel opens and destroyed on close or reset. Local validation
/// failures block progression but never discard entered data, and
/// navigation alone never mutates the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The current step.
    step: Step,
    /// All user input collected so far.
    form: BookingForm,
    /// Transient per-field validation messages, populated on blur and
    /// cleared when the field's value changes.
    field_errors: HashMap<Field, String>,
    /// Whether a submission request is currently awaiting its response.
    submission_in_flight: bool,
}

impl WizardState {
    /// Creates a wizard at step 1 with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::PestSelection,
            form: BookingForm::new(),
            field_errors: HashMap::new(),
            submission_in_flight: false,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Returns the form as entered so far.
    #[must_use]
    pub const fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Returns the validation message currently recorded for a field.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Returns whether a submission request is awaiting its response.
    #[must_use]
    pub const fn submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    /// Sets the pest category.
    pub fn set_pest_type(&mut self, pest_type: PestType) {
        self.form.pest_type = Some(pest_type);
        self.field_errors.remove(&Field::PestType);
    }

    /// Sets the property kind.
    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.form.property_type = Some(property_type);
        self.field_errors.remove(&Field::PropertyType);
    }

    /// Sets the business context text.
    pub fn set_business_info(&mut self, value: impl Into<String>) {
        self.form.business_info = value.into();
        self.field_errors.remove(&Field::BusinessInfo);
    }

    /// Sets the pest description text.
    pub fn set_pest_info(&mut self, value: impl Into<String>) {
        self.form.pest_info = value.into();
        self.field_errors.remove(&Field::PestInfo);
    }

    /// Sets the service address.
    pub fn set_address(&mut self, value: impl Into<String>) {
        self.form.address = value.into();
        self.field_errors.remove(&Field::Address);
    }

    /// Sets the gate code / access notes.
    pub fn set_gate_code(&mut self, value: impl Into<String>) {
        self.form.gate_code = value.into();
        self.field_errors.remove(&Field::GateCode);
    }

    /// Sets the customer's first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
        self.field_errors.remove(&Field::FirstName);
    }

    /// Sets the customer's last name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
        self.field_errors.remove(&Field::LastName);
    }

    /// Sets the customer's email address.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.field_errors.remove(&Field::Email);
    }

    /// Sets the customer's phone number.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
        self.field_errors.remove(&Field::Phone);
    }

    /// Sets (or clears) the requested service date.
    ///
    /// Changing the date always resets the selected time slot: slot
    /// choice is date-relative, so a previously chosen slot cannot
    /// survive a date change.
    pub fn set_selected_date(&mut self, date: Option<Date>) {
        self.form.selected_date = date;
        self.form.selected_time = None;
        self.field_errors.remove(&Field::SelectedDate);
    }

    /// Sets the requested time slot.
    pub fn set_selected_time(&mut self, slot: TimeSlot) {
        self.form.selected_time = Some(slot);
        self.field_errors.remove(&Field::SelectedTime);
    }

    /// Records a field losing focus: validates it and updates the error
    /// map accordingly.
    ///
    /// Returns the validation message now recorded for the field, if any.
    pub fn record_blur(&mut self, field: Field, today: Date) -> Option<&str> {
        match validate_field(field, &self.form, today) {
            Ok(()) => {
                self.field_errors.remove(&field);
                None
            }
            Err(err) => {
                self.field_errors.insert(field, err.to_string());
                self.field_errors.get(&field).map(String::as_str)
            }
        }
    }

    /// Moves one step forward if the current step's gate passes.
    ///
    /// A blocked advance leaves the step unchanged. The review step does
    /// not advance through this method: the 6→7 transition is gated by a
    /// successful submission, not a local check. The terminal state never
    /// advances.
    ///
    /// # Errors
    ///
    /// * `WizardError::AdvanceBlocked` if the step's gate does not pass
    /// * `WizardError::AdvanceRequiresSubmission` at the review step
    /// * `WizardError::AlreadyConfirmed` at the terminal step
    pub fn advance(&mut self) -> Result<StepTransition, WizardError> {
        let next: Step = match self.step {
            Step::PestSelection => Step::Details,
            Step::Details => Step::Location,
            Step::Location => Step::Contact,
            Step::Contact => Step::Schedule,
            Step::Schedule => Step::Review,
            Step::Review => return Err(WizardError::AdvanceRequiresSubmission),
            Step::Confirmed => return Err(WizardError::AlreadyConfirmed),
        };

        if !can_advance(&self.form, self.step) {
            return Err(WizardError::AdvanceBlocked { step: self.step });
        }

        debug!(from = %self.step, to = %next, "Wizard advanced");
        self.step = next;

        Ok(StepTransition {
            step: next,
            reset_viewport: true,
        })
    }

    /// Moves one step backward without validation.
    ///
    /// Entered data is retained: the form is append-only across
    /// navigation. No-op at step 1 and at the terminal state. Returns
    /// the step the wizard is on after the call.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            debug!(from = %self.step, to = %previous, "Wizard retreated");
            self.step = previous;
        }
        self.step
    }

    /// Submits the completed booking through the given transport.
    ///
    /// Only callable at the review step and only while no submission is
    /// in flight. Exactly one transport call is issued per invocation; a
    /// failure leaves the wizard at the review step with the form intact
    /// so the user may retry.
    ///
    /// # Errors
    ///
    /// * `WizardError::SubmissionNotAllowed` if not at the review step
    /// * `WizardError::SubmissionInFlight` if a submission is pending
    /// * `WizardError::SubmissionFailed` carrying the transport's reason
    pub async fn submit<T: SubmissionTransport>(
        &mut self,
        transport: &T,
    ) -> Result<Step, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::SubmissionNotAllowed { step: self.step });
        }
        if self.submission_in_flight {
            return Err(WizardError::SubmissionInFlight);
        }

        self.submission_in_flight = true;
        let payload: BookingPayload = BookingPayload::from_form(&self.form);

        let outcome = transport.submit(&payload).await;
        self.submission_in_flight = false;

        match outcome {
            Ok(()) => {
                debug!("Booking submission accepted");
                self.step = Step::Confirmed;
                Ok(self.step)
            }
            Err(err) => Err(WizardError::SubmissionFailed {
                message: err.to_string(),
            }),
        }
    }

    /// Returns the entire state to its initial values.
    ///
    /// Used when the user explicitly closes or cancels the wizard,
    /// regardless of the current step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
