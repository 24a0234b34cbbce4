// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of pest a customer is reporting.
///
/// Pest types are fixed domain constants presented as the first wizard
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PestType {
    /// Ant infestation.
    Ants,
    /// Bed bug infestation.
    #[serde(rename = "Bed Bugs")]
    BedBugs,
    /// Cockroach infestation.
    Cockroaches,
    /// Rodent (mice/rat) activity.
    Rodents,
    /// The customer has not identified the pest.
    #[serde(rename = "Not Sure")]
    NotSure,
    /// Any other pest.
    Other,
}

impl PestType {
    /// Parses a pest type from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known pest type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Ants" => Ok(Self::Ants),
            "Bed Bugs" => Ok(Self::BedBugs),
            "Cockroaches" => Ok(Self::Cockroaches),
            "Rodents" => Ok(Self::Rodents),
            "Not Sure" => Ok(Self::NotSure),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidPestType(format!(
                "Unknown pest type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this pest type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ants => "Ants",
            Self::BedBugs => "Bed Bugs",
            Self::Cockroaches => "Cockroaches",
            Self::Rodents => "Rodents",
            Self::NotSure => "Not Sure",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for PestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of property a service visit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// A private residence.
    Residential,
    /// A business property.
    Commercial,
}

impl PropertyType {
    /// Parses a property type from its display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known property type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Residential" => Ok(Self::Residential),
            "Commercial" => Ok(Self::Commercial),
            _ => Err(DomainError::InvalidPropertyType(format!(
                "Unknown property type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this property type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An hourly appointment slot.
///
/// Slots run from 10:00 AM through 9:00 PM inclusive. The list is fixed
/// and not filtered by technician availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    /// The slot's starting hour in 24-hour time (10-21).
    hour: u8,
}

impl TimeSlot {
    /// The first bookable hour (10:00 AM).
    pub const FIRST_HOUR: u8 = 10;
    /// The last bookable hour (9:00 PM).
    pub const LAST_HOUR: u8 = 21;

    /// Creates a new `TimeSlot`.
    ///
    /// # Arguments
    ///
    /// * `hour` - The slot's starting hour in 24-hour time (must be
    ///   between 10 and 21 inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if the hour falls outside the bookable window.
    pub const fn new(hour: u8) -> Result<Self, DomainError> {
        if hour >= Self::FIRST_HOUR && hour <= Self::LAST_HOUR {
            Ok(Self { hour })
        } else {
            Err(DomainError::InvalidTimeSlot(
                "Slot hour must be between 10:00 AM and 9:00 PM",
            ))
        }
    }

    /// Returns the slot's starting hour in 24-hour time.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns every bookable slot in chronological order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR)
            .map(|hour| Self { hour })
            .collect()
    }

    /// Returns the display string for this slot (e.g., "10:00 AM").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self.hour {
            10 => "10:00 AM",
            11 => "11:00 AM",
            12 => "12:00 PM",
            13 => "1:00 PM",
            14 => "2:00 PM",
            15 => "3:00 PM",
            16 => "4:00 PM",
            17 => "5:00 PM",
            18 => "6:00 PM",
            19 => "7:00 PM",
            20 => "8:00 PM",
            _ => "9:00 PM",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10:00 AM" => Self::new(10),
            "11:00 AM" => Self::new(11),
            "12:00 PM" => Self::new(12),
            "1:00 PM" => Self::new(13),
            "2:00 PM" => Self::new(14),
            "3:00 PM" => Self::new(15),
            "4:00 PM" => Self::new(16),
            "5:00 PM" => Self::new(17),
            "6:00 PM" => Self::new(18),
            "7:00 PM" => Self::new(19),
            "8:00 PM" => Self::new(20),
            "9:00 PM" => Self::new(21),
            _ => Err(DomainError::UnknownTimeSlot(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies a single booking-form field.
///
/// Used as the key of the wizard's field-error map and in validation
/// error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The reported pest category (step 1).
    PestType,
    /// The property kind (step 1).
    PropertyType,
    /// Business context free text (step 2).
    BusinessInfo,
    /// Pest problem free text (step 2).
    PestInfo,
    /// The service address (step 3).
    Address,
    /// Optional gate/access notes (step 3).
    GateCode,
    /// The customer's first name (step 4).
    FirstName,
    /// The customer's last name (step 4).
    LastName,
    /// The customer's email address (step 4).
    Email,
    /// The customer's phone number (step 4).
    Phone,
    /// The requested service date (step 5).
    SelectedDate,
    /// The requested time slot (step 5).
    SelectedTime,
}

impl Field {
    /// Returns the snake_case identifier for this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PestType => "pest_type",
            Self::PropertyType => "property_type",
            Self::BusinessInfo => "business_info",
            Self::PestInfo => "pest_info",
            Self::Address => "address",
            Self::GateCode => "gate_code",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::SelectedDate => "selected_date",
            Self::SelectedTime => "selected_time",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
