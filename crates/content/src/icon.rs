// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ContentError;
use std::str::FromStr;
use tracing::warn;

/// The closed set of icon identifiers the site can render.
///
/// CMS documents reference icons by tag; dispatch happens over this
/// enumeration rather than arbitrary strings, so an unknown tag is
/// either rejected (`parse`) or resolved to the default (`resolve_tag`)
/// instead of silently rendering nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Generic pest/bug mark.
    Bug,
    /// Protection shield.
    Shield,
    /// Residential house.
    House,
    /// Commercial building.
    Building,
    /// Telephone handset.
    Phone,
    /// Envelope.
    Mail,
    /// Map location pin.
    MapPin,
    /// Calendar page.
    Calendar,
    /// Review star.
    Star,
    /// Eco leaf.
    Leaf,
}

impl Icon {
    /// The icon substituted for unknown or missing tags.
    pub const DEFAULT: Self = Self::Bug;

    /// Returns this icon's tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Shield => "shield",
            Self::House => "house",
            Self::Building => "building",
            Self::Phone => "phone",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Calendar => "calendar",
            Self::Star => "star",
            Self::Leaf => "leaf",
        }
    }

    /// Resolves an optional CMS icon tag, substituting the default for
    /// unknown or missing tags.
    #[must_use]
    pub fn resolve_tag(tag: Option<&str>) -> Self {
        match tag {
            None => Self::DEFAULT,
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                warn!(tag, "Unknown icon tag; substituting the default icon");
                Self::DEFAULT
            }),
        }
    }
}

impl FromStr for Icon {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(Self::Bug),
            "shield" => Ok(Self::Shield),
            "house" => Ok(Self::House),
            "building" => Ok(Self::Building),
            "phone" => Ok(Self::Phone),
            "mail" => Ok(Self::Mail),
            "map-pin" => Ok(Self::MapPin),
            "calendar" => Ok(Self::Calendar),
            "star" => Ok(Self::Star),
            "leaf" => Ok(Self::Leaf),
            _ => Err(ContentError::UnknownIcon(s.to_string())),
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
