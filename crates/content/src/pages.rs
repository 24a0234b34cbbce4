// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partial CMS documents and their fully-resolved counterparts.
//!
//! Drafts deserialize straight from the content store with every field
//! optional; `resolve()` applies the literal defaults so consuming code
//! only ever sees complete content.

use crate::icon::Icon;
use crate::resolve::text_or;
use serde::Deserialize;

const HERO_HEADLINE: &str = "Pest problems? Consider them solved.";
const HERO_SUBHEADLINE: &str =
    "Family-owned, licensed, and local. Same-week appointments for homes and businesses.";
const HERO_CTA_LABEL: &str = "Book an appointment";

const SERVICE_TITLE: &str = "General pest control";
const SERVICE_BLURB: &str =
    "Inspection, treatment, and prevention tailored to your property.";

const PEST_NAME: &str = "Household pest";
const PEST_DESCRIPTION: &str =
    "Our technicians identify the infestation and treat it at the source.";

/// Partial hero section as stored in the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDraft {
    /// Headline text.
    pub headline: Option<String>,
    /// Supporting subheadline text.
    pub subheadline: Option<String>,
    /// Call-to-action button label.
    pub cta_label: Option<String>,
}

/// Fully-resolved hero section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    /// Headline text.
    pub headline: String,
    /// Supporting subheadline text.
    pub subheadline: String,
    /// Call-to-action button label.
    pub cta_label: String,
}

impl HeroDraft {
    /// Resolves the draft against the hero's literal defaults.
    #[must_use]
    pub fn resolve(self) -> Hero {
        Hero {
            headline: text_or(self.headline, HERO_HEADLINE),
            subheadline: text_or(self.subheadline, HERO_SUBHEADLINE),
            cta_label: text_or(self.cta_label, HERO_CTA_LABEL),
        }
    }
}

/// Partial service card as stored in the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCardDraft {
    /// Service title.
    pub title: Option<String>,
    /// One-sentence service description.
    pub blurb: Option<String>,
    /// Icon tag.
    pub icon: Option<String>,
}

/// Fully-resolved service card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    /// Service title.
    pub title: String,
    /// One-sentence service description.
    pub blurb: String,
    /// The icon to render.
    pub icon: Icon,
}

impl ServiceCardDraft {
    /// Resolves the draft against the service card's literal defaults.
    #[must_use]
    pub fn resolve(self) -> ServiceCard {
        ServiceCard {
            title: text_or(self.title, SERVICE_TITLE),
            blurb: text_or(self.blurb, SERVICE_BLURB),
            icon: Icon::resolve_tag(self.icon.as_deref()),
        }
    }
}

/// Partial pest library entry as stored in the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestProfileDraft {
    /// Pest display name.
    pub name: Option<String>,
    /// Pest description.
    pub description: Option<String>,
    /// Icon tag.
    pub icon: Option<String>,
}

/// Fully-resolved pest library entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PestProfile {
    /// Pest display name.
    pub name: String,
    /// Pest description.
    pub description: String,
    /// The icon to render.
    pub icon: Icon,
}

impl PestProfileDraft {
    /// Resolves the draft against the pest profile's literal defaults.
    #[must_use]
    pub fn resolve(self) -> PestProfile {
        PestProfile {
            name: text_or(self.name, PEST_NAME),
            description: text_or(self.description, PEST_DESCRIPTION),
            icon: Icon::resolve_tag(self.icon.as_deref()),
        }
    }
}
