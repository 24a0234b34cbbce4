// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CMS content resolution for the PestAway site.
//!
//! The CMS is an external collaborator: pages issue read-only queries
//! and receive partial documents. The site-wide contract is that every
//! CMS-sourced field falls back to literal default content when missing
//! or blank - nothing ever renders empty. That policy lives here, in one
//! place, as typed `resolve()` steps from partial drafts to complete
//! content, instead of being repeated at every call site.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod cms;
mod error;
mod icon;
mod pages;
mod resolve;

#[cfg(test)]
mod tests;

pub use cms::{CmsClient, CmsConfig};
pub use error::ContentError;
pub use icon::Icon;
pub use pages::{
    Hero, HeroDraft, PestProfile, PestProfileDraft, ServiceCard, ServiceCardDraft,
};
pub use resolve::{or_fallback, text_or};
