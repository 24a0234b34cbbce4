// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ContentError, Icon};
use std::str::FromStr;

const ALL_ICONS: [Icon; 10] = [
    Icon::Bug,
    Icon::Shield,
    Icon::House,
    Icon::Building,
    Icon::Phone,
    Icon::Mail,
    Icon::MapPin,
    Icon::Calendar,
    Icon::Star,
    Icon::Leaf,
];

#[test]
fn test_known_tags_round_trip() {
    for icon in ALL_ICONS {
        assert_eq!(Icon::from_str(icon.as_str()).unwrap(), icon);
    }
}

#[test]
fn test_unknown_tag_is_rejected_by_parse() {
    let result = Icon::from_str("sparkles");

    assert!(matches!(result, Err(ContentError::UnknownIcon(tag)) if tag == "sparkles"));
}

#[test]
fn test_resolve_tag_defaults_unknown_and_missing() {
    assert_eq!(Icon::resolve_tag(Some("sparkles")), Icon::DEFAULT);
    assert_eq!(Icon::resolve_tag(None), Icon::DEFAULT);
}

#[test]
fn test_resolve_tag_keeps_known_tags() {
    assert_eq!(Icon::resolve_tag(Some("map-pin")), Icon::MapPin);
    assert_eq!(Icon::resolve_tag(Some("leaf")), Icon::Leaf);
}
