// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur at the CMS boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The content store could not be reached or answered a failure.
    Http(String),
    /// The content store's response could not be decoded.
    Decode(String),
    /// An icon tag is not in the supported set.
    UnknownIcon(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "Content store request failed: {msg}"),
            Self::Decode(msg) => write!(f, "Failed to decode content: {msg}"),
            Self::UnknownIcon(tag) => write!(f, "Unknown icon tag: '{tag}'"),
        }
    }
}

impl std::error::Error for ContentError {}
