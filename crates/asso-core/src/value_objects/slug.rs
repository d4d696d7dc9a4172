//! Slug value object - URL-safe identifier derived from a title
//!
//! A slug contains only lowercase ASCII letters, digits, and hyphens, with no
//! leading, trailing, or duplicate hyphens. Deriving a slug from a title is
//! deterministic and idempotent: slugifying an existing slug returns it
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// URL-safe slug for publications
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

/// Errors when parsing a slug from an external string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug is empty")]
    Empty,

    #[error("Slug contains invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("Slug has leading, trailing, or duplicate hyphens")]
    MalformedHyphens,
}

impl Slug {
    /// Derive a slug from a title.
    ///
    /// Lowercases, folds common accented Latin characters to ASCII, drops
    /// everything outside `[a-z0-9 -]`, and collapses whitespace and hyphen
    /// runs into single hyphens.
    pub fn from_title(title: &str) -> Self {
        let mut out = String::with_capacity(title.len());
        let mut last_was_hyphen = true; // suppress leading hyphen

        for c in title.chars().map(fold_accent) {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                out.push(c);
                last_was_hyphen = false;
            } else if (c.is_whitespace() || c == '-') && !last_was_hyphen {
                out.push('-');
                last_was_hyphen = true;
            }
            // anything else is dropped
        }

        while out.ends_with('-') {
            out.pop();
        }

        Self(out)
    }

    /// Get the slug as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check whether the slug carries any content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    /// Parse an externally supplied slug, rejecting anything `from_title`
    /// would not produce.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }
        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MalformedHyphens);
        }
        Ok(Self(s.to_string()))
    }
}

/// Fold common accented Latin characters to their ASCII base letter.
///
/// Covers the Latin-1 and Latin Extended-A ranges that show up in French
/// titles; unknown characters pass through unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        'œ' | 'Œ' => 'o', // "oe" would need two chars; 'o' keeps the fold 1:1
        'æ' | 'Æ' => 'a',
        other => other,
    }
}
