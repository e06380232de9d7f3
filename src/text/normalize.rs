//! Lowercasing and character stripping applied to every review.
//!
//! The transform is a fixed point: normalizing already normalized text returns
//! it unchanged, for every option combination.

use crate::errors::NormalizeError;
use serde::{Deserialize, Serialize};

/// ASCII punctuation removed from every review.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Optional normalization steps on top of lowercasing and punctuation removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Remove every numeric character.
    #[serde(default)]
    pub strip_digits: bool,
    /// Collapse whitespace runs to one space and trim both ends.
    #[serde(default)]
    pub collapse_whitespace: bool,
}

impl NormalizeOptions {
    /// Lowercase and strip punctuation only.
    pub fn basic() -> Self {
        Self {
            strip_digits: false,
            collapse_whitespace: false,
        }
    }

    /// Also strip digits and collapse whitespace.
    pub fn extended() -> Self {
        Self {
            strip_digits: true,
            collapse_whitespace: true,
        }
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Normalize an already decoded string.
pub fn normalize_text(text: &str, options: &NormalizeOptions) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_punctuation(*c))
        .filter(|c| !(options.strip_digits && c.is_numeric()))
        .collect();

    if options.collapse_whitespace {
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        stripped
    }
}

/// Decode a raw cell and normalize it.
///
/// Bytes that are not valid UTF-8 are rejected as non-text.
pub fn normalize(raw: &[u8], options: &NormalizeOptions) -> Result<String, NormalizeError> {
    let text = std::str::from_utf8(raw).map_err(|e| NormalizeError::NotText {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(normalize_text(text, options))
}
