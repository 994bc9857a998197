use crate::error::{KeyFitError, KfResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which hand's resting position a key belongs to.
///
/// `Either` marks neutral keys (the space bar) that both thumbs can reach.
/// Older layout tables name the hands in Turkish (`sol`/`sag`), and the
/// neutral hand is usually written `any`, so those spellings are accepted too.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Hand {
    #[serde(alias = "sol", alias = "l")]
    #[strum(to_string = "left", serialize = "sol", serialize = "l")]
    Left,
    #[serde(alias = "sag", alias = "r")]
    #[strum(to_string = "right", serialize = "sag", serialize = "r")]
    Right,
    #[serde(alias = "any", alias = "both")]
    #[strum(to_string = "either", serialize = "any", serialize = "both")]
    Either,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

/// Physical metadata of the key a character is typed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyProfile {
    /// Travel from the resting position; 0 is the home row.
    pub distance: f32,
    pub hand: Hand,
    pub finger: Finger,
}

impl KeyProfile {
    pub const fn new(distance: f32, hand: Hand, finger: Finger) -> Self {
        Self {
            distance,
            hand,
            finger,
        }
    }

    #[inline(always)]
    pub fn is_neutral(&self) -> bool {
        self.hand == Hand::Either
    }

    pub fn validate(&self) -> KfResult<()> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(KeyFitError::Validation(format!(
                "distance must be a non-negative number, got {}",
                self.distance
            )));
        }
        Ok(())
    }
}

/// Resolves a key token from a layout file into the character it types.
///
/// Whitespace keys cannot be written literally in most table formats, so
/// `space`, `enter` and `tab` (plus the usual short forms) stand in for them.
pub fn parse_key_token(token: &str) -> KfResult<char> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }

    match token.trim().to_ascii_lowercase().as_str() {
        "space" | "spc" => Ok(' '),
        "enter" | "return" | "ret" | "\\n" => Ok('\n'),
        "tab" | "\\t" => Ok('\t'),
        _ => Err(KeyFitError::Validation(format!(
            "key '{}' must be a single character or one of space/enter/tab",
            token
        ))),
    }
}
