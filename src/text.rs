use crate::error::KfResult;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumString};

const USHER: &str = "during the whole of a dull, dark, and soundless day in the autumn of the year, \
when the clouds hung oppressively low in the heaven";

const COLEMAK: &str = " The Colemak layout was designed with the QWERTY layout as a base, changing the \
positions of 17 keys while retaining the QWERTY positions of most non-alphabetic characters and many \
popular keyboard shortcuts, supposedly making it easier to learn than Dvorak layout for people who \
already type in QWERTY without losing efficiency. It shares several design goals with the Dvorak \
layout, such as minimizing finger path distance and making heavy use of the home row.[3] 74% of \
typing is done on the home row compared to 70% for Dvorak and 32% for QWERTY.[4] The Colemak layout \
lacks a Caps Lock key; an additional Backspace key occupies the position typically occupied by Caps \
Lock on modern keyboards.[1]Coleman states that he designed Colemak to be easy to learn, explaining \
that Dvorak is hard for QWERTY typists to learn due to it being so different from the QWERTY layout.[5] \
The layout has attracted media attention as an alternative to Dvorak for improving typing speed and \
comfort with an alternate keyboard layout.[4][6][7]";

/// Embedded reference passages.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SampleText {
    /// Opening sentence of "The Fall of the House of Usher", all lowercase.
    Usher,
    /// Encyclopedia paragraph on the Colemak layout, mixed case and digits.
    Colemak,
}

impl SampleText {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Usher => USHER,
            Self::Colemak => COLEMAK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Sample(SampleText),
    File(PathBuf),
    Inline(String),
    Stdin,
}

impl TextSource {
    pub fn read(&self) -> KfResult<String> {
        match self {
            Self::Sample(s) => Ok(s.text().to_string()),
            Self::File(path) => Ok(fs::read_to_string(path)?),
            Self::Inline(s) => Ok(s.clone()),
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample(s) => write!(f, "sample:{}", s),
            Self::File(p) => write!(f, "file:{}", p.display()),
            Self::Inline(_) => write!(f, "inline"),
            Self::Stdin => write!(f, "stdin"),
        }
    }
}

/// Folds case unless the caller asked for a case-sensitive run.
///
/// Layout tables are keyed on lowercase characters, so uppercase input only
/// maps when a table lists it explicitly.
pub fn prepare(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive || !text.chars().any(char::is_uppercase) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}
