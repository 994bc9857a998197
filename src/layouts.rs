use crate::error::{KeyFitError, KfResult};
use crate::profile::{Finger, Hand, KeyProfile};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A named character -> key table.
///
/// The profile table is fixed at construction; only the `enabled` flag may
/// change afterwards.
#[derive(Debug, Clone)]
pub struct Layout {
    name: String,
    profiles: HashMap<char, KeyProfile>,
    pub enabled: bool,
}

impl Layout {
    /// Builds an enabled layout, rejecting malformed profiles.
    pub fn new(name: impl Into<String>, profiles: HashMap<char, KeyProfile>) -> KfResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KeyFitError::Validation(
                "layout name must not be empty".to_string(),
            ));
        }

        for (c, profile) in &profiles {
            profile.validate().map_err(|e| {
                KeyFitError::Validation(format!("layout '{}', key {:?}: {}", name, c, e))
            })?;
        }

        Ok(Self {
            name,
            profiles,
            enabled: true,
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn profile(&self, c: char) -> Option<&KeyProfile> {
        self.profiles.get(&c)
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&char, &KeyProfile)> {
        self.profiles.iter()
    }

    pub fn key_count(&self) -> usize {
        self.profiles.len()
    }
}

// Standard 30-key row stagger: 3 rows x 10 columns, left hand on columns 0-4.
const GRID_DISTANCES: [f32; 30] = [
    1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, //
    0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
    1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, //
];

const GRID_FINGERS: [Finger; 10] = [
    Finger::Pinky,
    Finger::Ring,
    Finger::Middle,
    Finger::Index,
    Finger::Index,
    Finger::Index,
    Finger::Index,
    Finger::Middle,
    Finger::Ring,
    Finger::Pinky,
];

const SPACE: KeyProfile = KeyProfile::new(0.0, Hand::Either, Finger::Thumb);
const ENTER: KeyProfile = KeyProfile::new(3.0, Hand::Right, Finger::Pinky);

/// Profile of slot `i` on the standard grid.
pub fn grid_profile(slot: usize) -> KeyProfile {
    let col = slot % 10;
    let hand = if col < 5 { Hand::Left } else { Hand::Right };
    KeyProfile::new(GRID_DISTANCES[slot], hand, GRID_FINGERS[col])
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    #[strum(to_string = "turkish_f", serialize = "f_turkish", serialize = "f-tr")]
    TurkishF,
}

impl KnownLayout {
    /// Maps the standard 30-key row stagger, top row first.
    /// `None` for layouts that do not fit the grid.
    pub fn grid_str(&self) -> Option<&'static str> {
        match self {
            Self::Qwerty => Some("qwertyuiopasdfghjkl;zxcvbnm,./"),
            Self::Dvorak => Some("',.pyfgcrlaoeuidhtns;qjkxbmwvz"),
            Self::Colemak => Some("qwfpgjluy;arstdhneiozxcvbkm,./"),
            Self::TurkishF => None,
        }
    }

    pub fn enabled_by_default(&self) -> bool {
        !matches!(self, Self::TurkishF)
    }

    pub fn profiles(&self) -> HashMap<char, KeyProfile> {
        let mut map: HashMap<char, KeyProfile> = match self.grid_str() {
            Some(s) => s
                .chars()
                .enumerate()
                .map(|(slot, c)| (c, grid_profile(slot)))
                .collect(),
            None => turkish_f_profiles(),
        };
        map.insert(' ', SPACE);
        map.insert('\n', ENTER);
        map
    }

    pub fn build(&self) -> Layout {
        Layout {
            name: self.to_string(),
            profiles: self.profiles(),
            enabled: self.enabled_by_default(),
        }
    }
}

/// Turkish F. The right pinky covers three extra columns, so it is spelled
/// out rather than laid over the grid.
fn turkish_f_profiles() -> HashMap<char, KeyProfile> {
    use Finger::*;
    use Hand::*;

    let table: [(char, f32, Hand, Finger); 32] = [
        // Top
        ('f', 1.0, Left, Pinky),
        ('g', 1.0, Left, Ring),
        ('ğ', 1.0, Left, Middle),
        ('ı', 1.0, Left, Index),
        ('o', 2.0, Left, Index),
        ('d', 2.0, Right, Index),
        ('r', 1.0, Right, Index),
        ('n', 1.0, Right, Middle),
        ('h', 1.0, Right, Ring),
        ('p', 1.0, Right, Pinky),
        ('q', 2.0, Right, Pinky),
        ('w', 3.0, Right, Pinky),
        // Home
        ('u', 0.0, Left, Pinky),
        ('i', 0.0, Left, Ring),
        ('e', 0.0, Left, Middle),
        ('a', 0.0, Left, Index),
        ('ü', 1.0, Left, Index),
        ('t', 1.0, Right, Index),
        ('k', 0.0, Right, Index),
        ('m', 0.0, Right, Middle),
        ('l', 0.0, Right, Ring),
        ('y', 0.0, Right, Pinky),
        ('ş', 1.0, Right, Pinky),
        ('x', 2.0, Right, Pinky),
        // Bottom
        ('j', 1.0, Left, Pinky),
        ('ö', 1.0, Left, Ring),
        ('v', 1.0, Left, Middle),
        ('c', 1.0, Left, Index),
        ('ç', 2.0, Left, Index),
        ('z', 2.0, Right, Index),
        ('s', 1.0, Right, Index),
        ('b', 1.0, Right, Middle),
    ];

    table
        .iter()
        .map(|&(c, d, h, f)| (c, KeyProfile::new(d, h, f)))
        .collect()
}

pub fn get_all_layouts() -> Vec<Layout> {
    KnownLayout::iter().map(|k| k.build()).collect()
}
