#![allow(dead_code)]

use keyfit::layouts::Layout;
use keyfit::profile::{Finger, Hand, KeyProfile};
use std::collections::HashMap;

/// Builder for small hand-written layouts.
pub struct LayoutBuilder {
    name: String,
    keys: HashMap<char, KeyProfile>,
    enabled: bool,
}

impl LayoutBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keys: HashMap::new(),
            enabled: true,
        }
    }

    pub fn key(mut self, c: char, distance: f32, hand: Hand, finger: Finger) -> Self {
        self.keys.insert(c, KeyProfile::new(distance, hand, finger));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn build(self) -> Layout {
        Layout::new(self.name, self.keys)
            .expect("test layout should be valid")
            .with_enabled(self.enabled)
    }
}

/// `a`, `space`, `b` as used in the streak-reset scenario.
pub fn abc_layout() -> Layout {
    LayoutBuilder::new("abc")
        .key('a', 0.0, Hand::Left, Finger::Pinky)
        .key(' ', 0.0, Hand::Either, Finger::Thumb)
        .key('b', 1.0, Hand::Left, Finger::Index)
        .build()
}
