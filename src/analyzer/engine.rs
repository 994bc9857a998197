use super::AnalysisResult;
use crate::layouts::Layout;
use crate::profile::KeyProfile;

/// Walks `text` once and accumulates hand/finger repeats and travel.
///
/// Characters without a key in `layout` are skipped and do not break a
/// streak: the next typed key is compared with the last one that was typed.
/// A neutral key (hand `Either`) is counted and travelled but resets the
/// streak, so the keys on either side of a space are never compared.
pub fn analyze_one(text: &str, layout: &Layout) -> AnalysisResult {
    let mut res = AnalysisResult::default();
    let mut prev: Option<&KeyProfile> = None;

    for c in text.chars() {
        let Some(cur) = layout.profile(c) else {
            continue;
        };

        res.typed_count += 1;
        res.distance_travelled += cur.distance;

        if cur.is_neutral() {
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            if p.hand == cur.hand {
                res.same_hand_count += 1;
                if p.finger == cur.finger {
                    res.same_finger_count += 1;
                }
            }
        }

        prev = Some(cur);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Finger, Hand};
    use std::collections::HashMap;

    fn layout(keys: &[(char, f32, Hand, Finger)]) -> Layout {
        let map: HashMap<_, _> = keys
            .iter()
            .map(|&(c, d, h, f)| (c, KeyProfile::new(d, h, f)))
            .collect();
        Layout::new("test", map).unwrap()
    }

    #[test]
    fn unmapped_gap_keeps_previous_key() {
        let l = layout(&[
            ('a', 0.0, Hand::Left, Finger::Pinky),
            ('q', 1.0, Hand::Left, Finger::Pinky),
        ]);
        let res = analyze_one("a#q", &l);
        assert_eq!(res.typed_count, 2);
        assert_eq!(res.same_hand_count, 1);
        assert_eq!(res.same_finger_count, 1);
        assert_eq!(res.distance_travelled, 1.0);
    }

    #[test]
    fn different_hands_do_not_count() {
        let l = layout(&[
            ('f', 0.0, Hand::Left, Finger::Index),
            ('j', 0.0, Hand::Right, Finger::Index),
        ]);
        let res = analyze_one("fjfj", &l);
        assert_eq!(res.same_hand_count, 0);
        assert_eq!(res.same_finger_count, 0);
        assert_eq!(res.typed_count, 4);
    }

    #[test]
    fn same_hand_different_finger() {
        let l = layout(&[
            ('a', 0.0, Hand::Left, Finger::Pinky),
            ('s', 0.0, Hand::Left, Finger::Ring),
        ]);
        let res = analyze_one("as", &l);
        assert_eq!(res.same_hand_count, 1);
        assert_eq!(res.same_finger_count, 0);
    }

    #[test]
    fn consecutive_neutral_keys_never_pair() {
        let l = layout(&[(' ', 0.0, Hand::Either, Finger::Thumb)]);
        let res = analyze_one("    ", &l);
        assert_eq!(res.typed_count, 4);
        assert_eq!(res.same_hand_count, 0);
        assert_eq!(res.same_finger_count, 0);
    }
}
