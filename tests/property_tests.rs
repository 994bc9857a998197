use keyfit::analyzer::{aggregate, analyze_one, normalize};
use keyfit::layouts::Layout;
use keyfit::profile::{Finger, Hand, KeyProfile};
use proptest::prelude::*;
use std::collections::HashMap;

const MAPPED: &str = "abcdef ";
const UNMAPPED: &str = "xyz#!?";

// --- STRATEGIES ---

fn arb_hand() -> impl Strategy<Value = Hand> {
    prop_oneof![Just(Hand::Left), Just(Hand::Right), Just(Hand::Either)]
}

fn arb_finger() -> impl Strategy<Value = Finger> {
    prop_oneof![
        Just(Finger::Pinky),
        Just(Finger::Ring),
        Just(Finger::Middle),
        Just(Finger::Index),
        Just(Finger::Thumb),
    ]
}

prop_compose! {
    fn arb_profile()(
        distance in 0.0..10.0f32,
        hand in arb_hand(),
        finger in arb_finger()
    ) -> KeyProfile {
        KeyProfile::new(distance, hand, finger)
    }
}

prop_compose! {
    fn arb_layout()(
        profiles in proptest::collection::vec(arb_profile(), MAPPED.chars().count())
    ) -> Layout {
        let map: HashMap<char, KeyProfile> = MAPPED.chars().zip(profiles).collect();
        Layout::new("prop", map).unwrap()
    }
}

fn arb_text() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = MAPPED.chars().chain(UNMAPPED.chars()).collect();
    proptest::collection::vec(proptest::sample::select(alphabet), 0..80)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_unmapped_insertion_changes_nothing(
        layout in arb_layout(),
        text in arb_text(),
        extra in proptest::sample::select(UNMAPPED.chars().collect::<Vec<_>>()),
        pos in any::<prop::sample::Index>()
    ) {
        let mut chars: Vec<char> = text.chars().collect();
        let at = pos.index(chars.len() + 1);
        chars.insert(at, extra);
        let with_extra: String = chars.into_iter().collect();

        prop_assert_eq!(analyze_one(&text, &layout), analyze_one(&with_extra, &layout));
    }

    #[test]
    fn test_distance_is_monotonic(layout in arb_layout(), text in arb_text()) {
        let mut last = 0.0f32;
        let mut prefix = String::new();
        for c in text.chars() {
            prefix.push(c);
            let d = analyze_one(&prefix, &layout).distance_travelled;
            prop_assert!(d >= last, "distance dropped from {} to {} at {:?}", last, d, prefix);
            last = d;
        }
    }

    #[test]
    fn test_same_key_repetition(
        n in 1usize..200,
        distance in 0.0..5.0f32,
        hand in prop_oneof![Just(Hand::Left), Just(Hand::Right)],
        finger in arb_finger()
    ) {
        let mut map = HashMap::new();
        map.insert('k', KeyProfile::new(distance, hand, finger));
        let layout = Layout::new("one", map).unwrap();

        let raw = analyze_one(&"k".repeat(n), &layout);
        prop_assert_eq!(raw.typed_count, n as u64);
        prop_assert_eq!(raw.same_hand_count, (n - 1) as u64);
        prop_assert_eq!(raw.same_finger_count, (n - 1) as u64);
    }

    #[test]
    fn test_counts_are_bounded(layout in arb_layout(), text in arb_text()) {
        let raw = analyze_one(&text, &layout);
        prop_assert!(raw.same_finger_count <= raw.same_hand_count);
        prop_assert!(raw.same_hand_count <= raw.typed_count.saturating_sub(1));

        let n = normalize(&raw);
        prop_assert!(n.same_hand.is_finite() && n.same_finger.is_finite() && n.distance.is_finite());
        prop_assert!((0.0..=100.0).contains(&n.same_hand));
        prop_assert!((0.0..=100.0).contains(&n.same_finger));
        prop_assert!(n.distance >= 0.0);
    }

    #[test]
    fn test_aggregate_keeps_enabled_in_order(
        flags in proptest::collection::vec(any::<bool>(), 0..8),
        text in arb_text()
    ) {
        let layouts: Vec<Layout> = flags
            .iter()
            .enumerate()
            .map(|(i, &enabled)| {
                let mut map = HashMap::new();
                map.insert('a', KeyProfile::new(i as f32, Hand::Left, Finger::Index));
                Layout::new(format!("l{}", i), map).unwrap().with_enabled(enabled)
            })
            .collect();

        let report = aggregate(&text, &layouts);
        let expected: Vec<String> = layouts
            .iter()
            .filter(|l| l.enabled)
            .map(|l| l.name().to_string())
            .collect();
        let got: Vec<String> = report.entries.iter().map(|e| e.layout_name.clone()).collect();
        prop_assert_eq!(got, expected);
    }
}
