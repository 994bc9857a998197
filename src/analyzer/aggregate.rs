use super::{analyze_one, normalize, AggregateReport, LayoutReport};
use crate::layouts::Layout;
use tracing::debug;

/// Runs the analyzer for every enabled layout, keeping the input order.
pub fn aggregate(text: &str, layouts: &[Layout]) -> AggregateReport {
    let entries = layouts
        .iter()
        .filter(|l| l.enabled)
        .map(|layout| {
            let raw = analyze_one(text, layout);
            debug!(
                "{}: typed={} same_hand={} same_finger={} distance={}",
                layout.name(),
                raw.typed_count,
                raw.same_hand_count,
                raw.same_finger_count,
                raw.distance_travelled
            );
            LayoutReport {
                layout_name: layout.name().to_string(),
                raw,
                normalized: normalize(&raw),
            }
        })
        .collect();

    AggregateReport { entries }
}
