use super::{AnalysisResult, NormalizedScores};

/// Rescales raw counters to "per 100 typed characters".
///
/// 100 on a count field means every typed character triggered the event.
/// Distance is unbounded. A result with nothing typed normalizes to zeros.
pub fn normalize(raw: &AnalysisResult) -> NormalizedScores {
    if raw.typed_count == 0 {
        return NormalizedScores::default();
    }

    let factor = 100.0 / raw.typed_count as f32;
    NormalizedScores {
        same_hand: raw.same_hand_count as f32 * factor,
        same_finger: raw.same_finger_count as f32 * factor,
        distance: raw.distance_travelled * factor,
    }
}
