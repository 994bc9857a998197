use serde::Serialize;

/// Raw counters from a single pass over a text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub same_hand_count: u64,
    pub same_finger_count: u64,
    pub distance_travelled: f32,
    /// Characters that had a key in the layout.
    pub typed_count: u64,
}

/// Raw counters rescaled per 100 typed characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScores {
    pub same_hand: f32,
    pub same_finger: f32,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub layout_name: String,
    pub raw: AnalysisResult,
    pub normalized: NormalizedScores,
}

/// One entry per enabled layout, in registry order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub entries: Vec<LayoutReport>,
}

impl AggregateReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, layout_name: &str) -> Option<&LayoutReport> {
        self.entries.iter().find(|e| e.layout_name == layout_name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.layout_name.as_str()).collect()
    }
}
