pub mod aggregate;
pub mod engine;
pub mod normalize;
pub mod types;

pub use self::aggregate::aggregate;
pub use self::engine::analyze_one;
pub use self::normalize::normalize;
pub use self::types::{AggregateReport, AnalysisResult, LayoutReport, NormalizedScores};
