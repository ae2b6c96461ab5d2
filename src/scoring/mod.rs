pub mod criterion;
pub mod curve;
pub mod geometry;
pub mod scorer;
pub mod tier;

pub use criterion::{Criterion, CriterionResult};
pub use curve::ScoringCurve;
pub use scorer::{PostureReport, PostureScorer};
pub use tier::Tier;
