pub mod physio;
pub mod text;

pub use physio::PhysiologicalScorer;
pub use text::TextSentimentScorer;

/// Bounds every channel score to `[-1, 1]`.
pub fn clamp_score(raw: f64) -> f64 {
    raw.clamp(-1.0, 1.0)
}
