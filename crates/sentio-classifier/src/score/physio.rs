use super::clamp_score;
use crate::meters::MeterReading;

pub const REFERENCE_HEART_RATE: f64 = 70.0;
pub const REFERENCE_GSR: f64 = 5.0;
pub const REFERENCE_TEMPERATURE: f64 = 36.6;

const HEART_RATE_SPAN: f64 = 30.0;
const GSR_SPAN: f64 = 5.0;
const TEMPERATURE_SPAN: f64 = 1.0;

const HEART_RATE_WEIGHT: f64 = 0.4;
const GSR_WEIGHT: f64 = 0.4;
const TEMPERATURE_WEIGHT: f64 = 0.2;

/// Maps a `[heart rate, GSR, temperature]` reading to a signed arousal score.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysiologicalScorer;

impl PhysiologicalScorer {
    /// Readings without a usable signal (fewer than three values) score 0.
    pub fn score(&self, meters: &[f64]) -> f64 {
        MeterReading::from_slice(meters).map_or(0.0, |reading| self.score_reading(&reading))
    }

    pub fn score_reading(&self, reading: &MeterReading) -> f64 {
        let heart_rate = (reading.heart_rate - REFERENCE_HEART_RATE) / HEART_RATE_SPAN;
        let gsr = (reading.galvanic_skin_response - REFERENCE_GSR) / GSR_SPAN;
        let temperature = (reading.temperature - REFERENCE_TEMPERATURE) / TEMPERATURE_SPAN;

        let raw = HEART_RATE_WEIGHT * heart_rate + GSR_WEIGHT * gsr + TEMPERATURE_WEIGHT * temperature;
        let score = clamp_score(raw);
        tracing::trace!(target: "sentio_classifier", ?reading, score, "meters scored");
        score
    }
}
