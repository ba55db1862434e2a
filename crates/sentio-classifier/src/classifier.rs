use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::meters::MeterReading;
use crate::score::{PhysiologicalScorer, TextSentimentScorer};

/// Cut points for one channel. Scores strictly above `happy`/`excited` or
/// strictly below `sad`/`angry` pick those labels; anything else falls back.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Thresholds {
    happy: f64,
    excited: f64,
    sad: f64,
    angry: f64,
    fallback: Emotion,
}

impl Thresholds {
    fn decide(&self, score: f64) -> Emotion {
        if score > self.happy {
            Emotion::Happy
        } else if score > self.excited {
            Emotion::Excited
        } else if score < self.sad {
            Emotion::Sad
        } else if score < self.angry {
            Emotion::Angry
        } else {
            self.fallback
        }
    }
}

const TEXT_THRESHOLDS: Thresholds = Thresholds {
    happy: 0.7,
    excited: 0.3,
    sad: -0.7,
    angry: -0.3,
    fallback: Emotion::Neutral,
};

// Relaxed physiology reads as Calm rather than Neutral.
const METER_THRESHOLDS: Thresholds = Thresholds {
    happy: 0.6,
    excited: 0.2,
    sad: -0.6,
    angry: -0.2,
    fallback: Emotion::Calm,
};

const COMBINED_THRESHOLDS: Thresholds = Thresholds {
    happy: 0.65,
    excited: 0.3,
    sad: -0.65,
    angry: -0.3,
    fallback: Emotion::Neutral,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Text,
    Meters,
    Combined,
}

/// Outcome of one classification: the score that was thresholded and the
/// label it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub channel: Channel,
    pub score: f64,
    pub emotion: Emotion,
}

impl Assessment {
    fn neutral(channel: Channel) -> Self {
        Self {
            channel,
            score: 0.0,
            emotion: Emotion::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        self.emotion.label()
    }
}

/// Stateless two-channel classifier. One instance can be shared freely
/// across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionClassifier {
    text: TextSentimentScorer,
    meters: PhysiologicalScorer,
}

impl EmotionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify_text(&self, text: &str) -> Emotion {
        self.assess_text(text).emotion
    }

    pub fn classify_meters(&self, meters: &[f64]) -> Emotion {
        self.assess_meters(meters).emotion
    }

    pub fn classify_combined(&self, text: &str, meters: &[f64]) -> Emotion {
        self.assess_combined(text, meters).emotion
    }

    pub fn label(&self, emotion: Emotion) -> &'static str {
        emotion.label()
    }

    pub fn assess_text(&self, text: &str) -> Assessment {
        let score = self.text.score(text);
        let emotion = TEXT_THRESHOLDS.decide(score);
        tracing::debug!(target: "sentio_classifier", score, %emotion, "text channel");
        Assessment {
            channel: Channel::Text,
            score,
            emotion,
        }
    }

    /// A reading without usable signal is `Neutral`, not `Calm`.
    pub fn assess_meters(&self, meters: &[f64]) -> Assessment {
        let Some(reading) = MeterReading::from_slice(meters) else {
            tracing::debug!(
                target: "sentio_classifier",
                values = meters.len(),
                "meter channel has no usable signal"
            );
            return Assessment::neutral(Channel::Meters);
        };

        let score = self.meters.score_reading(&reading);
        let emotion = METER_THRESHOLDS.decide(score);
        tracing::debug!(target: "sentio_classifier", score, %emotion, "meter channel");
        Assessment {
            channel: Channel::Meters,
            score,
            emotion,
        }
    }

    /// Averages both channel scores. An absent channel contributes 0 rather
    /// than being skipped, so a lone channel is halved.
    pub fn assess_combined(&self, text: &str, meters: &[f64]) -> Assessment {
        let reading = MeterReading::from_slice(meters);
        if text.is_empty() && reading.is_none() {
            tracing::debug!(target: "sentio_classifier", "combined: both channels absent");
            return Assessment::neutral(Channel::Combined);
        }

        let text_score = self.text.score(text);
        let meter_score = reading.map_or(0.0, |reading| self.meters.score_reading(&reading));
        let score = (text_score + meter_score) / 2.0;
        let emotion = COMBINED_THRESHOLDS.decide(score);
        tracing::debug!(
            target: "sentio_classifier",
            text_score,
            meter_score,
            score,
            %emotion,
            "combined channels"
        );
        Assessment {
            channel: Channel::Combined,
            score,
            emotion,
        }
    }
}
