pub mod classifier;
pub mod emotion;
pub mod meters;
pub mod score;

pub use classifier::{Assessment, Channel, EmotionClassifier};
pub use emotion::{label, label_for_code, Emotion, UnknownEmotion};
pub use meters::{parse_meter_lines, parse_meters, MeterParseError, MeterReading};
pub use score::{clamp_score, PhysiologicalScorer, TextSentimentScorer};
