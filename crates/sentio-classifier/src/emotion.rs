use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of affect labels.
///
/// `Fear`, `Disgust` and `Surprise` are never produced by the classification
/// tables. They exist so that every code in `0..=8` has a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Emotion {
    Neutral = 0,
    Happy = 1,
    Sad = 2,
    Angry = 3,
    Excited = 4,
    Calm = 5,
    Fear = 6,
    Disgust = 7,
    Surprise = 8,
}

impl Emotion {
    pub const ALL: [Emotion; 9] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Excited,
        Emotion::Calm,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Surprise,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|emotion| u32::from(emotion.code()) == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Excited => "Excited",
            Emotion::Calm => "Calm",
            Emotion::Fear => "Fear",
            Emotion::Disgust => "Disgust",
            Emotion::Surprise => "Surprise",
        }
    }
}

/// Canonical name of an emotion.
pub fn label(emotion: Emotion) -> &'static str {
    emotion.label()
}

/// Name lookup for a raw emotion code. Codes outside the defined set read as
/// `"Neutral"`.
pub fn label_for_code(code: u32) -> &'static str {
    Emotion::from_code(code).map_or(Emotion::Neutral.label(), Emotion::label)
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion label: {0:?}")]
pub struct UnknownEmotion(pub String);

impl std::str::FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}
