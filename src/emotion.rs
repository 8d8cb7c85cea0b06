//! Emotion taxonomy
//!
//! The eight target emotions of the NRC emotion lexicon. The lexicon's
//! positive/negative polarity columns are not part of this set.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::EmolexError;

/// One of the eight target emotions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
}

impl Emotion {
    /// All emotions in lexicon column order
    pub const ALL: [Emotion; 8] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
    ];

    /// Lowercase label, identical to the lexicon header name
    pub const fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }

    /// Traditional Chinese display name
    pub const fn zh_name(self) -> &'static str {
        match self {
            Emotion::Anger => "憤怒",
            Emotion::Anticipation => "期待",
            Emotion::Disgust => "厭惡",
            Emotion::Fear => "恐懼",
            Emotion::Joy => "喜悅",
            Emotion::Sadness => "悲傷",
            Emotion::Surprise => "驚訝",
            Emotion::Trust => "信任",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = EmolexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| EmolexError::InvalidEmotion(s.to_string()))
    }
}
