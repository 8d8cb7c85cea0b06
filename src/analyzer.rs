//! Per-character emotion analysis
//!
//! Text is reduced to its CJK Unified Ideographs, then every remaining
//! character is looked up in the lexicon and each emotion it carries is
//! counted once per occurrence.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::emotion::Emotion;
use crate::lexicon::Lexicon;

/// First code point of the CJK Unified Ideographs block
pub const CJK_START: char = '\u{4e00}';
/// Last code point of the CJK Unified Ideographs block
pub const CJK_END: char = '\u{9fff}';

/// Whether a character lies in the CJK Unified Ideographs block (U+4E00..=U+9FFF)
pub fn is_cjk_ideograph(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// Drop every character outside the CJK Unified Ideographs block
pub fn filter_chinese(text: &str) -> String {
    text.chars().filter(|&c| is_cjk_ideograph(c)).collect()
}

/// Emotion counts of one analysis
///
/// Only emotions seen at least once are stored; [`AnalysisResult::get`]
/// reports zero for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    counts: BTreeMap<Emotion, u64>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn increment(&mut self, emotion: Emotion) {
        *self.counts.entry(emotion).or_insert(0) += 1;
    }

    /// Count for an emotion, zero when it never occurred
    pub fn get(&self, emotion: Emotion) -> u64 {
        self.counts.get(&emotion).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct emotions present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Emotion with the highest count, ties resolved by taxonomy order
    pub fn dominant(&self) -> Option<(Emotion, u64)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(Emotion, u64)>, (&emotion, &count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((emotion, count)),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u64)> + '_ {
        self.counts.iter().map(|(&emotion, &count)| (emotion, count))
    }

}

impl IntoIterator for AnalysisResult {
    type Item = (Emotion, u64);
    type IntoIter = btree_map::IntoIter<Emotion, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Analysis result together with the number of ideographs examined
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub emotions: AnalysisResult,
    pub characters_analyzed: usize,
}

/// Count lexicon emotions over the Chinese characters of `text`
pub fn analyze(text: &str, lexicon: &Lexicon) -> AnalysisResult {
    analyze_detailed(text, lexicon).emotions
}

/// Like [`analyze`], also reporting how many ideographs were examined
pub fn analyze_detailed(text: &str, lexicon: &Lexicon) -> Analysis {
    let clean = filter_chinese(text);
    if clean.is_empty() {
        return Analysis::default();
    }

    let mut emotions = AnalysisResult::new();
    let mut characters_analyzed = 0;
    for character in clean.chars() {
        characters_analyzed += 1;
        for &emotion in lexicon.emotions_for(character) {
            emotions.increment(emotion);
        }
    }

    debug!(
        "Analyzed {} characters: {} emotion matches",
        characters_analyzed,
        emotions.total()
    );

    Analysis {
        emotions,
        characters_analyzed,
    }
}
