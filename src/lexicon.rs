//! Emotion lexicon loading
//!
//! Parses the NRC emotion lexicon (tab-separated, one header line) into a
//! mapping from single Chinese character to the emotions it evokes.
//!
//! Expected column order:
//! `English Word, anger, anticipation, disgust, fear, joy, negative, positive,
//! sadness, surprise, trust, <Language> Word`
//!
//! Column positions are taken from the header names when all eight emotions
//! are present there, and from the layout above otherwise.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::analyzer::is_cjk_ideograph;
use crate::emotion::Emotion;
use crate::errors::EmolexError;
use crate::Result;

/// Data lines shorter than this are skipped
pub const MIN_FIELDS: usize = 12;

/// Emotion column indices of the published lexicon, polarity columns (6, 7) skipped
const POSITIONAL_EMOTION_COLUMNS: [usize; 8] = [1, 2, 3, 4, 5, 8, 9, 10];

/// Translated word column of the published lexicon
const POSITIONAL_WORD_COLUMN: usize = 11;

/// Where the column layout of a lexicon file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSource {
    /// Resolved from header column names
    Header,
    /// Fixed positions of the published format
    Positional,
}

/// Statistics gathered while loading a lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub data_lines: usize,
    pub accepted_lines: usize,
    pub skipped_short: usize,
    pub skipped_word: usize,
    pub label_assignments: usize,
    pub layout: Option<LayoutSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnLayout {
    emotions: [usize; 8],
    word: usize,
    source: LayoutSource,
}

impl ColumnLayout {
    const POSITIONAL: Self = Self {
        emotions: POSITIONAL_EMOTION_COLUMNS,
        word: POSITIONAL_WORD_COLUMN,
        source: LayoutSource::Positional,
    };

    fn from_header(header: &str) -> Self {
        let names: Vec<String> = header
            .trim_start_matches('\u{feff}')
            .trim()
            .split('\t')
            .map(|name| name.trim().to_lowercase())
            .collect();
        let position = |wanted: &str| names.iter().position(|name| name == wanted);

        let mut emotions = [0usize; 8];
        for (slot, emotion) in emotions.iter_mut().zip(Emotion::ALL) {
            match position(emotion.as_str()) {
                Some(index) => *slot = index,
                None => {
                    warn!(
                        "Lexicon header has no '{}' column, falling back to positional layout",
                        emotion
                    );
                    return Self::POSITIONAL;
                }
            }
        }

        let block_end = emotions
            .iter()
            .copied()
            .chain(position("negative"))
            .chain(position("positive"))
            .max()
            .unwrap_or(0);

        let word = names
            .iter()
            .enumerate()
            .skip(block_end + 1)
            .find(|(_, name)| name.ends_with("word"))
            .map(|(index, _)| index);

        match word {
            Some(word) => Self {
                emotions,
                word,
                source: LayoutSource::Header,
            },
            None => {
                warn!("Lexicon header has no translated word column, falling back to positional layout");
                Self::POSITIONAL
            }
        }
    }

    fn required_fields(&self) -> usize {
        let widest = self.emotions.iter().copied().max().unwrap_or(0).max(self.word);
        MIN_FIELDS.max(widest + 1)
    }

    fn apply(&self, line: &str, lexicon: &mut Lexicon, report: &mut LoadReport) {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < self.required_fields() {
            report.skipped_short += 1;
            return;
        }

        let mut chars = fields[self.word].chars();
        let character = match (chars.next(), chars.next()) {
            (Some(c), None) if is_cjk_ideograph(c) => c,
            _ => {
                report.skipped_word += 1;
                return;
            }
        };

        let labels = lexicon.entries.entry(character).or_default();
        for (emotion, column) in Emotion::ALL.into_iter().zip(self.emotions) {
            if fields[column] == "1" {
                labels.push(emotion);
                report.label_assignments += 1;
            }
        }
        report.accepted_lines += 1;
    }
}

/// Character to emotion mapping, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<char, Vec<Emotion>>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from explicit entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<Emotion>)>,
    {
        let mut lexicon = Self::new();
        for (character, emotions) in entries {
            lexicon.entries.entry(character).or_default().extend(emotions);
        }
        lexicon
    }

    /// Load a lexicon file, degrading to an empty or partial lexicon on error
    ///
    /// A missing file yields an empty lexicon. A read or decoding error in the
    /// middle of the file keeps the entries read up to that point. Both cases
    /// are logged and never propagated.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!(
                    "Lexicon file not found: {} - every analysis will report no emotions",
                    path.display()
                );
                return Self::new();
            }
            Err(e) => {
                error!("Failed to open lexicon file {}: {}", path.display(), e);
                return Self::new();
            }
        };

        let mut lexicon = Self::new();
        let mut report = LoadReport::default();
        if let Err(e) = read_into(BufReader::new(file), &mut lexicon, &mut report) {
            error!(
                "Error while loading lexicon {}: {} - keeping {} characters read so far",
                path.display(),
                e,
                lexicon.len()
            );
        }

        info!(
            "Loaded emotion lexicon from {}: {} characters, {} labels ({} lines skipped)",
            path.display(),
            lexicon.len(),
            report.label_assignments,
            report.skipped_short + report.skipped_word
        );
        lexicon
    }

    /// Load a lexicon file, propagating every error
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EmolexError::LexiconNotFound(path.to_path_buf())
            } else {
                EmolexError::Io(e)
            }
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse lexicon content from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<(Self, LoadReport)> {
        let mut lexicon = Self::new();
        let mut report = LoadReport::default();
        read_into(reader, &mut lexicon, &mut report)?;
        Ok((lexicon, report))
    }

    /// Emotions triggered by a character, empty when absent
    pub fn emotions_for(&self, character: char) -> &[Emotion] {
        self.entries.get(&character).map_or(&[][..], Vec::as_slice)
    }

    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (character, emotion) pairs
    pub fn label_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of characters carrying each emotion at least once
    pub fn characters_per_emotion(&self) -> BTreeMap<Emotion, usize> {
        let mut counts = BTreeMap::new();
        for labels in self.entries.values() {
            for emotion in Emotion::ALL {
                if labels.contains(&emotion) {
                    *counts.entry(emotion).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

fn read_into<R: BufRead>(reader: R, lexicon: &mut Lexicon, report: &mut LoadReport) -> Result<()> {
    let mut lines = reader.lines();
    let layout = match lines.next() {
        Some(header) => ColumnLayout::from_header(&header?),
        None => {
            warn!("Lexicon content is empty");
            return Ok(());
        }
    };
    debug!("Lexicon column layout: {:?}", layout);
    report.layout = Some(layout.source);

    for line in lines {
        let line = line?;
        report.data_lines += 1;
        layout.apply(&line, lexicon, report);
    }

    Ok(())
}
