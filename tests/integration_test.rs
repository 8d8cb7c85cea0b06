//! Integration tests for lexicon loading and analysis through the public API

use std::path::Path;

use emolex::analyzer::analyze_detailed;
use emolex::lexicon::LayoutSource;
use emolex::Emotion;
use emolex::Lexicon;
use emolex::Result;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_emolex.txt");

fn fixture_lexicon() -> Lexicon {
    Lexicon::load(FIXTURE)
}

#[test]
fn test_fixture_load_report() -> Result<()> {
    let (lexicon, report) = Lexicon::try_load(FIXTURE)?;

    assert_eq!(report.layout, Some(LayoutSource::Header));
    assert_eq!(report.data_lines, 7);
    assert_eq!(report.accepted_lines, 5);
    assert_eq!(report.skipped_word, 1);
    assert_eq!(report.skipped_short, 1);
    assert_eq!(report.label_assignments, 9);
    assert_eq!(lexicon.len(), 5);
    Ok(())
}

#[test]
fn test_load_and_try_load_agree() -> Result<()> {
    let (strict, _) = Lexicon::try_load(FIXTURE)?;
    assert_eq!(strict, fixture_lexicon());
    Ok(())
}

#[test]
fn test_multi_emotion_character() {
    let lexicon = fixture_lexicon();
    assert_eq!(
        lexicon.emotions_for('望'),
        &[
            Emotion::Anticipation,
            Emotion::Joy,
            Emotion::Surprise,
            Emotion::Trust
        ]
    );
}

#[test]
fn test_sentence_analysis() {
    let lexicon = fixture_lexicon();
    let result = emolex::analyze("我很怒，也很喜悅！", &lexicon);

    assert_eq!(result.get(Emotion::Anger), 1);
    assert_eq!(result.get(Emotion::Joy), 1);
    assert_eq!(result.get(Emotion::Trust), 1);
    assert_eq!(result.len(), 3);
}

#[test]
fn test_multi_character_entries_never_match() {
    let lexicon = fixture_lexicon();
    // 放棄 was skipped at load time and its characters are unknown on their own
    assert!(emolex::analyze("放棄", &lexicon).is_empty());
}

#[test]
fn test_sum_matches_label_occurrences() {
    let lexicon = fixture_lexicon();
    let text = "怕怕，悲喜交加，希望 hope 望";
    let analysis = analyze_detailed(text, &lexicon);

    let expected: usize = text
        .chars()
        .map(|c| lexicon.emotions_for(c).len())
        .sum();
    assert_eq!(analysis.emotions.total(), expected as u64);
    assert!(analysis.emotions.total() <= analysis.characters_analyzed as u64 * 8);
    assert_eq!(analysis.emotions.get(Emotion::Fear), 2);
    assert_eq!(analysis.emotions.get(Emotion::Anticipation), 2);
}

#[test]
fn test_missing_lexicon_degrades_to_empty() {
    let lexicon = Lexicon::load(Path::new("no/such/lexicon.txt"));

    assert!(lexicon.is_empty());
    assert!(emolex::analyze("我很怒，也很喜悅！", &lexicon).is_empty());
}

#[test]
fn test_ascii_input_is_empty() {
    assert!(emolex::analyze("Hello 123!", &fixture_lexicon()).is_empty());
}
