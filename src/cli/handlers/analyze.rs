//! Text and document analysis handlers

use std::io::Read;
use std::path::Path;

use crate::analyzer::analyze_detailed;
use crate::cli::output::*;
use crate::document::extract_text;
use crate::document::DocumentKind;
use crate::EmolexError;
use crate::Lexicon;
use crate::Result;

pub fn handle_analyze_command(
    lexicon: &Lexicon,
    text: Option<String>,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let input = match (text, file) {
        (_, Some(path)) => read_document(path)?,
        (Some(text), None) => text,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let analysis = analyze_detailed(&input, lexicon);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis.emotions)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let kind = DocumentKind::from_filename(&filename)
        .ok_or_else(|| EmolexError::UnsupportedFileType(path.display().to_string()))?;
    extract_text(path, kind)
}
