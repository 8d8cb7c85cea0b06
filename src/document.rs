//! Document text extraction for uploads
//!
//! Plain text files are read verbatim. DOCX files are opened as ZIP archives
//! and the text runs of the body paragraphs in `word/document.xml` are
//! concatenated with no separator, so paragraph boundaries are lost.
//! Paragraphs nested in tables, text boxes or content controls are not part
//! of the body text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use tracing::debug;

use crate::errors::EmolexError;
use crate::Result;

const DOCX_BODY_PART: &str = "word/document.xml";

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Docx,
}

impl DocumentKind {
    /// Detect the format from a filename extension (ASCII case-insensitive)
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        if extension.eq_ignore_ascii_case("txt") {
            Some(Self::PlainText)
        } else if extension.eq_ignore_ascii_case("docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Docx => "docx",
        }
    }
}

/// Reduce an uploaded filename to a safe basename
///
/// Directory components are dropped, whitespace becomes `_`, and only ASCII
/// alphanumerics, `.`, `_` and `-` are kept. Leading dots are stripped.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = basename
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}

/// Extract text from a file of the given kind
pub fn extract_text(path: &Path, kind: DocumentKind) -> Result<String> {
    let text = match kind {
        DocumentKind::PlainText => std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                EmolexError::DocumentExtraction(format!(
                    "{} is not valid UTF-8 text",
                    path.display()
                ))
            } else {
                EmolexError::Io(e)
            }
        })?,
        DocumentKind::Docx => extract_docx_text(path)?,
    };

    debug!("Extracted {} bytes of text from {}", text.len(), path.display());
    Ok(text)
}

/// Extract body paragraph text from a DOCX file
pub fn extract_docx_text(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut part = archive.by_name(DOCX_BODY_PART)?;

    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(|e| {
        EmolexError::DocumentExtraction(format!("failed to read {DOCX_BODY_PART}: {e}"))
    })?;

    docx_body_text(&xml)
}

/// Concatenate the run text of the top-level body paragraphs
///
/// Only `<w:t>` nodes on the path `w:body/w:p/w:r/w:t` (or through a
/// `w:hyperlink`) are kept. Tables, text boxes (including their
/// `mc:Fallback` copies), content controls and tracked insertions hold
/// their paragraphs deeper in the tree and are skipped.
pub fn docx_body_text(xml: &str) -> Result<String> {
    let mut reader = XmlReader::from_str(xml);
    let mut buf = Vec::new();
    let mut output = String::new();
    let mut path: Vec<Vec<u8>> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => path.push(e.name().as_ref().to_vec()),
            Event::End(_) => {
                path.pop();
            }
            Event::Text(e) => {
                if is_body_run_text(&path) {
                    output.push_str(&e.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(output)
}

fn is_body_run_text(path: &[Vec<u8>]) -> bool {
    let names: Vec<&[u8]> = path.iter().map(Vec::as_slice).collect();
    matches!(
        names.as_slice(),
        [.., b"w:body", b"w:p", b"w:r", b"w:t"]
            | [.., b"w:body", b"w:p", b"w:hyperlink", b"w:r", b"w:t"]
    )
}
