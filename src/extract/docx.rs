//! DOCX text extraction.
//!
//! A `.docx` file is a zip archive; the document body lives in
//! `word/document.xml`. Paragraph text is concatenated in document
//! order with a newline after each paragraph. Within a run, `<w:tab/>`
//! renders as a tab and `<w:br/>`/`<w:cr/>` as a newline.

use super::DocumentExtractor;
use crate::error::{MaskError, MaskResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extractor for `.docx` files, parsing the WordprocessingML body
/// directly from the zip archive.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Creates a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn name(&self) -> &'static str {
        "DOCX"
    }

    fn extract(&self, path: &Path) -> MaskResult<String> {
        let file = File::open(path).map_err(|source| MaskError::io(path, source))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|err| MaskError::extraction(path, err))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|err| MaskError::extraction(path, err))?
            .read_to_string(&mut xml)
            .map_err(|err| MaskError::extraction(path, err))?;

        parse_document_xml(&xml).map_err(|err| MaskError::extraction(path, err))
    }
}

/// Walks the WordprocessingML event stream, collecting run text and
/// closing each `<w:p>` with a newline.
fn parse_document_xml(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    let mut run_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = true,
                b"r" => run_depth += 1,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => text.push('\n'),
                _ => {}
            },
            // Tab stops also use a <w:tab> element inside paragraph
            // properties, so breaks only count inside a run.
            Event::Empty(e) if run_depth > 0 => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
