//! Upload decoding into raw text plus extraction risk tags.
//!
//! Extraction never fails the request: decoder errors become risk tags and
//! an empty text, and scoring carries on.

use std::io::{Cursor, Read};
use std::panic;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::warn;

use crate::models::resume::{DocFormat, RiskTag};

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    pub text: String,
    pub risks: Vec<RiskTag>,
}

impl Extracted {
    fn failed(risk: RiskTag) -> Self {
        Self {
            text: String::new(),
            risks: vec![risk],
        }
    }
}

#[derive(Debug, Error)]
enum ExtractionError {
    #[error("PDF decoding failed: {0}")]
    Pdf(String),

    #[error("DOCX container error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Picks an extractor from the filename extension (case-insensitive).
pub fn extract(bytes: &[u8], filename: &str) -> Extracted {
    let filename = filename.to_lowercase();
    if filename.ends_with(".pdf") {
        from_document(DocFormat::Pdf, extract_pdf_text(bytes))
    } else if filename.ends_with(".docx") {
        from_document(DocFormat::Docx, extract_docx_text(bytes))
    } else {
        extract_plain_text(bytes)
    }
}

fn from_document(format: DocFormat, result: Result<String, ExtractionError>) -> Extracted {
    match result {
        Ok(text) => {
            let risks = if text.trim().is_empty() {
                vec![RiskTag::ExtractionEmpty(format)]
            } else {
                vec![]
            };
            Extracted { text, risks }
        }
        Err(e) => {
            warn!("{format:?} extraction failed: {e}");
            Extracted::failed(RiskTag::ExtractionFailed(format))
        }
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs
    panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Pdf("decoder panicked".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Paragraph text of the document body joined with newlines.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;
    paragraphs_from_document_xml(&xml)
}

fn paragraphs_from_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // text boxes nest whole paragraphs inside a run of the enclosing one
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.extend(open.pop()),
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Event::Empty(e) => match (e.name().as_ref(), open.last_mut()) {
                (b"w:p", _) => paragraphs.push(String::new()),
                (b"w:tab", Some(current)) => current.push('\t'),
                (b"w:br" | b"w:cr", Some(current)) => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                if let Some(current) = open.last_mut() {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Lossy UTF-8 decode; payloads containing NUL bytes are treated as binary.
fn extract_plain_text(bytes: &[u8]) -> Extracted {
    if bytes.contains(&0) {
        return Extracted::failed(RiskTag::UnknownFormat);
    }
    let text = String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "");
    Extracted {
        text,
        risks: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn make_docx(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file(DOCX_BODY_PART, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Experience</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Reduced latency by 35% </w:t></w:r><w:r><w:t>&amp; cost</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Python</w:t><w:tab/><w:t>Docker</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_plain_text_passthrough() {
        let out = extract(b"Experience\nBuilt things", "resume.txt");
        assert_eq!(out.text, "Experience\nBuilt things");
        assert!(out.risks.is_empty());
    }

    #[test]
    fn test_plain_text_drops_invalid_utf8() {
        let out = extract(b"caf\xffe", "resume");
        assert_eq!(out.text, "cafe");
        assert!(out.risks.is_empty());
    }

    #[test]
    fn test_binary_payload_is_unknown_format() {
        let out = extract(b"\x89PNG\r\n\x1a\n\x00\x00", "photo.png");
        assert_eq!(out.text, "");
        assert_eq!(out.risks, vec![RiskTag::UnknownFormat]);
    }

    #[test]
    fn test_corrupt_pdf_is_flagged_not_fatal() {
        let out = extract(b"definitely not a pdf", "Resume.PDF");
        assert_eq!(out.text, "");
        assert_eq!(out.risks, vec![RiskTag::ExtractionFailed(DocFormat::Pdf)]);
    }

    #[test]
    fn test_corrupt_docx_is_flagged_not_fatal() {
        let out = extract(b"not a zip", "resume.docx");
        assert_eq!(out.text, "");
        assert_eq!(out.risks, vec![RiskTag::ExtractionFailed(DocFormat::Docx)]);
    }

    #[test]
    fn test_docx_paragraphs_joined_with_newlines() {
        let out = extract(&make_docx(DOCUMENT_XML), "resume.docx");
        assert!(out.risks.is_empty());
        assert_eq!(
            out.text,
            "Experience\nReduced latency by 35% & cost\n\nPython\tDocker"
        );
    }

    #[test]
    fn test_docx_text_box_keeps_enclosing_paragraph() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>Jane Doe </w:t></w:r><w:r><w:txbxContent><w:p><w:r><w:t>Sidebar</w:t></w:r></w:p></w:txbxContent></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
            <w:p><w:r><w:t>Experience</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let out = extract(&make_docx(xml), "resume.docx");
        assert!(out.risks.is_empty());
        assert_eq!(out.text, "Sidebar\nJane Doe Engineer\nExperience");
    }

    #[test]
    fn test_docx_without_text_is_flagged_empty() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p/></w:body></w:document>"#;
        let out = extract(&make_docx(xml), "resume.docx");
        assert_eq!(out.risks, vec![RiskTag::ExtractionEmpty(DocFormat::Docx)]);
    }

    #[test]
    fn test_docx_missing_body_part_fails() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/styles.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<styles/>").unwrap();
            writer.finish().unwrap();
        }
        let out = extract(&buf.into_inner(), "resume.docx");
        assert_eq!(out.risks, vec![RiskTag::ExtractionFailed(DocFormat::Docx)]);
    }
}
