use std::fmt;

use serde::{Serialize, Serializer};

/// The six fixed resume blocks produced by segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Contact,
    Education,
    Experience,
    Projects,
    Skills,
    Other,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Contact,
        SectionName::Education,
        SectionName::Experience,
        SectionName::Projects,
        SectionName::Skills,
        SectionName::Other,
    ];
}

/// Resume lines grouped by section. Every key is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sections {
    pub contact: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
    pub other: Vec<String>,
}

impl Sections {
    pub fn get(&self, name: SectionName) -> &[String] {
        match name {
            SectionName::Contact => &self.contact,
            SectionName::Education => &self.education,
            SectionName::Experience => &self.experience,
            SectionName::Projects => &self.projects,
            SectionName::Skills => &self.skills,
            SectionName::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, name: SectionName) -> &mut Vec<String> {
        match name {
            SectionName::Contact => &mut self.contact,
            SectionName::Education => &mut self.education,
            SectionName::Experience => &mut self.experience,
            SectionName::Projects => &mut self.projects,
            SectionName::Skills => &mut self.skills,
            SectionName::Other => &mut self.other,
        }
    }

    pub fn total_lines(&self) -> usize {
        SectionName::ALL.iter().map(|s| self.get(*s).len()).sum()
    }
}

/// Upload formats with a dedicated extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Pdf,
    Docx,
}

/// Layout words hinting at a multi-column or tabular document, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnHint {
    Columns,
    TwoColumn,
    Table,
}

impl ColumnHint {
    pub const SCAN_ORDER: [ColumnHint; 3] =
        [ColumnHint::Columns, ColumnHint::TwoColumn, ColumnHint::Table];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnHint::Columns => "columns",
            ColumnHint::TwoColumn => "two-column",
            ColumnHint::Table => "table",
        }
    }
}

/// Extraction or layout quality issue. Serialized as its machine-readable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTag {
    ExtractionEmpty(DocFormat),
    ExtractionFailed(DocFormat),
    /// Reserved for placeholder extractors; penalized like a failed extraction.
    #[allow(dead_code)]
    ExtractorStub(DocFormat),
    UnknownFormat,
    MulticolumnOrTablesSuspected,
    LayoutColumnsHint(ColumnHint),
    HeaderRepetition,
    FooterRepetition,
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTag::ExtractionEmpty(DocFormat::Pdf) => f.write_str("pdf_text_extraction_empty"),
            RiskTag::ExtractionEmpty(DocFormat::Docx) => f.write_str("docx_extraction_empty"),
            RiskTag::ExtractionFailed(DocFormat::Pdf) => f.write_str("pdf_text_extraction_failed"),
            RiskTag::ExtractionFailed(DocFormat::Docx) => f.write_str("docx_extraction_failed"),
            RiskTag::ExtractorStub(DocFormat::Pdf) => f.write_str("pdf_extractor_stub"),
            RiskTag::ExtractorStub(DocFormat::Docx) => f.write_str("docx_extractor_stub"),
            RiskTag::UnknownFormat => f.write_str("unknown_format"),
            RiskTag::MulticolumnOrTablesSuspected => f.write_str("multicolumn_or_tables_suspected"),
            RiskTag::LayoutColumnsHint(hint) => write!(f, "layout_columns_hint:{}", hint.as_str()),
            RiskTag::HeaderRepetition => f.write_str("header_repetition"),
            RiskTag::FooterRepetition => f.write_str("footer_repetition"),
        }
    }
}

impl Serialize for RiskTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Personally identifiable information found in the raw text, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pii {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    /// Always empty unless a real `NameExtractor` is installed.
    pub names: Vec<String>,
}

/// Output of extraction + segmentation, input to scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedResume {
    pub parse_score: f64,
    pub sections: Sections,
    pub ats_view_text: String,
    pub risks: Vec<RiskTag>,
    pub pii: Pii,
}
