use crate::models::resume::RiskTag;

pub const MAX_FORMAT_RISK: f64 = 10.0;

/// Points deducted for a single risk tag.
pub fn risk_penalty(risk: &RiskTag) -> f64 {
    match risk {
        RiskTag::LayoutColumnsHint(_) | RiskTag::MulticolumnOrTablesSuspected => 4.0,
        RiskTag::HeaderRepetition | RiskTag::FooterRepetition => 2.0,
        RiskTag::ExtractorStub(_) | RiskTag::ExtractionFailed(_) => 5.0,
        RiskTag::ExtractionEmpty(_) | RiskTag::UnknownFormat => 0.0,
    }
}

/// Starts at 10 and deducts per tag in discovery order, floored at zero.
pub fn format_risk_score(risks: &[RiskTag]) -> f64 {
    let penalty: f64 = risks.iter().map(risk_penalty).sum();
    (MAX_FORMAT_RISK - penalty).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ColumnHint, DocFormat};

    #[test]
    fn test_no_risks_full_score() {
        assert_eq!(format_risk_score(&[]), 10.0);
    }

    #[test]
    fn test_multicolumn_penalty() {
        assert_eq!(format_risk_score(&[RiskTag::MulticolumnOrTablesSuspected]), 6.0);
        assert_eq!(
            format_risk_score(&[RiskTag::LayoutColumnsHint(ColumnHint::Table)]),
            6.0
        );
    }

    #[test]
    fn test_repetition_penalties_stack() {
        assert_eq!(
            format_risk_score(&[RiskTag::HeaderRepetition, RiskTag::FooterRepetition]),
            6.0
        );
    }

    #[test]
    fn test_extraction_failures_and_stubs() {
        assert_eq!(format_risk_score(&[RiskTag::ExtractionFailed(DocFormat::Pdf)]), 5.0);
        assert_eq!(format_risk_score(&[RiskTag::ExtractorStub(DocFormat::Docx)]), 5.0);
    }

    #[test]
    fn test_empty_extraction_and_unknown_format_are_free() {
        let risks = [
            RiskTag::ExtractionEmpty(DocFormat::Pdf),
            RiskTag::ExtractionEmpty(DocFormat::Docx),
            RiskTag::UnknownFormat,
        ];
        assert_eq!(format_risk_score(&risks), 10.0);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let risks = [
            RiskTag::ExtractionFailed(DocFormat::Docx),
            RiskTag::MulticolumnOrTablesSuspected,
            RiskTag::LayoutColumnsHint(ColumnHint::Columns),
            RiskTag::HeaderRepetition,
        ];
        assert_eq!(format_risk_score(&risks), 0.0);
    }
}
