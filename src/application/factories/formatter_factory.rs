use crate::adapters::outbound::formatters::{
    CsvReportFormatter, JsonReportFormatter, SummaryFormatter,
};
use crate::ports::outbound::ReportFormatter;

/// Report projection selected for CLI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    Summary,
    Csv,
    Json,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the different report
/// projections. It belongs in the application layer as it orchestrates the
/// selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified projection
    pub fn create(format: FormatterType) -> Box<dyn ReportFormatter> {
        match format {
            FormatterType::Summary => Box::new(SummaryFormatter::new()),
            FormatterType::Csv => Box::new(CsvReportFormatter::new()),
            FormatterType::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified projection
    pub fn progress_message(format: FormatterType) -> &'static str {
        match format {
            FormatterType::Summary => "📝 Rendering audit summary...",
            FormatterType::Csv => "📝 Generating CSV report output...",
            FormatterType::Json => "📝 Generating JSON report output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_formatters() {
        for format in [FormatterType::Summary, FormatterType::Csv, FormatterType::Json] {
            let formatter = FormatterFactory::create(format);
            assert!(std::mem::size_of_val(&formatter) > 0);
        }
    }

    #[test]
    fn test_progress_message_summary() {
        assert_eq!(
            FormatterFactory::progress_message(FormatterType::Summary),
            "📝 Rendering audit summary..."
        );
    }

    #[test]
    fn test_progress_message_csv() {
        assert_eq!(
            FormatterFactory::progress_message(FormatterType::Csv),
            "📝 Generating CSV report output..."
        );
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(FormatterType::Json),
            "📝 Generating JSON report output..."
        );
    }
}
