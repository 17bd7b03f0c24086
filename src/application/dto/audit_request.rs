/// AuditRequest - Internal request DTO for the audit use case
///
/// The core pipeline never fetches files itself: it is handed the raw
/// uploaded text plus the filename that becomes the report key. Both the
/// CLI and the HTTP layer build this same request.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Original filename of the uploaded requirements file (report key)
    pub report_name: String,
    /// Raw text content of the uploaded file
    pub content: String,
}

impl AuditRequest {
    pub fn new(report_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            report_name: report_name.into(),
            content: content.into(),
        }
    }
}
