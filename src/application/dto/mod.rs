/// Internal DTOs for the application layer
mod audit_request;
mod audit_response;

pub use audit_request::AuditRequest;
pub use audit_response::AuditResponse;
