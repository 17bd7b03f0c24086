/// Use cases orchestrating the audit pipeline
mod run_audit;

pub use run_audit::RunAuditUseCase;
