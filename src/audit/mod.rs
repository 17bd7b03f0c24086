/// Audit domain layer - pure business logic for the dependency audit pipeline
pub mod domain;
pub mod services;
