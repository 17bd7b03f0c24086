/// Network adapters for registry access
mod pypi_registry;

pub use pypi_registry::PyPiRegistry;
