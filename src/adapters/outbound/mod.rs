/// Outbound adapters for network, filesystem, formatting and console I/O
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
