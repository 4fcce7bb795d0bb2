// Main library file for the movie booking service

// Export modules
pub mod analyzer;
pub mod registry;

// Re-export key types for convenience
pub use analyzer::{AnalyzerError, EagerAnalyzer, FileAnalyzer, FileSummary, StreamingAnalyzer};
pub use registry::{BookingError, BookingRegistry, RegistryStats};
