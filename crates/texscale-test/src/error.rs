//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a test grid
    #[error("failed to build test grid '{pattern}': {source}")]
    GridBuild {
        pattern: &'static str,
        #[source]
        source: texscale_core::Error,
    },

    /// One or more comparisons failed
    #[error("{test_name}_reg failed {count} comparison(s)")]
    Failed { test_name: String, count: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
