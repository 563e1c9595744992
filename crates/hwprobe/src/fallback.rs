//! Fallback reader for platforms with no known identifier source.
//!
//! It always reports [`ReadError::Unsupported`], which callers turn into
//! their "unknown" sentinel.

use crate::types::{IdentifierSource, ReadError};

/// Fallback reader that never finds an identifier.
#[derive(Debug, Default, Clone)]
pub struct HostReader;

impl HostReader {
    /// Create a new fallback reader.
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierSource for HostReader {
    fn read_identifier(&self) -> Result<String, ReadError> {
        Err(ReadError::Unsupported)
    }
}
