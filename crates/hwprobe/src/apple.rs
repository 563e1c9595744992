use std::ffi::CStr;

use crate::sysctl;
use crate::types::{IdentifierSource, ReadError};

/// On macOS `hw.machine` is the CPU architecture; the model code lives in
/// `hw.model`. Everywhere else in the Apple family it is the other way round.
#[cfg(target_os = "macos")]
const MODEL_SYSCTL: &CStr = c"hw.model";
#[cfg(not(target_os = "macos"))]
const MODEL_SYSCTL: &CStr = c"hw.machine";

/// Hardware identifier reader for Apple platforms, via `sysctlbyname`.
///
/// Yields model codes like `iPhone14,2`, `iPad13,4` or `MacBookPro18,3`.
/// Simulators report the host architecture (`x86_64`, `arm64`).
#[derive(Debug, Default, Clone)]
pub struct HostReader;

impl HostReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierSource for HostReader {
    fn read_identifier(&self) -> Result<String, ReadError> {
        sysctl::read_string(MODEL_SYSCTL)
    }
}
