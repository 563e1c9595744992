//! Cross-platform hardware identifier reading.
//!
//! This crate provides a single narrow interface, [`IdentifierSource`], for
//! reading the raw model identifier of the machine the code runs on, and a
//! [`HostReader`] implementing it for the compile target.

mod types;
pub use types::{IdentifierSource, ReadError};

// Platform-specific implementations
#[cfg(target_vendor = "apple")]
mod sysctl;

#[cfg(target_vendor = "apple")]
mod apple;

#[cfg(target_os = "freebsd")]
mod freebsd;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(not(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "linux",
    target_os = "android",
    target_os = "windows"
)))]
mod fallback;

// Re-export the appropriate HostReader
#[cfg(target_vendor = "apple")]
pub use apple::HostReader;

#[cfg(target_os = "freebsd")]
pub use freebsd::HostReader;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::HostReader;

#[cfg(target_os = "windows")]
pub use windows::HostReader;

#[cfg(not(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "linux",
    target_os = "android",
    target_os = "windows"
)))]
pub use fallback::HostReader;

/// Convenience function: read the identifier of the running host.
pub fn host_identifier() -> Result<String, ReadError> {
    HostReader::new().read_identifier()
}

/// Returns true if this platform reports device model codes (`iPhone14,2`),
/// as opposed to firmware product names (`OptiPlex 7090`).
pub const fn reports_model_codes() -> bool {
    cfg!(target_vendor = "apple")
}
