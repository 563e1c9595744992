//! Machine identification functionality.
//!
//! The two queries here never fail: a host that cannot be identified reads
//! as [`UNKNOWN_IDENTIFIER`], and an identifier missing from the table gets
//! the `Unknown device (<raw>)` fallback label.

use std::fmt;
use std::sync::OnceLock;

use hwprobe::{HostReader, IdentifierSource, reports_model_codes};
use serde::Serialize;
use tracing::{debug, warn};

use crate::translate::translate;

/// Sentinel returned when the host does not provide an identifier.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

static HOST_IDENTIFIER: OnceLock<String> = OnceLock::new();

/// What sort of value this host's raw identifier is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// A vendor model code such as `iPhone14,2`.
    ModelCode,
    /// A firmware product name such as `OptiPlex 7090`.
    FirmwareProductName,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdentifierKind::ModelCode => "model code",
            IdentifierKind::FirmwareProductName => "firmware product name",
        })
    }
}

/// The kind of identifier [`raw_identifier`] reports on this platform.
pub const fn identifier_kind() -> IdentifierKind {
    if reports_model_codes() {
        IdentifierKind::ModelCode
    } else {
        IdentifierKind::FirmwareProductName
    }
}

/// Get the raw hardware identifier of this machine, e.g. `iPhone14,2`.
///
/// Read from the host once per process; later calls return the cached value.
pub fn raw_identifier() -> &'static str {
    HOST_IDENTIFIER.get_or_init(|| raw_identifier_from(&HostReader::new()))
}

/// Get the raw identifier from an arbitrary source, without caching.
///
/// Errors and empty values become [`UNKNOWN_IDENTIFIER`].
pub fn raw_identifier_from<S: IdentifierSource + ?Sized>(source: &S) -> String {
    match source.read_identifier() {
        Ok(id) if !id.is_empty() => {
            debug!(%id, "read hardware identifier");
            id
        }
        Ok(_) => {
            warn!("hardware identifier source returned nothing");
            UNKNOWN_IDENTIFIER.to_owned()
        }
        Err(err) => {
            warn!(%err, "could not read hardware identifier");
            UNKNOWN_IDENTIFIER.to_owned()
        }
    }
}

/// Get the human-readable name of this machine, e.g. `iPhone 13 Pro`.
pub fn platform_label() -> String {
    translate(raw_identifier())
}

/// Get the human-readable name for the identifier an arbitrary source reports.
pub fn platform_label_from<S: IdentifierSource + ?Sized>(source: &S) -> String {
    translate(&raw_identifier_from(source))
}

#[cfg(test)]
mod tests {
    use hwprobe::ReadError;

    use super::*;

    struct Unavailable;

    impl IdentifierSource for Unavailable {
        fn read_identifier(&self) -> Result<String, ReadError> {
            Err(ReadError::Unsupported)
        }
    }

    #[test]
    fn test_raw_identifier_is_never_empty() {
        let id = raw_identifier();
        assert!(!id.is_empty());
    }

    #[test]
    fn test_raw_identifier_is_cached() {
        let a = raw_identifier();
        let b = raw_identifier();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_raw_identifier_matches_host() {
        let expected = hwprobe::host_identifier()
            .ok()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_owned());
        assert_eq!(raw_identifier(), expected);
    }

    #[test]
    fn test_identifier_kind_follows_platform() {
        let expected = if cfg!(target_vendor = "apple") {
            IdentifierKind::ModelCode
        } else {
            IdentifierKind::FirmwareProductName
        };
        assert_eq!(identifier_kind(), expected);
        assert_eq!(IdentifierKind::ModelCode.to_string(), "model code");
        assert_eq!(
            IdentifierKind::FirmwareProductName.to_string(),
            "firmware product name"
        );
    }

    #[test]
    fn test_failure_yields_sentinel() {
        assert_eq!(raw_identifier_from(&Unavailable), UNKNOWN_IDENTIFIER);
        assert_eq!(raw_identifier_from(""), UNKNOWN_IDENTIFIER);
    }

    #[test]
    fn test_platform_label_composes() {
        assert_eq!(platform_label(), translate(raw_identifier()));
        assert_eq!(platform_label_from("iPhone14,2"), "iPhone 13 Pro");
        assert_eq!(
            platform_label_from(&Unavailable),
            "Unknown device (unknown)"
        );
    }
}
