use std::io;

use thiserror::Error;

/// Why the host could not produce a hardware identifier.
#[derive(Debug, Error)]
pub enum ReadError {
    /// No identifier source exists for this platform.
    #[error("no hardware identifier source on this platform")]
    Unsupported,

    /// The source answered, but with nothing usable.
    #[error("{source_name} returned an empty identifier")]
    Empty { source_name: &'static str },

    /// The source answered with bytes that are not UTF-8.
    #[error("{source_name} returned a non UTF-8 identifier")]
    NotUtf8 { source_name: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can produce the raw hardware identifier of a device.
///
/// The host implementation is [`HostReader`](crate::HostReader). Plain strings
/// also implement this, yielding themselves, which makes them convenient
/// stand-ins for the host in tests.
pub trait IdentifierSource {
    /// Read the raw identifier, e.g. `iPhone14,2` or `MacBookPro18,3`.
    fn read_identifier(&self) -> Result<String, ReadError>;
}

impl IdentifierSource for str {
    fn read_identifier(&self) -> Result<String, ReadError> {
        Ok(self.to_owned())
    }
}

impl IdentifierSource for String {
    fn read_identifier(&self) -> Result<String, ReadError> {
        Ok(self.clone())
    }
}

impl<T: IdentifierSource + ?Sized> IdentifierSource for &T {
    fn read_identifier(&self) -> Result<String, ReadError> {
        (**self).read_identifier()
    }
}

/// Clean up a raw value read from the host.
///
/// Strips surrounding whitespace and the trailing NULs that C strings and
/// devicetree properties carry, and rejects what is left if it is blank.
pub(crate) fn normalize(raw: &str, source_name: &'static str) -> Result<String, ReadError> {
    let value = raw.trim_end_matches('\0').trim();
    if value.is_empty() {
        Err(ReadError::Empty { source_name })
    } else {
        Ok(value.to_owned())
    }
}

/// Like [`normalize`], for byte buffers filled by the OS.
#[cfg_attr(
    not(any(
        target_vendor = "apple",
        target_os = "freebsd",
        target_os = "linux",
        target_os = "android"
    )),
    allow(dead_code)
)]
pub(crate) fn normalize_bytes(raw: &[u8], source_name: &'static str) -> Result<String, ReadError> {
    let raw = match raw.iter().position(|&b| b == 0) {
        Some(nul) => &raw[..nul],
        None => raw,
    };
    let raw = std::str::from_utf8(raw).map_err(|_| ReadError::NotUtf8 { source_name })?;
    normalize(raw, source_name)
}

/// Values firmware vendors leave in DMI/SMBIOS when nobody filled it in.
const FIRMWARE_PLACEHOLDERS: &[&str] = &[
    "To Be Filled By O.E.M.",
    "System Product Name",
    "Default string",
    "Not Specified",
];

/// Like [`normalize_bytes`], for firmware product names (DMI, SMBIOS,
/// devicetree). Vendor placeholders count as empty.
#[cfg_attr(
    not(any(target_os = "freebsd", target_os = "linux", target_os = "android")),
    allow(dead_code)
)]
pub(crate) fn firmware_model(raw: &[u8], source_name: &'static str) -> Result<String, ReadError> {
    let value = normalize_bytes(raw, source_name)?;
    if FIRMWARE_PLACEHOLDERS.contains(&value.as_str()) {
        tracing::debug!(%value, source_name, "ignoring placeholder model");
        Err(ReadError::Empty { source_name })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize("  iPhone14,2\n", "test").unwrap(), "iPhone14,2");
        assert_eq!(normalize("Pi 4\0\0", "test").unwrap(), "Pi 4");
    }

    #[test]
    fn normalize_rejects_blank() {
        assert!(matches!(
            normalize(" \n\0", "test"),
            Err(ReadError::Empty { source_name: "test" })
        ));
        assert!(matches!(normalize("", "test"), Err(ReadError::Empty { .. })));
    }

    #[test]
    fn normalize_bytes_stops_at_nul() {
        let buf = b"iPad13,4\0garbage after the terminator";
        assert_eq!(normalize_bytes(buf, "test").unwrap(), "iPad13,4");
    }

    #[test]
    fn normalize_bytes_rejects_bad_utf8() {
        assert!(matches!(
            normalize_bytes(&[0xff, 0xfe, 0x00], "test"),
            Err(ReadError::NotUtf8 { .. })
        ));
    }

    #[test]
    fn firmware_model_rejects_placeholders() {
        assert_eq!(
            firmware_model(b"OptiPlex 7090\n", "smbios").unwrap(),
            "OptiPlex 7090"
        );
        for raw in [&b"To Be Filled By O.E.M.\0"[..], b"Default string", b"  \n"] {
            assert!(matches!(
                firmware_model(raw, "smbios"),
                Err(ReadError::Empty {
                    source_name: "smbios"
                })
            ));
        }
    }

    #[test]
    fn strings_are_sources() {
        assert_eq!("AppleTV6,2".read_identifier().unwrap(), "AppleTV6,2");
        let owned = String::from("Watch7,5");
        assert_eq!(owned.read_identifier().unwrap(), "Watch7,5");
        assert_eq!((&owned).read_identifier().unwrap(), "Watch7,5");
    }
}
