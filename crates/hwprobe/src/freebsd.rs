use std::ffi::CStr;
use std::io;

use crate::types::{IdentifierSource, ReadError, firmware_model};

/// Kernel environment entry the loader fills from SMBIOS.
const PRODUCT_KENV: &CStr = c"smbios.system.product";

/// Hardware identifier reader for FreeBSD, via the SMBIOS product name in
/// the kernel environment.
///
/// `hw.machine` is not used: it names the CPU architecture, not the model.
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
        let mut buf = [0u8; libc::KENV_MVALLEN as usize + 1];

        // SAFETY: the name is NUL-terminated and `buf` is valid for writes of
        // the length passed; the kernel writes at most that many bytes.
        let ret = unsafe {
            libc::kenv(
                libc::KENV_GET,
                PRODUCT_KENV.as_ptr(),
                buf.as_mut_ptr().cast(),
                buf.len() as libc::c_int,
            )
        };
        if ret < 0 {
            let err = io::Error::last_os_error();
            // Machines without SMBIOS (many ARM boards) have no such entry.
            if err.raw_os_error() == Some(libc::ENOENT) {
                return Err(ReadError::Empty {
                    source_name: "kenv",
                });
            }
            return Err(err.into());
        }

        firmware_model(&buf, "kenv")
    }
}
