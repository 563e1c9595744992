use std::ffi::OsString;
use std::io;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::ptr;

use windows_sys::Win32::Foundation::{ERROR_MORE_DATA, ERROR_SUCCESS};
use windows_sys::Win32::System::Registry::{HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ, RegGetValueW};

use crate::types::{IdentifierSource, ReadError, normalize};

const BIOS_KEY: &str = r"HARDWARE\DESCRIPTION\System\BIOS";
const PRODUCT_VALUE: &str = "SystemProductName";

/// Hardware identifier reader for Windows, via the BIOS registry key.
///
/// Yields the firmware product name, e.g. `Surface Laptop 4` or `20XW0026US`.
#[derive(Debug, Default, Clone)]
pub struct HostReader;

impl HostReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }
}

fn wide(s: &str) -> Vec<u16> {
    std::ffi::OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

impl IdentifierSource for HostReader {
    fn read_identifier(&self) -> Result<String, ReadError> {
        let key = wide(BIOS_KEY);
        let value = wide(PRODUCT_VALUE);

        let mut buffer: Vec<u16> = Vec::new();
        let mut size_bytes: u32 = 0;

        loop {
            let data = if buffer.is_empty() {
                ptr::null_mut()
            } else {
                buffer.as_mut_ptr().cast()
            };

            // SAFETY: both names are NUL-terminated, `data` is either null or
            // valid for `size_bytes` bytes, and the registry writes at most that.
            let status = unsafe {
                RegGetValueW(
                    HKEY_LOCAL_MACHINE,
                    key.as_ptr(),
                    value.as_ptr(),
                    RRF_RT_REG_SZ,
                    ptr::null_mut(),
                    data,
                    &mut size_bytes,
                )
            };

            match status {
                ERROR_SUCCESS if !buffer.is_empty() => break,
                ERROR_SUCCESS | ERROR_MORE_DATA if size_bytes == 0 => {
                    return Err(ReadError::Empty {
                        source_name: "registry",
                    });
                }
                // First pass with no buffer only reports the size.
                ERROR_SUCCESS | ERROR_MORE_DATA => {
                    buffer = vec![0u16; (size_bytes as usize).div_ceil(2)];
                }
                err => return Err(io::Error::from_raw_os_error(err as i32).into()),
            }
        }

        let len = (size_bytes as usize / 2).min(buffer.len());
        let wide_value = &buffer[..len];
        let wide_value = match wide_value.iter().position(|&c| c == 0) {
            Some(nul) => &wide_value[..nul],
            None => wide_value,
        };

        let name = OsString::from_wide(wide_value);
        let name = name
            .to_str()
            .ok_or(ReadError::NotUtf8 { source_name: "registry" })?;
        normalize(name, "registry")
    }
}
