//! String sysctls for the Apple reader.

use std::ffi::CStr;
use std::io;
use std::ptr;

use tracing::trace;

use crate::types::{ReadError, normalize_bytes};

/// Read a string-valued sysctl such as `hw.machine` or `hw.model`.
///
/// The kernel is asked for the value size first, then the value, so long
/// model strings are never truncated.
pub(crate) fn read_string(name: &'static CStr) -> Result<String, ReadError> {
    let mut size: libc::size_t = 0;

    // SAFETY: a null output buffer asks the kernel only for the value size,
    // which it writes to `size`.
    let ret = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            ptr::null_mut(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if ret != 0 {
        return Err(io::Error::last_os_error().into());
    }

    let mut buf = vec![0u8; size];

    // SAFETY: `buf` is valid for writes of `size` bytes, and the kernel
    // updates `size` to the number of bytes it actually wrote.
    let ret = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            buf.as_mut_ptr().cast(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if ret != 0 {
        return Err(io::Error::last_os_error().into());
    }
    buf.truncate(size);

    trace!(sysctl = ?name, bytes = size, "read sysctl");
    normalize_bytes(&buf, "sysctl")
}
