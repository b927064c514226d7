use crate::error::DialogError;

/// Encode `s` as UTF-16 with a trailing NUL.
///
/// NULs embedded in `s` are kept: an open-file filter is a NUL-separated
/// list of name/pattern pairs, so the terminator is whichever NUL the
/// provider scans to last.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

pub fn opt_to_wide(s: Option<&str>) -> Option<Vec<u16>> {
    s.map(to_wide)
}

/// Pointer for an optional wide argument: null when the argument is absent.
pub fn wide_arg(buf: Option<&[u16]>) -> *const u16 {
    buf.map_or(std::ptr::null(), |b| b.as_ptr())
}

/// Copy a provider-owned, NUL-terminated UTF-16 buffer into an owned string.
///
/// A null pointer yields `Ok(None)`. The provider keeps ownership of its
/// buffer; the returned string never aliases it.
///
/// # Safety
///
/// `ptr`, when non-null, must point at a readable UTF-16 buffer terminated
/// by a NUL within the same allocation.
pub unsafe fn from_wide_ptr(ptr: *const u16) -> Result<Option<String>, DialogError> {
    if ptr.is_null() {
        return Ok(None);
    }
    let mut len = 0usize;
    while ptr.add(len).read() != 0 {
        len += 1;
    }
    let units = std::slice::from_raw_parts(ptr, len);
    Ok(Some(String::from_utf16(units)?))
}
