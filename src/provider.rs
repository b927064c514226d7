/// Raw interface to a dialog provider, one method per native entry point.
///
/// Arguments are either null or NUL-terminated UTF-16. The returned pointer
/// is either null (no selection) or points at a NUL-terminated UTF-16 buffer
/// owned by the provider. The native library hands out pointers into static
/// storage, so a later call may overwrite an earlier result; callers copy
/// the buffer out before touching the provider again.
///
/// # Safety
///
/// Implementations must return null or a pointer that stays readable and
/// NUL-terminated until the next call on the same provider —
/// [`DialogBridge`](crate::DialogBridge) dereferences it.
pub unsafe trait DialogProvider {
    /// Show the single-file selection dialog.
    unsafe fn open_file(&self, initial_dir: *const u16) -> *const u16;

    /// Show the single-file selection dialog constrained by `filter`.
    unsafe fn open_file_filtered(&self, filter: *const u16, initial_dir: *const u16)
        -> *const u16;

    /// Show the folder selection dialog.
    unsafe fn open_folder(&self, initial_dir: *const u16) -> *const u16;
}

unsafe impl<P: DialogProvider + ?Sized> DialogProvider for &P {
    unsafe fn open_file(&self, initial_dir: *const u16) -> *const u16 {
        (**self).open_file(initial_dir)
    }

    unsafe fn open_file_filtered(&self, filter: *const u16, initial_dir: *const u16)
        -> *const u16 {
        (**self).open_file_filtered(filter, initial_dir)
    }

    unsafe fn open_folder(&self, initial_dir: *const u16) -> *const u16 {
        (**self).open_folder(initial_dir)
    }
}
