use libloading::Library;
use once_cell::sync::OnceCell;

use crate::error::DialogError;
use crate::provider::DialogProvider;

/// Default library name, resolved through the platform loader's search path.
pub const DEFAULT_LIBRARY: &str = "WindowsFileDialog.dll";

/// Environment variable that overrides the library path for [`NativeProvider::load`].
pub const LIBRARY_ENV: &str = "DIALOG_BRIDGE_DLL";

type OpenFileFn = unsafe extern "system" fn(*const u16) -> *const u16;
type OpenFilteredFn = unsafe extern "system" fn(*const u16, *const u16) -> *const u16;
type OpenFolderFn = unsafe extern "system" fn(*const u16) -> *const u16;

/// [`DialogProvider`] backed by the native dialog library.
///
/// All three entry points are resolved up front, so a missing library or a
/// missing export surfaces as [`DialogError::ProviderUnavailable`] at load
/// time rather than mid-call.
#[derive(Debug)]
pub struct NativeProvider {
    open_file: OpenFileFn,
    open_file_filtered: OpenFilteredFn,
    open_folder: OpenFolderFn,
    // keeps the function pointers above valid
    _lib: Library,
}

impl NativeProvider {
    /// Load the default library, honouring the [`LIBRARY_ENV`] override.
    pub fn load() -> Result<Self, DialogError> {
        match std::env::var(LIBRARY_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from(path),
            _ => Self::load_from(DEFAULT_LIBRARY),
        }
    }

    /// Load the dialog library from an explicit path.
    pub fn load_from(path: impl AsRef<std::ffi::OsStr>) -> Result<Self, DialogError> {
        let path = path.as_ref();
        let lib = unsafe { Library::new(path) }?;
        let open_file = unsafe { *lib.get::<OpenFileFn>(b"OpenWindowsFile\0")? };
        let open_file_filtered = unsafe { *lib.get::<OpenFilteredFn>(b"OpenFileWithExtension\0")? };
        let open_folder = unsafe { *lib.get::<OpenFolderFn>(b"OpenFolderDialog\0")? };
        tracing::debug!(path = %path.to_string_lossy(), "dialog library loaded");
        Ok(Self {
            open_file,
            open_file_filtered,
            open_folder,
            _lib: lib,
        })
    }
}

unsafe impl DialogProvider for NativeProvider {
    unsafe fn open_file(&self, initial_dir: *const u16) -> *const u16 {
        (self.open_file)(initial_dir)
    }

    unsafe fn open_file_filtered(&self, filter: *const u16, initial_dir: *const u16)
        -> *const u16 {
        (self.open_file_filtered)(filter, initial_dir)
    }

    unsafe fn open_folder(&self, initial_dir: *const u16) -> *const u16 {
        (self.open_folder)(initial_dir)
    }
}

static SHARED: OnceCell<NativeProvider> = OnceCell::new();

/// Process-wide provider, loaded on first use and kept for the life of the
/// process. A failed load is not cached; the next call retries.
pub fn shared() -> Result<&'static NativeProvider, DialogError> {
    SHARED.get_or_try_init(NativeProvider::load)
}
