use crate::error::DialogError;
use crate::marshal::{from_wide_ptr, opt_to_wide, to_wide, wide_arg};
use crate::native::{self, NativeProvider};
use crate::provider::DialogProvider;

/// Stateless façade over a [`DialogProvider`].
///
/// Each operation shows a modal dialog and blocks the calling thread until
/// the user confirms or cancels. A cancelled dialog comes back as
/// `Ok(None)`; a selected path comes back as an owned copy, never a borrow
/// of provider memory.
pub struct DialogBridge<P> {
    provider: P,
}

impl DialogBridge<&'static NativeProvider> {
    /// Bridge over the process-wide native library, loading it on first use.
    pub fn native() -> Result<Self, DialogError> {
        Ok(Self::new(native::shared()?))
    }
}

impl<P: DialogProvider> DialogBridge<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Show a single-file selection dialog rooted at `initial_dir`.
    ///
    /// With `initial_dir` absent the provider picks its own starting
    /// location.
    pub fn open_file(&self, initial_dir: Option<&str>) -> Result<Option<String>, DialogError> {
        tracing::debug!(?initial_dir, "open file dialog");
        let dir = opt_to_wide(initial_dir);
        let ptr = unsafe { self.provider.open_file(wide_arg(dir.as_deref())) };
        finish("open_file", ptr)
    }

    /// Like [`DialogBridge::open_file`], constrained to files matching
    /// `filter`.
    ///
    /// The filter uses the provider's grammar (NUL-separated name/pattern
    /// pairs, see [`build_filter`](crate::filter::build_filter)) and is
    /// forwarded as given; an empty filter is passed through, not rejected.
    pub fn open_file_filtered(
        &self,
        filter: &str,
        initial_dir: Option<&str>,
    ) -> Result<Option<String>, DialogError> {
        tracing::debug!(filter, ?initial_dir, "open filtered file dialog");
        let filter = to_wide(filter);
        let dir = opt_to_wide(initial_dir);
        let ptr = unsafe {
            self.provider
                .open_file_filtered(filter.as_ptr(), wide_arg(dir.as_deref()))
        };
        finish("open_file_filtered", ptr)
    }

    /// Show a folder selection dialog rooted at `initial_dir`.
    pub fn open_folder(&self, initial_dir: Option<&str>) -> Result<Option<String>, DialogError> {
        tracing::debug!(?initial_dir, "open folder dialog");
        let dir = opt_to_wide(initial_dir);
        let ptr = unsafe { self.provider.open_folder(wide_arg(dir.as_deref())) };
        finish("open_folder", ptr)
    }
}

fn finish(op: &str, ptr: *const u16) -> Result<Option<String>, DialogError> {
    // The provider signals cancel as either a null pointer or an empty
    // string; both collapse to "no selection" so a returned path is always
    // non-empty.
    let selected = unsafe { from_wide_ptr(ptr) }?.filter(|s| !s.is_empty());
    match &selected {
        Some(path) => tracing::debug!(op, path = path.as_str(), "selection made"),
        None => tracing::debug!(op, "dialog cancelled"),
    }
    Ok(selected)
}
