use std::string::FromUtf16Error;

/// Faults surfaced by the dialog bridge.
///
/// A cancelled dialog is not a fault; it comes back as `Ok(None)` from the
/// bridge operations.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// The native dialog library could not be loaded, or one of its entry
    /// points could not be resolved.
    #[error("native dialog provider unavailable: {0}")]
    ProviderUnavailable(#[from] libloading::Error),
    /// The provider returned a buffer that is not valid UTF-16.
    #[error("provider returned malformed UTF-16: {0}")]
    Decode(#[from] FromUtf16Error),
}
