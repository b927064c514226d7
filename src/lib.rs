//! Thin bridge to the `WindowsFileDialog.dll` native file/folder pickers.
//!
//! [`DialogBridge`] forwards open-file, filtered open-file and open-folder
//! requests to the native library and copies the returned UTF-16 buffer into
//! an owned `String`. Tests swap in synthetic [`DialogProvider`]s.

pub mod bridge;
pub mod error;
pub mod filter;
pub mod logging;
pub mod marshal;
pub mod native;
pub mod provider;

pub use bridge::DialogBridge;
pub use error::DialogError;
pub use native::NativeProvider;
pub use provider::DialogProvider;
