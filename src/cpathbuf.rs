use std::ffi::{c_char, CString, NulError};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// A PathBuf like implementation for use with C APIs that expect a nul-terminated C string. Should
/// convert easily from common Rust path types, and have methods that pass to C.
pub(crate) struct CPathBuf(CString);

impl TryFrom<&Path> for CPathBuf {
    type Error = NulError;

    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        Ok(Self(CString::new(value.as_os_str().as_bytes())?))
    }
}

impl CPathBuf {
    pub(crate) fn as_ptr(&self) -> *const c_char {
        self.0.as_ptr()
    }
}
