//! Library error codes and adapter errors

use std::fmt;
use std::os::raw::{c_char, c_int};

use thiserror::Error;

/// Result type alias using [`AdapterError`]
pub type Result<T> = std::result::Result<T, AdapterError>;

/// `lxw_error` as returned by the library and by every adapter.
///
/// The adapter never invents codes of its own; its pre-call checks map onto
/// [`LxwError::NULL_PARAMETER_IGNORED`] and [`LxwError::MEMORY_MALLOC_FAILED`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LxwError(pub c_int);

impl LxwError {
    pub const NO_ERROR: Self = Self(0);
    pub const MEMORY_MALLOC_FAILED: Self = Self(1);
    pub const CREATING_XLSX_FILE: Self = Self(2);
    pub const CREATING_TMPFILE: Self = Self(3);
    pub const READING_TMPFILE: Self = Self(4);
    pub const ZIP_FILE_OPERATION: Self = Self(5);
    pub const ZIP_PARAMETER_ERROR: Self = Self(6);
    pub const ZIP_BAD_ZIP_FILE: Self = Self(7);
    pub const ZIP_INTERNAL_ERROR: Self = Self(8);
    pub const ZIP_FILE_ADD: Self = Self(9);
    pub const ZIP_CLOSE: Self = Self(10);
    pub const FEATURE_NOT_SUPPORTED: Self = Self(11);
    pub const NULL_PARAMETER_IGNORED: Self = Self(12);
    pub const PARAMETER_VALIDATION: Self = Self(13);
    pub const PARAMETER_IS_EMPTY: Self = Self(14);
    pub const SHEETNAME_LENGTH_EXCEEDED: Self = Self(15);
    pub const INVALID_SHEETNAME_CHARACTER: Self = Self(16);
    pub const SHEETNAME_START_END_APOSTROPHE: Self = Self(17);
    pub const SHEETNAME_ALREADY_USED: Self = Self(18);
    pub const STRING_LENGTH_EXCEEDED_32: Self = Self(19);
    pub const STRING_LENGTH_EXCEEDED_128: Self = Self(20);
    pub const STRING_LENGTH_EXCEEDED_255: Self = Self(21);
    pub const MAX_STRING_LENGTH_EXCEEDED: Self = Self(22);
    pub const SHARED_STRING_INDEX_NOT_FOUND: Self = Self(23);
    pub const WORKSHEET_INDEX_OUT_OF_RANGE: Self = Self(24);
    pub const WORKSHEET_MAX_URL_LENGTH_EXCEEDED: Self = Self(25);
    pub const WORKSHEET_MAX_NUMBER_URLS_EXCEEDED: Self = Self(26);
    pub const IMAGE_DIMENSIONS: Self = Self(27);

    /// Raw numeric code
    pub fn code(self) -> c_int {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self == Self::NO_ERROR
    }

    /// Human readable message, NUL-terminated for direct export
    fn message(self) -> &'static [u8] {
        match self.0 {
            0 => b"No error.\0",
            1 => b"Memory error, failed to allocate memory.\0",
            2 => b"Error creating output xlsx file. Usually a permissions error.\0",
            3 => b"Error encountered when creating a tmpfile during file assembly.\0",
            4 => b"Error reading a tmpfile.\0",
            5 => b"Zip generic error ZIP_ERRNO while creating the xlsx file.\0",
            6 => b"Zip error ZIP_PARAMERROR while creating the xlsx file.\0",
            7 => b"Zip error ZIP_BADZIPFILE (use_zip64 option may be required).\0",
            8 => b"Zip error ZIP_INTERNALERROR while creating the xlsx file.\0",
            9 => b"Zip error adding file to xlsx file.\0",
            10 => b"Zip error closing xlsx file.\0",
            11 => b"Feature is not currently supported in this configuration.\0",
            12 => b"NULL function parameter ignored.\0",
            13 => b"Function parameter validation error.\0",
            14 => b"Function string parameter is empty.\0",
            15 => b"Worksheet name exceeds Excel's limit of 31 characters.\0",
            16 => b"Worksheet name cannot contain invalid characters: '[ ] : * ? / \\'\0",
            17 => b"Worksheet name cannot start or end with an apostrophe.\0",
            18 => b"Worksheet name is already in use.\0",
            19 => b"Parameter exceeds Excel's limit of 32 characters.\0",
            20 => b"Parameter exceeds Excel's limit of 128 characters.\0",
            21 => b"Parameter exceeds Excel's limit of 255 characters.\0",
            22 => b"String exceeds Excel's limit of 32,767 characters.\0",
            23 => b"Error finding internal string index.\0",
            24 => b"Worksheet index out of range.\0",
            25 => b"Maximum hyperlink length (2079) exceeded.\0",
            26 => b"Maximum number of worksheet URLs (65530) exceeded.\0",
            27 => b"Couldn't read image dimensions or DPI.\0",
            _ => b"Unknown error number.\0",
        }
    }

    /// Human readable message
    pub fn description(self) -> &'static str {
        let msg = self.message();
        // Table entries are ASCII
        std::str::from_utf8(&msg[..msg.len() - 1]).unwrap_or("Unknown error number.")
    }
}

impl fmt::Debug for LxwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LxwError({}: {})", self.0, self.description())
    }
}

impl fmt::Display for LxwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Get the message for a library error code
#[no_mangle]
pub extern "C" fn lxw_lv_strerror(code: c_int) -> *const c_char {
    LxwError(code).message().as_ptr() as *const c_char
}

/// Legacy text that could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Malformed {encoding} sequence at byte {offset}")]
    Malformed { encoding: &'static str, offset: usize },

    #[error("Failed to allocate {0} bytes for converted text")]
    AllocationFailed(usize),

    #[error("Unsupported code page: {0}")]
    UnsupportedCodepage(u16),
}

/// Failures detected by the adapters before the library is called
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("Null or empty parameter ignored")]
    NullParameterIgnored,

    #[error("Failed to allocate intermediate buffer")]
    AllocationFailed,

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl AdapterError {
    /// Library code reported to the caller
    pub fn code(&self) -> LxwError {
        match self {
            AdapterError::NullParameterIgnored => LxwError::NULL_PARAMETER_IGNORED,
            AdapterError::AllocationFailed => LxwError::MEMORY_MALLOC_FAILED,
            AdapterError::Encoding(_) => LxwError::PARAMETER_VALIDATION,
        }
    }
}

impl From<AdapterError> for LxwError {
    fn from(err: AdapterError) -> Self {
        err.code()
    }
}

/// Value an exported wrapper returns when the library call is skipped
pub(crate) trait Rejected {
    fn rejected() -> Self;
}

impl Rejected for LxwError {
    fn rejected() -> Self {
        LxwError::PARAMETER_VALIDATION
    }
}

impl Rejected for () {
    fn rejected() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_strerror_is_nul_terminated() {
        for code in -1..30 {
            let msg = unsafe { CStr::from_ptr(lxw_lv_strerror(code)) };
            assert!(!msg.to_bytes().is_empty());
        }
        let msg = unsafe { CStr::from_ptr(lxw_lv_strerror(12)) };
        assert_eq!(msg.to_str().unwrap(), "NULL function parameter ignored.");
    }

    #[test]
    fn test_adapter_codes() {
        assert_eq!(AdapterError::NullParameterIgnored.code().code(), 12);
        assert_eq!(AdapterError::AllocationFailed.code().code(), 1);
        let err = AdapterError::from(EncodingError::AllocationFailed(8));
        assert_eq!(LxwError::from(err), LxwError::PARAMETER_VALIDATION);
    }

    #[test]
    fn test_description() {
        assert_eq!(LxwError::NO_ERROR.description(), "No error.");
        assert_eq!(LxwError(99).description(), "Unknown error number.");
        assert!(LxwError::NO_ERROR.is_ok());
    }
}
