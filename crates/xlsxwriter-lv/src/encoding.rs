//! Legacy 8-bit text to UTF-8 conversion
//!
//! The library only understands UTF-8. Callers hand us NUL-terminated text
//! in a Windows code page; [`Converter`] produces a call-scoped UTF-8 copy
//! as a [`Utf8Arg`], whose pointer stays valid until the value is dropped.
//!
//! Pure ASCII input is byte-identical in every supported code page and is
//! forwarded without allocating.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use encoding_rs::{
    DecoderResult, Encoding, BIG5, EUC_KR, GBK, SHIFT_JIS, UTF_8, WINDOWS_1250, WINDOWS_1251,
    WINDOWS_1252, WINDOWS_1253, WINDOWS_1254, WINDOWS_1255, WINDOWS_1256, WINDOWS_1257,
    WINDOWS_1258, WINDOWS_874,
};

use crate::config::{AdapterConfig, ConversionMode, DEFAULT_CODEPAGE};
use crate::error::EncodingError;

/// Map a Windows code page number to its encoding
pub fn encoding_for_codepage(codepage: u16) -> Option<&'static Encoding> {
    Some(match codepage {
        874 => WINDOWS_874,
        932 => SHIFT_JIS,
        936 => GBK,
        949 => EUC_KR,
        950 => BIG5,
        1250 => WINDOWS_1250,
        1251 => WINDOWS_1251,
        1252 => WINDOWS_1252,
        1253 => WINDOWS_1253,
        1254 => WINDOWS_1254,
        1255 => WINDOWS_1255,
        1256 => WINDOWS_1256,
        1257 => WINDOWS_1257,
        1258 => WINDOWS_1258,
        65001 => UTF_8,
        _ => return None,
    })
}

/// A text argument ready to hand to the library
#[derive(Debug)]
pub enum Utf8Arg<'a> {
    /// Forward a null pointer
    Null,
    /// Forward the caller's bytes unchanged
    Borrowed(&'a CStr),
    /// Forward a converted copy, freed on drop
    Owned(CString),
}

impl Utf8Arg<'_> {
    /// Pointer to pass to the library; valid while `self` is alive
    pub fn as_ptr(&self) -> *const c_char {
        match self {
            Utf8Arg::Null => ptr::null(),
            Utf8Arg::Borrowed(s) => s.as_ptr(),
            Utf8Arg::Owned(s) => s.as_ptr(),
        }
    }

    /// Bytes that will be forwarded, without the terminator
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Utf8Arg::Null => None,
            Utf8Arg::Borrowed(s) => Some(s.to_bytes()),
            Utf8Arg::Owned(s) => Some(s.as_bytes()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Utf8Arg::Null)
    }

    /// Whether a converted copy was allocated
    pub fn is_converted(&self) -> bool {
        matches!(self, Utf8Arg::Owned(_))
    }
}

/// Converts legacy text using one code page and one failure policy
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    encoding: &'static Encoding,
    mode: ConversionMode,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&AdapterConfig::default())
    }
}

impl Converter {
    /// Build a converter from the adapter configuration.
    ///
    /// An unsupported code page falls back to the default one.
    pub fn new(config: &AdapterConfig) -> Self {
        let encoding = encoding_for_codepage(config.codepage).unwrap_or_else(|| {
            log::warn!(
                "Unsupported code page {}, using {DEFAULT_CODEPAGE}",
                config.codepage
            );
            WINDOWS_1252
        });
        Self {
            encoding,
            mode: config.mode,
        }
    }

    pub fn for_codepage(codepage: u16, mode: ConversionMode) -> Result<Self, EncodingError> {
        let encoding =
            encoding_for_codepage(codepage).ok_or(EncodingError::UnsupportedCodepage(codepage))?;
        Ok(Self { encoding, mode })
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Decode legacy bytes to a UTF-8 string, failing on malformed input
    pub fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let utf8 = self.decode_to_vec(bytes, 0)?;
        String::from_utf8(utf8).map_err(|e| EncodingError::Malformed {
            encoding: self.encoding.name(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    /// Convert a possibly-null caller string.
    ///
    /// # Safety
    ///
    /// `text` must be null or point to a NUL-terminated string that outlives
    /// the returned value.
    pub unsafe fn convert<'a>(&self, text: *const c_char) -> Result<Utf8Arg<'a>, EncodingError> {
        if text.is_null() {
            return Ok(Utf8Arg::Null);
        }
        self.convert_cstr(CStr::from_ptr(text))
    }

    /// Like [`Converter::convert`], but an empty string is also forwarded as
    /// null so the library picks its default sheet name.
    ///
    /// # Safety
    ///
    /// Same contract as [`Converter::convert`].
    pub unsafe fn convert_sheet_name<'a>(
        &self,
        text: *const c_char,
    ) -> Result<Utf8Arg<'a>, EncodingError> {
        if text.is_null() || *text == 0 {
            return Ok(Utf8Arg::Null);
        }
        self.convert(text)
    }

    /// Convert a caller string that is known to be non-null
    pub fn convert_cstr<'a>(&self, text: &'a CStr) -> Result<Utf8Arg<'a>, EncodingError> {
        let bytes = text.to_bytes();
        if bytes.is_empty() || self.is_passthrough(bytes) {
            return Ok(Utf8Arg::Borrowed(text));
        }

        match self.decode_to_vec(bytes, 1) {
            Ok(mut utf8) => {
                utf8.push(0);
                match CString::from_vec_with_nul(utf8) {
                    Ok(converted) => Ok(Utf8Arg::Owned(converted)),
                    // Decoders never produce U+0000 from non-zero input
                    Err(_) => self.fall_back(text, EncodingError::Malformed {
                        encoding: self.encoding.name(),
                        offset: 0,
                    }),
                }
            }
            Err(err) => self.fall_back(text, err),
        }
    }

    fn is_passthrough(&self, bytes: &[u8]) -> bool {
        if self.encoding == UTF_8 {
            return Encoding::utf8_valid_up_to(bytes) == bytes.len();
        }
        self.encoding.is_ascii_compatible() && Encoding::ascii_valid_up_to(bytes) == bytes.len()
    }

    fn fall_back<'a>(
        &self,
        text: &'a CStr,
        err: EncodingError,
    ) -> Result<Utf8Arg<'a>, EncodingError> {
        match self.mode {
            ConversionMode::Lenient => {
                log::debug!("{err}; forwarding original bytes");
                Ok(Utf8Arg::Borrowed(text))
            }
            ConversionMode::Strict => Err(err),
        }
    }

    fn decode_to_vec(&self, bytes: &[u8], extra: usize) -> Result<Vec<u8>, EncodingError> {
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .and_then(|n| n.checked_add(extra))
            .ok_or(EncodingError::AllocationFailed(usize::MAX))?;

        let mut utf8 = Vec::new();
        utf8.try_reserve_exact(capacity)
            .map_err(|_| EncodingError::AllocationFailed(capacity))?;
        utf8.resize(capacity - extra, 0);

        let (result, read, written) =
            decoder.decode_to_utf8_without_replacement(bytes, &mut utf8, true);
        match result {
            DecoderResult::InputEmpty => {
                utf8.truncate(written);
                Ok(utf8)
            }
            DecoderResult::Malformed(_, _) | DecoderResult::OutputFull => {
                Err(EncodingError::Malformed {
                    encoding: self.encoding.name(),
                    offset: read,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strict(codepage: u16) -> Converter {
        Converter::for_codepage(codepage, ConversionMode::Strict).unwrap()
    }

    #[test]
    fn test_null_and_empty() {
        let conv = Converter::default();
        let arg = unsafe { conv.convert(ptr::null()) }.unwrap();
        assert!(arg.is_null());
        assert!(arg.as_ptr().is_null());

        let empty = CString::new("").unwrap();
        let arg = unsafe { conv.convert(empty.as_ptr()) }.unwrap();
        assert_eq!(arg.as_ptr(), empty.as_ptr());
        assert!(!arg.is_converted());
    }

    #[test]
    fn test_ascii_is_not_copied() {
        let text = CString::new("Sales 2024").unwrap();
        let arg = Converter::default().convert_cstr(&text).unwrap();
        assert_eq!(arg.as_ptr(), text.as_ptr());
    }

    #[test]
    fn test_windows_1252_conversion() {
        // "Café €5"
        let text = CString::new(b"Caf\xe9 \x805".to_vec()).unwrap();
        let arg = Converter::default().convert_cstr(&text).unwrap();
        assert!(arg.is_converted());
        assert_eq!(arg.as_bytes().unwrap(), "Café €5".as_bytes());
    }

    #[test]
    fn test_shift_jis_conversion() {
        let text = CString::new(b"\x93\xfa\x96\x7b".to_vec()).unwrap();
        let arg = strict(932).convert_cstr(&text).unwrap();
        assert_eq!(arg.as_bytes().unwrap(), "日本".as_bytes());
    }

    #[test]
    fn test_malformed_lenient_forwards_original() {
        // Truncated double-byte sequence
        let text = CString::new(b"abc\x93".to_vec()).unwrap();
        let conv = Converter::for_codepage(932, ConversionMode::Lenient).unwrap();
        let arg = conv.convert_cstr(&text).unwrap();
        assert_eq!(arg.as_ptr(), text.as_ptr());
    }

    #[test]
    fn test_malformed_strict_fails() {
        let text = CString::new(b"abc\x93".to_vec()).unwrap();
        let err = strict(932).convert_cstr(&text).unwrap_err();
        assert!(matches!(err, EncodingError::Malformed { .. }));
    }

    #[test]
    fn test_sheet_name_empty_is_null() {
        let conv = Converter::default();
        let empty = CString::new("").unwrap();
        assert!(unsafe { conv.convert_sheet_name(empty.as_ptr()) }.unwrap().is_null());
        assert!(unsafe { conv.convert_sheet_name(ptr::null()) }.unwrap().is_null());

        let name = CString::new(b"D\xe9penses".to_vec()).unwrap();
        let arg = unsafe { conv.convert_sheet_name(name.as_ptr()) }.unwrap();
        assert_eq!(arg.as_bytes().unwrap(), "Dépenses".as_bytes());
    }

    #[test]
    fn test_utf8_codepage_validates() {
        let conv = strict(65001);
        let text = CString::new("Grüße").unwrap();
        let arg = conv.convert_cstr(&text).unwrap();
        assert_eq!(arg.as_ptr(), text.as_ptr());

        let bad = CString::new(b"\xff\xfe".to_vec()).unwrap();
        assert!(conv.convert_cstr(&bad).is_err());
    }

    #[test]
    fn test_unsupported_codepage() {
        assert_eq!(
            Converter::for_codepage(437, ConversionMode::Lenient).unwrap_err(),
            EncodingError::UnsupportedCodepage(437)
        );
        let conv = Converter::new(&AdapterConfig {
            codepage: 437,
            mode: ConversionMode::Lenient,
        });
        assert_eq!(conv.encoding(), WINDOWS_1252);
    }

    #[test]
    fn test_decode() {
        assert_eq!(Converter::default().decode(b"na\xefve").unwrap(), "naïve");
    }
}
