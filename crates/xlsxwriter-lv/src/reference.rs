//! A1-style cell, column and range references
//!
//! Foreign callers cannot expand the library's `CELL()`, `COLS()` and
//! `RANGE()` macros, so the parses are exported as functions writing
//! zero-based values through out-parameters.

use std::ffi::CStr;
use std::os::raw::c_char;

use thiserror::Error;

use crate::sys::{lxw_col_t, lxw_row_t};

/// Number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

/// Malformed reference text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("Empty reference")]
    Empty,

    #[error("No column letters in '{0}'")]
    MissingColumn(String),

    #[error("No row number in '{0}'")]
    MissingRow(String),

    #[error("Invalid row number in '{0}'")]
    InvalidRow(String),

    #[error("Row {0} out of bounds (max {max})", max = MAX_ROWS)]
    RowOutOfBounds(u64),

    #[error("Column '{0}' out of bounds (max XFD)")]
    ColumnOutOfBounds(String),

    #[error("Unexpected text in '{0}'")]
    TrailingText(String),
}

/// Parsed `A1` reference
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRef {
    pub row: lxw_row_t,
    pub col: lxw_col_t,
}

/// Parsed `A:B` reference
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColRange {
    pub first_col: lxw_col_t,
    pub last_col: lxw_col_t,
}

/// Parsed `A1:B2` reference
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeRef {
    pub first_row: lxw_row_t,
    pub first_col: lxw_col_t,
    pub last_row: lxw_row_t,
    pub last_col: lxw_col_t,
}

impl CellRef {
    /// Parse a cell reference such as `"B3"` or `"$B$3"`
    ///
    /// # Examples
    /// ```
    /// use xlsxwriter_lv::CellRef;
    ///
    /// let cell = CellRef::parse("$B$2").unwrap();
    /// assert_eq!((cell.row, cell.col), (1, 1));
    /// ```
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }
        let (col, rest) = split_column(s)?;
        let (row, rest) = split_row(rest, s)?;
        match row {
            Some(row) if rest.is_empty() => Ok(Self { row, col }),
            Some(_) => Err(ReferenceError::TrailingText(s.to_string())),
            None => Err(ReferenceError::MissingRow(s.to_string())),
        }
    }
}

impl ColRange {
    /// Parse a column range such as `"B:D"`; row numbers are ignored
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }
        let (first, last) = split_pair(s);
        let first_col = column_only(first, s)?;
        let last_col = match last {
            Some(last) => column_only(last, s)?,
            None => first_col,
        };
        Ok(Self {
            first_col,
            last_col,
        })
    }
}

impl RangeRef {
    /// Parse a range such as `"A1:K42"`; a single cell gives a one-cell range
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }
        let (first, last) = split_pair(s);
        let first = CellRef::parse(first)?;
        let last = match last {
            Some(last) => CellRef::parse(last)?,
            None => first,
        };
        Ok(Self {
            first_row: first.row,
            first_col: first.col,
            last_row: last.row,
            last_col: last.col,
        })
    }
}

fn split_pair(s: &str) -> (&str, Option<&str>) {
    match s.split_once(':') {
        Some((first, last)) => (first, Some(last)),
        None => (s, None),
    }
}

/// Leading `$?LETTERS`, returned as a zero-based column
fn split_column(s: &str) -> Result<(u16, &str), ReferenceError> {
    let rest = s.strip_prefix('$').unwrap_or(s);
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(ReferenceError::MissingColumn(s.to_string()));
    }
    let col = letters_to_column(&rest[..end])?;
    Ok((col, &rest[end..]))
}

/// Optional `$?DIGITS`, returned as a zero-based row
fn split_row<'a>(s: &'a str, whole: &str) -> Result<(Option<u32>, &'a str), ReferenceError> {
    let rest = s.strip_prefix('$').unwrap_or(s);
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        if rest.len() != s.len() {
            return Err(ReferenceError::MissingRow(whole.to_string()));
        }
        return Ok((None, s));
    }
    let row: u64 = rest[..end]
        .parse()
        .map_err(|_| ReferenceError::InvalidRow(whole.to_string()))?;
    if row == 0 {
        return Err(ReferenceError::InvalidRow(whole.to_string()));
    }
    if row > u64::from(MAX_ROWS) {
        return Err(ReferenceError::RowOutOfBounds(row));
    }
    Ok((Some((row - 1) as u32), &rest[end..]))
}

fn column_only(s: &str, whole: &str) -> Result<u16, ReferenceError> {
    let (col, rest) = split_column(s.trim())?;
    let (_, rest) = split_row(rest, whole)?;
    if !rest.is_empty() {
        return Err(ReferenceError::TrailingText(whole.to_string()));
    }
    Ok(col)
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_column(letters: &str) -> Result<u16, ReferenceError> {
    // XFD is the last column, anything longer is out of range
    if letters.is_empty() || letters.len() > 3 {
        return Err(ReferenceError::ColumnOutOfBounds(letters.to_string()));
    }

    let mut col: u32 = 0;
    for c in letters.bytes() {
        if !c.is_ascii_alphabetic() {
            return Err(ReferenceError::MissingColumn(letters.to_string()));
        }
        col = col * 26 + u32::from(c.to_ascii_uppercase() - b'A' + 1);
    }

    let col = col - 1;
    if col >= u32::from(MAX_COLS) {
        return Err(ReferenceError::ColumnOutOfBounds(letters.to_string()));
    }
    Ok(col as u16)
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u16) -> String {
    let mut result = String::new();
    let mut n = u32::from(col) + 1;

    while n > 0 {
        n -= 1;
        result.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }

    result
}

unsafe fn text<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

unsafe fn store<T>(out: *mut T, value: T) {
    if !out.is_null() {
        out.write(value);
    }
}

/// Parse `"A1"` into a zero-based row and column.
///
/// Malformed input writes zero to both outputs; null outputs are skipped.
///
/// # Safety
///
/// `cell_str` must be null or NUL-terminated; each output must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn lxw_parse_cell(
    cell_str: *const c_char,
    row: *mut lxw_row_t,
    col: *mut lxw_col_t,
) {
    let cell = text(cell_str)
        .and_then(|s| CellRef::parse(s).ok())
        .unwrap_or_default();
    store(row, cell.row);
    store(col, cell.col);
}

/// Parse `"B:D"` into zero-based first and last columns.
///
/// # Safety
///
/// Same contract as [`lxw_parse_cell`].
#[no_mangle]
pub unsafe extern "C" fn lxw_parse_cols(
    cols_str: *const c_char,
    first_col: *mut lxw_col_t,
    last_col: *mut lxw_col_t,
) {
    let cols = text(cols_str)
        .and_then(|s| ColRange::parse(s).ok())
        .unwrap_or_default();
    store(first_col, cols.first_col);
    store(last_col, cols.last_col);
}

/// Parse `"A1:K42"` into a zero-based rectangle.
///
/// # Safety
///
/// Same contract as [`lxw_parse_cell`].
#[no_mangle]
pub unsafe extern "C" fn lxw_parse_range(
    range_str: *const c_char,
    first_row: *mut lxw_row_t,
    first_col: *mut lxw_col_t,
    last_row: *mut lxw_row_t,
    last_col: *mut lxw_col_t,
) {
    let range = text(range_str)
        .and_then(|s| RangeRef::parse(s).ok())
        .unwrap_or_default();
    store(first_row, range.first_row);
    store(first_col, range.first_col);
    store(last_row, range.last_row);
    store(last_col, range.last_col);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_parse_cell() {
        assert_eq!(CellRef::parse("A1").unwrap(), CellRef { row: 0, col: 0 });
        assert_eq!(CellRef::parse("$B$2").unwrap(), CellRef { row: 1, col: 1 });
        assert_eq!(
            CellRef::parse(" xfd1048576 ").unwrap(),
            CellRef {
                row: 1_048_575,
                col: 16_383
            }
        );
    }

    #[test]
    fn test_parse_cell_errors() {
        assert_eq!(CellRef::parse(""), Err(ReferenceError::Empty));
        assert!(matches!(CellRef::parse("A"), Err(ReferenceError::MissingRow(_))));
        assert!(matches!(CellRef::parse("A$"), Err(ReferenceError::MissingRow(_))));
        assert!(matches!(CellRef::parse("A0"), Err(ReferenceError::InvalidRow(_))));
        assert!(matches!(CellRef::parse("12"), Err(ReferenceError::MissingColumn(_))));
        assert!(matches!(CellRef::parse("A1x"), Err(ReferenceError::TrailingText(_))));
        assert!(matches!(CellRef::parse("XFE1"), Err(ReferenceError::ColumnOutOfBounds(_))));
        assert!(matches!(CellRef::parse("AAAA1"), Err(ReferenceError::ColumnOutOfBounds(_))));
        assert!(matches!(CellRef::parse("A1048577"), Err(ReferenceError::RowOutOfBounds(_))));
    }

    #[test]
    fn test_parse_cols() {
        let cols = ColRange::parse("B:D").unwrap();
        assert_eq!((cols.first_col, cols.last_col), (1, 3));
        let cols = ColRange::parse("c").unwrap();
        assert_eq!((cols.first_col, cols.last_col), (2, 2));
        let cols = ColRange::parse("B1:D1").unwrap();
        assert_eq!((cols.first_col, cols.last_col), (1, 3));
        // Order is preserved
        let cols = ColRange::parse("$D:$B").unwrap();
        assert_eq!((cols.first_col, cols.last_col), (3, 1));
    }

    #[test]
    fn test_parse_range() {
        let range = RangeRef::parse("A1:K42").unwrap();
        assert_eq!(
            range,
            RangeRef {
                first_row: 0,
                first_col: 0,
                last_row: 41,
                last_col: 10
            }
        );
        let range = RangeRef::parse("C3").unwrap();
        assert_eq!((range.first_row, range.last_col), (2, 2));
        assert!(RangeRef::parse("A1:").is_err());
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(letters_to_column("A").unwrap(), 0);
        assert_eq!(letters_to_column("z").unwrap(), 25);
        assert_eq!(letters_to_column("AA").unwrap(), 26);
        assert_eq!(column_to_letters(0), "A");
        assert_eq!(column_to_letters(701), "ZZ");
        assert_eq!(column_to_letters(16_383), "XFD");
    }

    #[test]
    fn test_exported_parsers() {
        let s = CString::new("A1:K42").unwrap();
        let (mut r1, mut c1, mut r2, mut c2) = (9, 9, 9, 9);
        unsafe { lxw_parse_range(s.as_ptr(), &mut r1, &mut c1, &mut r2, &mut c2) };
        assert_eq!((r1, c1, r2, c2), (0, 0, 41, 10));

        let s = CString::new("B:D").unwrap();
        let (mut first, mut last) = (0, 0);
        unsafe { lxw_parse_cols(s.as_ptr(), &mut first, &mut last) };
        assert_eq!((first, last), (1, 3));
    }

    #[test]
    fn test_malformed_writes_zero() {
        let s = CString::new("not a cell").unwrap();
        let (mut row, mut col) = (7, 7);
        unsafe { lxw_parse_cell(s.as_ptr(), &mut row, &mut col) };
        assert_eq!((row, col), (0, 0));

        let (mut row, mut col) = (7, 7);
        unsafe { lxw_parse_cell(ptr::null(), &mut row, &mut col) };
        assert_eq!((row, col), (0, 0));
    }

    #[test]
    fn test_null_outputs_skipped() {
        let s = CString::new("C7").unwrap();
        let mut col = 0;
        unsafe { lxw_parse_cell(s.as_ptr(), ptr::null_mut(), &mut col) };
        assert_eq!(col, 2);
    }
}
