//! Autofilter rules from scalar parameters

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::encoding::{Converter, Utf8Arg};
use crate::error::{AdapterError, LxwError, Result};
use crate::handles::Worksheet;
use crate::sys::{lxw_col_t, lxw_filter_rule};

/// A filter rule together with the text its `value_string` points into
pub struct OwnedRule<'a> {
    text: Utf8Arg<'a>,
    rule: lxw_filter_rule,
}

impl<'a> OwnedRule<'a> {
    /// # Safety
    ///
    /// `value_string` must be null or NUL-terminated.
    pub unsafe fn new(
        criteria: u8,
        value_string: *const c_char,
        value: f64,
        converter: &Converter,
    ) -> Result<Self> {
        let text = if value_string.is_null() || CStr::from_ptr(value_string).is_empty() {
            Utf8Arg::Null
        } else {
            converter.convert(value_string)?
        };
        let rule = lxw_filter_rule {
            criteria,
            value_string: text.as_ptr(),
            value,
        };
        Ok(Self { text, rule })
    }

    pub fn criteria(&self) -> u8 {
        self.rule.criteria
    }

    pub fn value(&self) -> f64 {
        self.rule.value
    }

    /// Pointer for the library; valid while `self` is alive and not moved
    pub fn as_mut_ptr(&mut self) -> *mut lxw_filter_rule {
        &mut self.rule
    }
}

fn rejected(function: &str, err: AdapterError) -> LxwError {
    log::warn!("{function}: {err}; library call skipped");
    err.code()
}

/// Build one rule and pass it to `call`.
///
/// # Safety
///
/// `value_string` must be null or NUL-terminated.
pub unsafe fn filter_column<F>(
    worksheet: Worksheet,
    col: lxw_col_t,
    criteria: u8,
    value_string: *const c_char,
    value: f64,
    converter: &Converter,
    call: F,
) -> LxwError
where
    F: FnOnce(Worksheet, lxw_col_t, *mut lxw_filter_rule) -> LxwError,
{
    let mut rule = match OwnedRule::new(criteria, value_string, value, converter) {
        Ok(rule) => rule,
        Err(err) => return rejected("worksheet_filter_column_lv", err),
    };
    call(worksheet, col, rule.as_mut_ptr())
}

/// Build two rules and pass them with the `and_or` operator in one call.
///
/// Each rule owns its own converted text; both are released when this
/// returns, whatever the library reported.
///
/// # Safety
///
/// Both value strings must be null or NUL-terminated.
#[allow(clippy::too_many_arguments)]
pub unsafe fn filter_column2<F>(
    worksheet: Worksheet,
    col: lxw_col_t,
    criteria1: u8,
    value_string1: *const c_char,
    value1: f64,
    criteria2: u8,
    value_string2: *const c_char,
    value2: f64,
    and_or: u8,
    converter: &Converter,
    call: F,
) -> LxwError
where
    F: FnOnce(Worksheet, lxw_col_t, *mut lxw_filter_rule, *mut lxw_filter_rule, u8) -> LxwError,
{
    let rules = OwnedRule::new(criteria1, value_string1, value1, converter).and_then(|first| {
        OwnedRule::new(criteria2, value_string2, value2, converter).map(|second| (first, second))
    });
    let (mut first, mut second) = match rules {
        Ok(rules) => rules,
        Err(err) => return rejected("worksheet_filter_column2_lv", err),
    };
    call(worksheet, col, first.as_mut_ptr(), second.as_mut_ptr(), and_or)
}

impl std::fmt::Debug for OwnedRule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedRule")
            .field("criteria", &self.rule.criteria)
            .field("value_string", &self.text.as_bytes())
            .field("value", &self.rule.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConversionMode;
    use std::ffi::CString;
    use std::ptr;

    const GREATER_THAN: u8 = 3;
    const LESS_THAN: u8 = 4;
    const AND: u8 = 0;

    fn sheet() -> Worksheet {
        Worksheet::from_raw(0x2000)
    }

    unsafe fn value_string(rule: *mut lxw_filter_rule) -> Option<String> {
        let s = (*rule).value_string;
        (!s.is_null()).then(|| CStr::from_ptr(s).to_str().unwrap().to_string())
    }

    #[test]
    fn test_two_rules() {
        let mut calls = 0;
        let result = unsafe {
            filter_column2(
                sheet(),
                2,
                GREATER_THAN,
                ptr::null(),
                10.0,
                LESS_THAN,
                ptr::null(),
                20.0,
                AND,
                &Converter::default(),
                |ws, col, r1, r2, and_or| {
                    calls += 1;
                    assert_eq!((ws, col, and_or), (sheet(), 2, AND));
                    assert_ne!(r1, r2);
                    assert_eq!(((*r1).criteria, (*r1).value), (GREATER_THAN, 10.0));
                    assert_eq!(((*r2).criteria, (*r2).value), (LESS_THAN, 20.0));
                    assert!((*r1).value_string.is_null() && (*r2).value_string.is_null());
                    LxwError::NO_ERROR
                },
            )
        };
        assert_eq!(result, LxwError::NO_ERROR);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_rule_strings_converted_independently() {
        let a = CString::new(b"\xc4pfel".to_vec()).unwrap();
        let b = CString::new("Pears").unwrap();
        let result = unsafe {
            filter_column2(
                sheet(),
                0,
                1,
                a.as_ptr(),
                0.0,
                1,
                b.as_ptr(),
                0.0,
                1,
                &Converter::default(),
                |_, _, r1, r2, _| {
                    assert_eq!(value_string(r1).as_deref(), Some("Äpfel"));
                    assert_eq!(value_string(r2).as_deref(), Some("Pears"));
                    LxwError::PARAMETER_VALIDATION
                },
            )
        };
        // The library's own code is returned unchanged
        assert_eq!(result, LxwError::PARAMETER_VALIDATION);
    }

    #[test]
    fn test_single_rule_empty_string_is_null() {
        let empty = CString::new("").unwrap();
        let result = unsafe {
            filter_column(
                sheet(),
                4,
                1,
                empty.as_ptr(),
                5.0,
                &Converter::default(),
                |_, col, rule| {
                    assert_eq!(col, 4);
                    assert!(value_string(rule).is_none());
                    LxwError::NO_ERROR
                },
            )
        };
        assert_eq!(result, LxwError::NO_ERROR);
    }

    #[test]
    fn test_strict_failure_skips_call() {
        let bad = CString::new(b"\x93".to_vec()).unwrap();
        let converter = Converter::for_codepage(932, ConversionMode::Strict).unwrap();
        let result = unsafe {
            filter_column2(
                sheet(),
                0,
                1,
                ptr::null(),
                0.0,
                1,
                bad.as_ptr(),
                0.0,
                0,
                &converter,
                |_, _, _, _, _| panic!("library must not be called"),
            )
        };
        assert_eq!(result, LxwError::PARAMETER_VALIDATION);
    }
}
