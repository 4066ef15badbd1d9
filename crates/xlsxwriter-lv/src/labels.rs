//! Custom data labels from flat parallel arrays
//!
//! The library takes a null-terminated array of pointers to
//! `lxw_chart_data_label`. Callers can only pass flat arrays, so they send
//! one pointer-sized integer per label (0 = keep the default label) and an
//! optional array of hide flags.

use std::ptr;

use crate::encoding::{Converter, Utf8Arg};
use crate::error::{AdapterError, LxwError, Result};
use crate::handles::ChartSeries;
use crate::sys::lxw_chart_data_label;

/// Label array built for one library call.
///
/// The converted strings are owned here and outlive the raw pointers stored
/// in `labels`.
struct LabelSet<'a> {
    _texts: Vec<Utf8Arg<'a>>,
    labels: Vec<lxw_chart_data_label>,
    pointers: Vec<*mut lxw_chart_data_label>,
}

impl<'a> LabelSet<'a> {
    /// # Safety
    ///
    /// `values` and `hide_flags` must each be null or valid for `count`
    /// reads; each non-zero value must address a NUL-terminated string.
    unsafe fn build(
        values: *const usize,
        hide_flags: *const u8,
        count: usize,
        converter: &Converter,
    ) -> Result<Self> {
        let mut texts = Vec::new();
        let mut labels = Vec::new();
        let mut pointers = Vec::new();
        texts
            .try_reserve_exact(count)
            .map_err(|_| AdapterError::AllocationFailed)?;
        labels
            .try_reserve_exact(count)
            .map_err(|_| AdapterError::AllocationFailed)?;
        pointers
            .try_reserve_exact(count + 1)
            .map_err(|_| AdapterError::AllocationFailed)?;

        for i in 0..count {
            let addr = if values.is_null() { 0 } else { *values.add(i) };
            let text = converter.convert(addr as *const _)?;
            let value = match text.as_bytes() {
                Some(bytes) if !bytes.is_empty() => text.as_ptr(),
                _ => ptr::null(),
            };
            let hide = if hide_flags.is_null() { 0 } else { *hide_flags.add(i) };

            labels.push(lxw_chart_data_label {
                value,
                hide,
                font: ptr::null_mut(),
                line: ptr::null_mut(),
                fill: ptr::null_mut(),
                pattern: ptr::null_mut(),
            });
            texts.push(text);
        }

        // `labels` is never resized below this point
        for label in labels.iter_mut() {
            pointers.push(label as *mut lxw_chart_data_label);
        }
        pointers.push(ptr::null_mut());

        Ok(Self {
            _texts: texts,
            labels,
            pointers,
        })
    }
}

/// Build `count` labels and hand them to `call` in a single invocation.
///
/// Returns [`LxwError::NULL_PARAMETER_IGNORED`] without calling the library
/// when `series` is null or `count` is zero. Everything allocated here is
/// released before returning.
///
/// # Safety
///
/// See [`LabelSet::build`]. `call` must not retain the array.
pub unsafe fn set_labels_custom<F>(
    series: ChartSeries,
    values: *const usize,
    hide_flags: *const u8,
    count: u16,
    converter: &Converter,
    call: F,
) -> LxwError
where
    F: FnOnce(ChartSeries, *mut *mut lxw_chart_data_label) -> LxwError,
{
    if series.is_null() || count == 0 {
        return LxwError::NULL_PARAMETER_IGNORED;
    }

    let mut set = match LabelSet::build(values, hide_flags, usize::from(count), converter) {
        Ok(set) => set,
        Err(err) => {
            log::warn!("chart_series_set_labels_custom_lv: {err}");
            return err.code();
        }
    };
    debug_assert_eq!(set.labels.len() + 1, set.pointers.len());

    call(series, set.pointers.as_mut_ptr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConversionMode;
    use std::cell::Cell;
    use std::ffi::{CStr, CString};

    fn series() -> ChartSeries {
        ChartSeries::from_raw(0x1000)
    }

    #[derive(Debug, PartialEq)]
    struct Seen {
        value: Option<String>,
        hide: u8,
    }

    unsafe fn collect(array: *mut *mut lxw_chart_data_label) -> (Vec<Seen>, usize) {
        let mut seen = Vec::new();
        let mut i = 0;
        loop {
            let label = *array.add(i);
            if label.is_null() {
                return (seen, i + 1);
            }
            let label = &*label;
            assert!(label.font.is_null() && label.line.is_null());
            assert!(label.fill.is_null() && label.pattern.is_null());
            seen.push(Seen {
                value: (!label.value.is_null())
                    .then(|| CStr::from_ptr(label.value).to_str().unwrap().to_string()),
                hide: label.hide,
            });
            i += 1;
        }
    }

    #[test]
    fn test_three_labels_in_order() {
        let first = CString::new("Peak").unwrap();
        let third = CString::new(b"Ann\xe9e".to_vec()).unwrap();
        let values = [first.as_ptr() as usize, 0, third.as_ptr() as usize];
        let hide = [0u8, 1, 0];
        let calls = Cell::new(0);

        let result = unsafe {
            set_labels_custom(
                series(),
                values.as_ptr(),
                hide.as_ptr(),
                3,
                &Converter::default(),
                |s, array| {
                    calls.set(calls.get() + 1);
                    assert_eq!(s, series());
                    let (seen, len) = collect(array);
                    assert_eq!(len, 4);
                    assert_eq!(
                        seen,
                        vec![
                            Seen { value: Some("Peak".into()), hide: 0 },
                            Seen { value: None, hide: 1 },
                            Seen { value: Some("Année".into()), hide: 0 },
                        ]
                    );
                    LxwError::NO_ERROR
                },
            )
        };

        assert_eq!(result, LxwError::NO_ERROR);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_zero_count_never_calls() {
        let values = [0usize];
        let result = unsafe {
            set_labels_custom(
                series(),
                values.as_ptr(),
                ptr::null(),
                0,
                &Converter::default(),
                |_, _| panic!("library must not be called"),
            )
        };
        assert_eq!(result, LxwError::NULL_PARAMETER_IGNORED);
    }

    #[test]
    fn test_null_series_never_calls() {
        let values = [0usize];
        let result = unsafe {
            set_labels_custom(
                ChartSeries::NULL,
                values.as_ptr(),
                ptr::null(),
                1,
                &Converter::default(),
                |_, _| panic!("library must not be called"),
            )
        };
        assert_eq!(result, LxwError::NULL_PARAMETER_IGNORED);
    }

    #[test]
    fn test_missing_arrays_give_default_labels() {
        let result = unsafe {
            set_labels_custom(
                series(),
                ptr::null(),
                ptr::null(),
                2,
                &Converter::default(),
                |_, array| {
                    let (seen, len) = collect(array);
                    assert_eq!(len, 3);
                    assert!(seen.iter().all(|s| s.value.is_none() && s.hide == 0));
                    LxwError::NO_ERROR
                },
            )
        };
        assert_eq!(result, LxwError::NO_ERROR);
    }

    #[test]
    fn test_empty_string_is_null_value() {
        let empty = CString::new("").unwrap();
        let values = [empty.as_ptr() as usize];
        unsafe {
            set_labels_custom(
                series(),
                values.as_ptr(),
                ptr::null(),
                1,
                &Converter::default(),
                |_, array| {
                    let (seen, _) = collect(array);
                    assert_eq!(seen[0].value, None);
                    LxwError::NO_ERROR
                },
            )
        };
    }

    #[test]
    fn test_library_code_passed_through() {
        let values = [0usize];
        let result = unsafe {
            set_labels_custom(
                series(),
                values.as_ptr(),
                ptr::null(),
                1,
                &Converter::default(),
                |_, _| LxwError::PARAMETER_VALIDATION,
            )
        };
        assert_eq!(result, LxwError::PARAMETER_VALIDATION);
    }

    #[test]
    fn test_strict_rejection() {
        let bad = CString::new(b"\x93".to_vec()).unwrap();
        let values = [bad.as_ptr() as usize];
        let converter = Converter::for_codepage(932, ConversionMode::Strict).unwrap();
        let result = unsafe {
            set_labels_custom(
                series(),
                values.as_ptr(),
                ptr::null(),
                1,
                &converter,
                |_, _| panic!("library must not be called"),
            )
        };
        assert_eq!(result, LxwError::PARAMETER_VALIDATION);
    }
}
