//! Converted buffers are released when each adapter call returns.
//!
//! Single test in its own binary so the allocation counter sees no other
//! test threads.

use std::alloc::{GlobalAlloc, Layout, System};
use std::ffi::CString;
use std::ptr;
use std::sync::atomic::{AtomicIsize, Ordering};

use xlsxwriter_lv::filter::filter_column2;
use xlsxwriter_lv::labels::set_labels_custom;
use xlsxwriter_lv::{ChartSeries, Converter, LxwError, Worksheet};

struct Counting;

static LIVE: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        LIVE.fetch_add(1, Ordering::SeqCst);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE.fetch_sub(1, Ordering::SeqCst);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

#[test]
fn adapters_release_everything() {
    let converter = Converter::default();
    let label = CString::new(b"Men\xfc".to_vec()).unwrap();
    let rule = CString::new(b"Gr\xf6\xdfe".to_vec()).unwrap();
    let values = [label.as_ptr() as usize, 0, label.as_ptr() as usize];
    let hide = [0u8, 1, 0];

    // Warm up anything allocated lazily on first use
    let _ = converter.convert_cstr(&label);

    let before = LIVE.load(Ordering::SeqCst);
    for _ in 0..100 {
        let arg = converter.convert_cstr(&label).unwrap();
        assert!(arg.is_converted());
        drop(arg);

        let code = unsafe {
            set_labels_custom(
                ChartSeries::from_raw(1),
                values.as_ptr(),
                hide.as_ptr(),
                3,
                &converter,
                |_, _| LxwError::NO_ERROR,
            )
        };
        assert_eq!(code, LxwError::NO_ERROR);

        let code = unsafe {
            filter_column2(
                Worksheet::from_raw(1),
                0,
                1,
                rule.as_ptr(),
                0.0,
                2,
                ptr::null(),
                0.0,
                0,
                &converter,
                |_, _, _, _, _| LxwError::MEMORY_MALLOC_FAILED,
            )
        };
        assert_eq!(code, LxwError::MEMORY_MALLOC_FAILED);
    }
    assert_eq!(LIVE.load(Ordering::SeqCst), before);
}
