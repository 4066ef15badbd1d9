//! Opaque handles passed across the foreign boundary
//!
//! A handle is a library object pointer carried as a pointer-sized integer.
//! The adapters never dereference one; they only forward it, turning it back
//! into a typed pointer at the call into the library.

use crate::error::Rejected;
use crate::sys;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident => $target:ty) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(usize);

        impl $name {
            /// The absent handle
            pub const NULL: Self = Self(0);

            pub fn from_raw(raw: usize) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> usize {
                self.0
            }

            pub fn is_null(self) -> bool {
                self.0 == 0
            }

            #[cfg_attr(not(feature = "native"), allow(dead_code))]
            pub(crate) fn as_ptr(self) -> *mut $target {
                self.0 as *mut $target
            }

        }

        impl Rejected for $name {
            fn rejected() -> Self {
                Self::NULL
            }
        }
    };
}

handle!(
    /// `lxw_workbook`
    Workbook => sys::lxw_workbook
);
handle!(
    /// `lxw_worksheet`
    Worksheet => sys::lxw_worksheet
);
handle!(
    /// `lxw_chartsheet`
    Chartsheet => sys::lxw_chartsheet
);
handle!(
    /// `lxw_chart`
    Chart => sys::lxw_chart
);
handle!(
    /// `lxw_chart_series`
    ChartSeries => sys::lxw_chart_series
);
handle!(
    /// `lxw_chart_axis`
    ChartAxis => sys::lxw_chart_axis
);
handle!(
    /// `lxw_format`
    Format => sys::lxw_format
);

/// Kinds the library hands back from a wrapped constructor
macro_rules! returned_handle {
    ($($name:ident => $target:ty),* $(,)?) => {
        $(
            impl $name {
                #[cfg_attr(not(feature = "native"), allow(dead_code))]
                pub(crate) fn from_ptr(ptr: *mut $target) -> Self {
                    Self(ptr as usize)
                }
            }
        )*
    };
}

returned_handle!(
    Workbook => sys::lxw_workbook,
    Worksheet => sys::lxw_worksheet,
    Chartsheet => sys::lxw_chartsheet,
    ChartSeries => sys::lxw_chart_series,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_handles_are_pointer_sized() {
        assert_eq!(size_of::<Workbook>(), size_of::<*mut sys::lxw_workbook>());
        assert_eq!(size_of::<ChartSeries>(), size_of::<usize>());
    }

    #[test]
    fn test_pointer_round_trip() {
        let mut marker = 0u8;
        let ptr = &mut marker as *mut u8 as *mut sys::lxw_chart_series;
        let series = ChartSeries::from_ptr(ptr);
        assert!(!series.is_null());
        assert_eq!(series.as_ptr(), ptr);
        assert_eq!(ChartSeries::from_raw(series.raw()), series);
    }

    #[test]
    fn test_rejected_is_null() {
        assert!(<Worksheet as Rejected>::rejected().is_null());
        assert_eq!(Format::default(), Format::NULL);
    }
}
