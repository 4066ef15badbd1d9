//! # xlsxwriter-lv
//!
//! Adapters exposing libxlsxwriter to LabVIEW's Call Library Function nodes.
//!
//! - `_lv` wrappers convert legacy 8-bit text to UTF-8 before calling the
//!   library ([`encoding`]), exported with the `native` feature.
//! - Flat parameter lists are reshaped into the label and filter-rule
//!   structures the library expects ([`labels`], [`filter`]).
//! - `lxw_parse_cell`, `lxw_parse_cols` and `lxw_parse_range` replace the
//!   library's reference macros ([`reference`]); always exported.
//!
//! Nothing is retained between calls: every buffer an adapter allocates is
//! dropped before it returns.

pub mod config;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod handles;
pub mod labels;
pub mod reference;
pub mod sys;

#[cfg(feature = "native")]
pub mod exports;

pub use config::{AdapterConfig, ConversionMode, CONFIG};
pub use encoding::{encoding_for_codepage, Converter, Utf8Arg};
pub use error::{lxw_lv_strerror, AdapterError, EncodingError, LxwError, Result};
pub use handles::{Chart, ChartAxis, ChartSeries, Chartsheet, Format, Workbook, Worksheet};
pub use reference::{CellRef, ColRange, RangeRef, ReferenceError};
