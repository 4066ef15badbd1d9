//! # xlsxwriter-lv-schema
//!
//! Flattened interface descriptor of libxlsxwriter.
//!
//! Foreign-function import tools cannot parse the library's own headers
//! (nested pointers, preprocessor conditionals, macros). This crate holds the
//! library surface re-expressed with fixed-width integers and opaque handles,
//! and is the single source of truth for:
//!
//! - the rendered C header ([`render_header`]),
//! - structure sizes and offsets per target width ([`Api::layout`]),
//! - the `_lv` wrapper lookups used by tooling ([`Api::lv_wrapper`],
//!   [`Api::drop_in_wrapper`]).
//!
//! ## Example
//!
//! ```rust
//! use xlsxwriter_lv_schema::{render_header, Target, API};
//!
//! API.validate().unwrap();
//! let header = render_header(&API, Target::Win64);
//! assert!(header.contains("lxw_error worksheet_write_string_lv("));
//! ```

pub mod api;
pub mod error;
pub mod header;
pub mod layout;
pub mod types;

pub use api::{
    Alias, Api, EnumDef, Field, Function, Param, Section, StructDef, Variant, API,
    CALL_SHAPE_ADAPTERS, LV_SUFFIX,
};
pub use error::{Result, SchemaError};
pub use header::render_header;
pub use layout::{FieldLayout, StructLayout};
pub use types::{HandleKind, Target, Ty};
