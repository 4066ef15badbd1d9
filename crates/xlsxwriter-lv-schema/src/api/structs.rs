//! Flat structures. Pointer members are carried as pointer-sized integers
//! (`Ty::Addr`); callers pass 0 for "not set".

use super::{Field, StructDef};
use crate::types::Ty;

const I8: Ty = Ty::I8;
const U8: Ty = Ty::U8;
const U16: Ty = Ty::U16;
const I32: Ty = Ty::I32;
const U32: Ty = Ty::U32;
const I64: Ty = Ty::I64;
const F32: Ty = Ty::F32;
const F64: Ty = Ty::F64;
const ADDR: Ty = Ty::Addr;
const ROW: Ty = Ty::Row;
const COL: Ty = Ty::Col;
const COLOR: Ty = Ty::Color;
const STR: Ty = Ty::Str;

macro_rules! structure {
    ($name:ident { $($field:ident: $ty:expr),* $(,)? }) => {
        StructDef {
            name: stringify!($name),
            fields: &[$(Field { name: stringify!($field), ty: $ty }),*],
        }
    };
}

pub(crate) static STRUCTS: &[StructDef] = &[
    structure!(lxw_datetime {
        year: I32,
        month: I32,
        day: I32,
        hour: I32,
        min: I32,
        sec: F64,
    }),
    structure!(lxw_chart_line {
        color: COLOR,
        none: U8,
        width: F32,
        dash_type: U8,
        transparency: U8,
    }),
    structure!(lxw_chart_fill {
        color: COLOR,
        none: U8,
        transparency: U8,
    }),
    structure!(lxw_chart_pattern {
        fg_color: COLOR,
        bg_color: COLOR,
        type: U8,
    }),
    structure!(lxw_chart_gradient_fill {
        type: U8,
        colors: Ty::Array(&Ty::Color, 4),
        num_colors: U8,
        angle: F64,
    }),
    structure!(lxw_chart_layout {
        x: F64,
        y: F64,
        width: F64,
        height: F64,
    }),
    structure!(lxw_chart_font {
        name: ADDR,
        size: F64,
        bold: U8,
        italic: U8,
        underline: U8,
        rotation: I32,
        color: COLOR,
        pitch_family: U8,
        charset: U8,
        baseline: I8,
    }),
    structure!(lxw_chart_point {
        line: ADDR,
        fill: ADDR,
        pattern: ADDR,
    }),
    structure!(lxw_image_options {
        x_offset: I32,
        y_offset: I32,
        x_scale: F64,
        y_scale: F64,
        row: U32,
        col: U16,
        url: ADDR,
        tip: ADDR,
        object_position: U8,
        description: ADDR,
        decorative: ADDR,
    }),
    structure!(lxw_chart_options {
        x_offset: I32,
        y_offset: I32,
        x_scale: F64,
        y_scale: F64,
        object_position: U8,
        description: ADDR,
        decorative: U8,
    }),
    structure!(lxw_chart_data_label {
        value: ADDR,
        hide: U8,
        font: ADDR,
        line: ADDR,
        fill: ADDR,
        pattern: ADDR,
    }),
    structure!(lxw_row_col_options {
        hidden: U8,
        level: U8,
        collapsed: U8,
    }),
    structure!(lxw_protection {
        no_select_locked_cells: U8,
        no_select_unlocked_cells: U8,
        format_cells: U8,
        format_columns: U8,
        format_rows: U8,
        insert_columns: U8,
        insert_rows: U8,
        insert_hyperlinks: U8,
        delete_columns: U8,
        delete_rows: U8,
        sort: U8,
        autofilter: U8,
        pivot_tables: U8,
        scenarios: U8,
        objects: U8,
        no_content: U8,
        no_objects: U8,
    }),
    structure!(lxw_header_footer_options {
        margin: F64,
        image_left: ADDR,
        image_center: ADDR,
        image_right: ADDR,
    }),
    structure!(lxw_textbox_options {
        width: U32,
        height: U32,
        x_offset: I32,
        y_offset: I32,
        x_scale: F64,
        y_scale: F64,
        object_position: U8,
        description: ADDR,
        decorative: U8,
    }),
    structure!(lxw_button_options {
        caption: ADDR,
        macro: ADDR,
        description: ADDR,
        width: U32,
        height: U32,
        x_offset: I32,
        y_offset: I32,
        x_scale: F64,
        y_scale: F64,
    }),
    structure!(lxw_workbook_options {
        constant_memory: U8,
        tmpdir: ADDR,
        use_zip64: U8,
        output_buffer: ADDR,
        output_buffer_size: ADDR,
    }),
    structure!(lxw_doc_properties {
        title: ADDR,
        subject: ADDR,
        author: ADDR,
        manager: ADDR,
        company: ADDR,
        category: ADDR,
        keywords: ADDR,
        comments: ADDR,
        status: ADDR,
        hyperlink_base: ADDR,
        created: I64,
    }),
    structure!(lxw_filter_rule {
        criteria: U8,
        value_string: STR,
        value: F64,
    }),
    structure!(lxw_cell_ref {
        row: ROW,
        col: COL,
    }),
    structure!(lxw_col_range {
        first_col: COL,
        last_col: COL,
    }),
    structure!(lxw_range_ref {
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    }),
];
