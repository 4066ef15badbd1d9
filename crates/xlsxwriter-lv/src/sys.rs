//! Raw declarations of the libxlsxwriter symbols the adapters call

#![allow(non_camel_case_types)]

use std::os::raw::c_char;

#[cfg(feature = "native")]
use crate::error::LxwError;

pub type lxw_row_t = u32;
pub type lxw_col_t = u16;

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    lxw_workbook,
    lxw_worksheet,
    lxw_chartsheet,
    lxw_chart,
    lxw_chart_series,
    lxw_chart_axis,
    lxw_format,
    lxw_chart_font,
    lxw_chart_line,
    lxw_chart_fill,
    lxw_chart_pattern,
    lxw_workbook_options,
    lxw_image_options,
    lxw_textbox_options,
);

/// Custom data label, as the library reads it
#[repr(C)]
#[derive(Debug)]
pub struct lxw_chart_data_label {
    pub value: *const c_char,
    pub hide: u8,
    pub font: *mut lxw_chart_font,
    pub line: *mut lxw_chart_line,
    pub fill: *mut lxw_chart_fill,
    pub pattern: *mut lxw_chart_pattern,
}

/// Autofilter rule
#[repr(C)]
#[derive(Debug)]
pub struct lxw_filter_rule {
    pub criteria: u8,
    pub value_string: *const c_char,
    pub value: f64,
}

#[cfg(feature = "native")]
#[link(name = "xlsxwriter")]
extern "C" {
    pub fn workbook_new(filename: *const c_char) -> *mut lxw_workbook;
    pub fn workbook_new_opt(
        filename: *const c_char,
        options: *mut lxw_workbook_options,
    ) -> *mut lxw_workbook;
    pub fn workbook_add_worksheet(
        workbook: *mut lxw_workbook,
        sheetname: *const c_char,
    ) -> *mut lxw_worksheet;
    pub fn workbook_add_chartsheet(
        workbook: *mut lxw_workbook,
        sheetname: *const c_char,
    ) -> *mut lxw_chartsheet;
    pub fn workbook_define_name(
        workbook: *mut lxw_workbook,
        name: *const c_char,
        formula: *const c_char,
    ) -> LxwError;
    pub fn workbook_get_worksheet_by_name(
        workbook: *mut lxw_workbook,
        name: *const c_char,
    ) -> *mut lxw_worksheet;
    pub fn workbook_get_chartsheet_by_name(
        workbook: *mut lxw_workbook,
        name: *const c_char,
    ) -> *mut lxw_chartsheet;
    pub fn workbook_validate_sheet_name(
        workbook: *mut lxw_workbook,
        sheetname: *const c_char,
    ) -> LxwError;
    pub fn workbook_set_custom_property_string(
        workbook: *mut lxw_workbook,
        name: *const c_char,
        value: *const c_char,
    ) -> LxwError;
    pub fn workbook_add_vba_project(
        workbook: *mut lxw_workbook,
        filename: *const c_char,
    ) -> LxwError;
    pub fn workbook_add_signed_vba_project(
        workbook: *mut lxw_workbook,
        vba_project: *const c_char,
        signature: *const c_char,
    ) -> LxwError;

    pub fn worksheet_write_string(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        string: *const c_char,
        format: *mut lxw_format,
    ) -> LxwError;
    pub fn worksheet_write_formula(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        formula: *const c_char,
        format: *mut lxw_format,
    ) -> LxwError;
    pub fn worksheet_write_url(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        url: *const c_char,
        format: *mut lxw_format,
    ) -> LxwError;
    pub fn worksheet_write_comment(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        string: *const c_char,
    ) -> LxwError;
    pub fn worksheet_set_header(worksheet: *mut lxw_worksheet, string: *const c_char) -> LxwError;
    pub fn worksheet_set_footer(worksheet: *mut lxw_worksheet, string: *const c_char) -> LxwError;
    pub fn worksheet_merge_range(
        worksheet: *mut lxw_worksheet,
        first_row: lxw_row_t,
        first_col: lxw_col_t,
        last_row: lxw_row_t,
        last_col: lxw_col_t,
        string: *const c_char,
        format: *mut lxw_format,
    ) -> LxwError;
    pub fn worksheet_set_comments_author(worksheet: *mut lxw_worksheet, author: *const c_char);
    pub fn worksheet_insert_textbox(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        text: *const c_char,
    ) -> LxwError;
    pub fn worksheet_insert_textbox_opt(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        text: *const c_char,
        options: *mut lxw_textbox_options,
    ) -> LxwError;
    pub fn worksheet_insert_image(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        filename: *const c_char,
    ) -> LxwError;
    pub fn worksheet_insert_image_opt(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        filename: *const c_char,
        options: *mut lxw_image_options,
    ) -> LxwError;
    pub fn worksheet_embed_image(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        filename: *const c_char,
    ) -> LxwError;
    pub fn worksheet_embed_image_opt(
        worksheet: *mut lxw_worksheet,
        row: lxw_row_t,
        col: lxw_col_t,
        filename: *const c_char,
        options: *mut lxw_image_options,
    ) -> LxwError;
    pub fn worksheet_set_background(
        worksheet: *mut lxw_worksheet,
        filename: *const c_char,
    ) -> LxwError;
    pub fn worksheet_filter_column(
        worksheet: *mut lxw_worksheet,
        col: lxw_col_t,
        rule: *mut lxw_filter_rule,
    ) -> LxwError;
    pub fn worksheet_filter_column2(
        worksheet: *mut lxw_worksheet,
        col: lxw_col_t,
        rule1: *mut lxw_filter_rule,
        rule2: *mut lxw_filter_rule,
        and_or: u8,
    ) -> LxwError;

    pub fn chartsheet_set_header(chartsheet: *mut lxw_chartsheet, string: *const c_char)
        -> LxwError;
    pub fn chartsheet_set_footer(chartsheet: *mut lxw_chartsheet, string: *const c_char)
        -> LxwError;

    pub fn chart_add_series_impl(
        chart: *mut lxw_chart,
        categories: *const c_char,
        values: *const c_char,
        y2_axis: u8,
    ) -> *mut lxw_chart_series;
    pub fn chart_series_set_name(series: *mut lxw_chart_series, name: *const c_char);
    pub fn chart_series_set_categories(
        series: *mut lxw_chart_series,
        sheetname: *const c_char,
        first_row: lxw_row_t,
        first_col: lxw_col_t,
        last_row: lxw_row_t,
        last_col: lxw_col_t,
    );
    pub fn chart_series_set_values(
        series: *mut lxw_chart_series,
        sheetname: *const c_char,
        first_row: lxw_row_t,
        first_col: lxw_col_t,
        last_row: lxw_row_t,
        last_col: lxw_col_t,
    );
    pub fn chart_series_set_name_range(
        series: *mut lxw_chart_series,
        sheetname: *const c_char,
        row: lxw_row_t,
        col: lxw_col_t,
    );
    pub fn chart_series_set_trendline_name(series: *mut lxw_chart_series, name: *const c_char);
    pub fn chart_series_set_labels_num_format(
        series: *mut lxw_chart_series,
        num_format: *const c_char,
    );
    pub fn chart_series_set_labels_custom(
        series: *mut lxw_chart_series,
        data_labels: *mut *mut lxw_chart_data_label,
    ) -> LxwError;
    pub fn chart_axis_set_name(axis: *mut lxw_chart_axis, name: *const c_char);
    pub fn chart_axis_set_name_range(
        axis: *mut lxw_chart_axis,
        sheetname: *const c_char,
        row: lxw_row_t,
        col: lxw_col_t,
    );
    pub fn chart_axis_set_num_format(axis: *mut lxw_chart_axis, num_format: *const c_char);
    pub fn chart_title_set_name(chart: *mut lxw_chart, name: *const c_char);
    pub fn chart_title_set_name_range(
        chart: *mut lxw_chart,
        sheetname: *const c_char,
        row: lxw_row_t,
        col: lxw_col_t,
    );

    pub fn format_set_font_name(format: *mut lxw_format, font_name: *const c_char);
    pub fn format_set_num_format(format: *mut lxw_format, num_format: *const c_char);
}
