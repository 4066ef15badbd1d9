//! Exported `_lv` entry points
//!
//! Each wrapper takes the parameters of the library function it wraps, with
//! text in the configured legacy code page, converts the text and forwards
//! everything else unchanged. The converted copies live until the wrapped
//! call returns.
//!
//! All functions share one safety contract: text parameters are null or
//! NUL-terminated, handles are null or were returned by the library, and
//! option structures are null or valid for the wrapped call.

#![allow(clippy::missing_safety_doc)]

use std::os::raw::c_char;

use crate::config::converter;
use crate::error::{AdapterError, LxwError, Rejected};
use crate::filter;
use crate::handles::{Chart, ChartAxis, ChartSeries, Chartsheet, Format, Workbook, Worksheet};
use crate::labels;
use crate::sys::{
    self, lxw_col_t, lxw_image_options, lxw_row_t, lxw_textbox_options, lxw_workbook_options,
};

fn rejected<T: Rejected>(function: &str, err: impl Into<AdapterError>) -> T {
    log::warn!("{function}: {}; library call skipped", err.into());
    T::rejected()
}

/// Convert one text parameter or return early from the wrapper
macro_rules! utf8 {
    ($function:literal, $text:expr) => {
        match converter().convert($text) {
            Ok(arg) => arg,
            Err(err) => return rejected($function, err),
        }
    };
    (sheet $function:literal, $text:expr) => {
        match converter().convert_sheet_name($text) {
            Ok(arg) => arg,
            Err(err) => return rejected($function, err),
        }
    };
}

// ---------------------------------------------------------------------------
// Worksheet
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn worksheet_write_string_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    string: *const c_char,
    format: Format,
) -> LxwError {
    let string = utf8!("worksheet_write_string_lv", string);
    sys::worksheet_write_string(worksheet.as_ptr(), row, col, string.as_ptr(), format.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_write_formula_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    formula: *const c_char,
    format: Format,
) -> LxwError {
    let formula = utf8!("worksheet_write_formula_lv", formula);
    sys::worksheet_write_formula(worksheet.as_ptr(), row, col, formula.as_ptr(), format.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_write_url_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    url: *const c_char,
    format: Format,
) -> LxwError {
    let url = utf8!("worksheet_write_url_lv", url);
    sys::worksheet_write_url(worksheet.as_ptr(), row, col, url.as_ptr(), format.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_write_comment_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    string: *const c_char,
) -> LxwError {
    let string = utf8!("worksheet_write_comment_lv", string);
    sys::worksheet_write_comment(worksheet.as_ptr(), row, col, string.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_set_header_lv(
    worksheet: Worksheet,
    header: *const c_char,
) -> LxwError {
    let header = utf8!("worksheet_set_header_lv", header);
    sys::worksheet_set_header(worksheet.as_ptr(), header.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_set_footer_lv(
    worksheet: Worksheet,
    footer: *const c_char,
) -> LxwError {
    let footer = utf8!("worksheet_set_footer_lv", footer);
    sys::worksheet_set_footer(worksheet.as_ptr(), footer.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_merge_range_lv(
    worksheet: Worksheet,
    first_row: lxw_row_t,
    first_col: lxw_col_t,
    last_row: lxw_row_t,
    last_col: lxw_col_t,
    string: *const c_char,
    format: Format,
) -> LxwError {
    let string = utf8!("worksheet_merge_range_lv", string);
    sys::worksheet_merge_range(
        worksheet.as_ptr(),
        first_row,
        first_col,
        last_row,
        last_col,
        string.as_ptr(),
        format.as_ptr(),
    )
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_set_comments_author_lv(
    worksheet: Worksheet,
    author: *const c_char,
) {
    let author = utf8!("worksheet_set_comments_author_lv", author);
    sys::worksheet_set_comments_author(worksheet.as_ptr(), author.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_insert_textbox_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    text: *const c_char,
) -> LxwError {
    let text = utf8!("worksheet_insert_textbox_lv", text);
    sys::worksheet_insert_textbox(worksheet.as_ptr(), row, col, text.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_insert_textbox_opt_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    text: *const c_char,
    options: *mut lxw_textbox_options,
) -> LxwError {
    let text = utf8!("worksheet_insert_textbox_opt_lv", text);
    sys::worksheet_insert_textbox_opt(worksheet.as_ptr(), row, col, text.as_ptr(), options)
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_filter_column_lv(
    worksheet: Worksheet,
    col: lxw_col_t,
    criteria: u8,
    value_string: *const c_char,
    value: f64,
) -> LxwError {
    filter::filter_column(
        worksheet,
        col,
        criteria,
        value_string,
        value,
        converter(),
        |ws, col, rule| sys::worksheet_filter_column(ws.as_ptr(), col, rule),
    )
}

#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn worksheet_filter_column2_lv(
    worksheet: Worksheet,
    col: lxw_col_t,
    criteria1: u8,
    value_string1: *const c_char,
    value1: f64,
    criteria2: u8,
    value_string2: *const c_char,
    value2: f64,
    and_or: u8,
) -> LxwError {
    filter::filter_column2(
        worksheet,
        col,
        criteria1,
        value_string1,
        value1,
        criteria2,
        value_string2,
        value2,
        and_or,
        converter(),
        |ws, col, rule1, rule2, and_or| {
            sys::worksheet_filter_column2(ws.as_ptr(), col, rule1, rule2, and_or)
        },
    )
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn chart_add_series_lv(
    chart: Chart,
    categories: *const c_char,
    values: *const c_char,
    y2_axis: u8,
) -> ChartSeries {
    let categories = utf8!("chart_add_series_lv", categories);
    let values = utf8!("chart_add_series_lv", values);
    ChartSeries::from_ptr(sys::chart_add_series_impl(
        chart.as_ptr(),
        categories.as_ptr(),
        values.as_ptr(),
        y2_axis,
    ))
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_name_lv(series: ChartSeries, name: *const c_char) {
    let name = utf8!("chart_series_set_name_lv", name);
    sys::chart_series_set_name(series.as_ptr(), name.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_axis_set_name_lv(axis: ChartAxis, name: *const c_char) {
    let name = utf8!("chart_axis_set_name_lv", name);
    sys::chart_axis_set_name(axis.as_ptr(), name.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_title_set_name_lv(chart: Chart, name: *const c_char) {
    let name = utf8!("chart_title_set_name_lv", name);
    sys::chart_title_set_name(chart.as_ptr(), name.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_trendline_name_lv(
    series: ChartSeries,
    name: *const c_char,
) {
    let name = utf8!("chart_series_set_trendline_name_lv", name);
    sys::chart_series_set_trendline_name(series.as_ptr(), name.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_axis_set_num_format_lv(axis: ChartAxis, num_format: *const c_char) {
    let num_format = utf8!("chart_axis_set_num_format_lv", num_format);
    sys::chart_axis_set_num_format(axis.as_ptr(), num_format.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_labels_num_format_lv(
    series: ChartSeries,
    num_format: *const c_char,
) {
    let num_format = utf8!("chart_series_set_labels_num_format_lv", num_format);
    sys::chart_series_set_labels_num_format(series.as_ptr(), num_format.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_labels_custom_lv(
    series: ChartSeries,
    values: *const usize,
    hide_flags: *const u8,
    count: u16,
) -> LxwError {
    labels::set_labels_custom(series, values, hide_flags, count, converter(), |s, array| {
        sys::chart_series_set_labels_custom(s.as_ptr(), array)
    })
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_categories_lv(
    series: ChartSeries,
    sheetname: *const c_char,
    first_row: lxw_row_t,
    first_col: lxw_col_t,
    last_row: lxw_row_t,
    last_col: lxw_col_t,
) {
    let sheetname = utf8!("chart_series_set_categories_lv", sheetname);
    sys::chart_series_set_categories(
        series.as_ptr(),
        sheetname.as_ptr(),
        first_row,
        first_col,
        last_row,
        last_col,
    )
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_values_lv(
    series: ChartSeries,
    sheetname: *const c_char,
    first_row: lxw_row_t,
    first_col: lxw_col_t,
    last_row: lxw_row_t,
    last_col: lxw_col_t,
) {
    let sheetname = utf8!("chart_series_set_values_lv", sheetname);
    sys::chart_series_set_values(
        series.as_ptr(),
        sheetname.as_ptr(),
        first_row,
        first_col,
        last_row,
        last_col,
    )
}

#[no_mangle]
pub unsafe extern "C" fn chart_series_set_name_range_lv(
    series: ChartSeries,
    sheetname: *const c_char,
    row: lxw_row_t,
    col: lxw_col_t,
) {
    let sheetname = utf8!("chart_series_set_name_range_lv", sheetname);
    sys::chart_series_set_name_range(series.as_ptr(), sheetname.as_ptr(), row, col)
}

#[no_mangle]
pub unsafe extern "C" fn chart_axis_set_name_range_lv(
    axis: ChartAxis,
    sheetname: *const c_char,
    row: lxw_row_t,
    col: lxw_col_t,
) {
    let sheetname = utf8!("chart_axis_set_name_range_lv", sheetname);
    sys::chart_axis_set_name_range(axis.as_ptr(), sheetname.as_ptr(), row, col)
}

#[no_mangle]
pub unsafe extern "C" fn chart_title_set_name_range_lv(
    chart: Chart,
    sheetname: *const c_char,
    row: lxw_row_t,
    col: lxw_col_t,
) {
    let sheetname = utf8!("chart_title_set_name_range_lv", sheetname);
    sys::chart_title_set_name_range(chart.as_ptr(), sheetname.as_ptr(), row, col)
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn format_set_font_name_lv(format: Format, font_name: *const c_char) {
    let font_name = utf8!("format_set_font_name_lv", font_name);
    sys::format_set_font_name(format.as_ptr(), font_name.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn format_set_num_format_lv(format: Format, num_format: *const c_char) {
    let num_format = utf8!("format_set_num_format_lv", num_format);
    sys::format_set_num_format(format.as_ptr(), num_format.as_ptr())
}

// ---------------------------------------------------------------------------
// Workbook
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn workbook_add_worksheet_lv(
    workbook: Workbook,
    sheetname: *const c_char,
) -> Worksheet {
    let sheetname = utf8!(sheet "workbook_add_worksheet_lv", sheetname);
    Worksheet::from_ptr(sys::workbook_add_worksheet(workbook.as_ptr(), sheetname.as_ptr()))
}

#[no_mangle]
pub unsafe extern "C" fn workbook_add_chartsheet_lv(
    workbook: Workbook,
    sheetname: *const c_char,
) -> Chartsheet {
    let sheetname = utf8!(sheet "workbook_add_chartsheet_lv", sheetname);
    Chartsheet::from_ptr(sys::workbook_add_chartsheet(workbook.as_ptr(), sheetname.as_ptr()))
}

#[no_mangle]
pub unsafe extern "C" fn workbook_define_name_lv(
    workbook: Workbook,
    name: *const c_char,
    formula: *const c_char,
) -> LxwError {
    let name = utf8!("workbook_define_name_lv", name);
    let formula = utf8!("workbook_define_name_lv", formula);
    sys::workbook_define_name(workbook.as_ptr(), name.as_ptr(), formula.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn workbook_get_worksheet_by_name_lv(
    workbook: Workbook,
    name: *const c_char,
) -> Worksheet {
    let name = utf8!("workbook_get_worksheet_by_name_lv", name);
    Worksheet::from_ptr(sys::workbook_get_worksheet_by_name(workbook.as_ptr(), name.as_ptr()))
}

#[no_mangle]
pub unsafe extern "C" fn workbook_get_chartsheet_by_name_lv(
    workbook: Workbook,
    name: *const c_char,
) -> Chartsheet {
    let name = utf8!("workbook_get_chartsheet_by_name_lv", name);
    Chartsheet::from_ptr(sys::workbook_get_chartsheet_by_name(workbook.as_ptr(), name.as_ptr()))
}

#[no_mangle]
pub unsafe extern "C" fn workbook_validate_sheet_name_lv(
    workbook: Workbook,
    sheetname: *const c_char,
) -> LxwError {
    let sheetname = utf8!("workbook_validate_sheet_name_lv", sheetname);
    sys::workbook_validate_sheet_name(workbook.as_ptr(), sheetname.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn workbook_set_custom_property_string_lv(
    workbook: Workbook,
    name: *const c_char,
    value: *const c_char,
) -> LxwError {
    let name = utf8!("workbook_set_custom_property_string_lv", name);
    let value = utf8!("workbook_set_custom_property_string_lv", value);
    sys::workbook_set_custom_property_string(workbook.as_ptr(), name.as_ptr(), value.as_ptr())
}

// ---------------------------------------------------------------------------
// Chartsheet
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn chartsheet_set_header_lv(
    chartsheet: Chartsheet,
    header: *const c_char,
) -> LxwError {
    let header = utf8!("chartsheet_set_header_lv", header);
    sys::chartsheet_set_header(chartsheet.as_ptr(), header.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn chartsheet_set_footer_lv(
    chartsheet: Chartsheet,
    footer: *const c_char,
) -> LxwError {
    let footer = utf8!("chartsheet_set_footer_lv", footer);
    sys::chartsheet_set_footer(chartsheet.as_ptr(), footer.as_ptr())
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

#[no_mangle]
pub unsafe extern "C" fn workbook_new_lv(filename: *const c_char) -> Workbook {
    let filename = utf8!("workbook_new_lv", filename);
    Workbook::from_ptr(sys::workbook_new(filename.as_ptr()))
}

#[no_mangle]
pub unsafe extern "C" fn workbook_new_opt_lv(
    filename: *const c_char,
    options: *mut lxw_workbook_options,
) -> Workbook {
    let filename = utf8!("workbook_new_opt_lv", filename);
    Workbook::from_ptr(sys::workbook_new_opt(filename.as_ptr(), options))
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_insert_image_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    filename: *const c_char,
) -> LxwError {
    let filename = utf8!("worksheet_insert_image_lv", filename);
    sys::worksheet_insert_image(worksheet.as_ptr(), row, col, filename.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_insert_image_opt_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    filename: *const c_char,
    options: *mut lxw_image_options,
) -> LxwError {
    let filename = utf8!("worksheet_insert_image_opt_lv", filename);
    sys::worksheet_insert_image_opt(worksheet.as_ptr(), row, col, filename.as_ptr(), options)
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_embed_image_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    filename: *const c_char,
) -> LxwError {
    let filename = utf8!("worksheet_embed_image_lv", filename);
    sys::worksheet_embed_image(worksheet.as_ptr(), row, col, filename.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_embed_image_opt_lv(
    worksheet: Worksheet,
    row: lxw_row_t,
    col: lxw_col_t,
    filename: *const c_char,
    options: *mut lxw_image_options,
) -> LxwError {
    let filename = utf8!("worksheet_embed_image_opt_lv", filename);
    sys::worksheet_embed_image_opt(worksheet.as_ptr(), row, col, filename.as_ptr(), options)
}

#[no_mangle]
pub unsafe extern "C" fn worksheet_set_background_lv(
    worksheet: Worksheet,
    filename: *const c_char,
) -> LxwError {
    let filename = utf8!("worksheet_set_background_lv", filename);
    sys::worksheet_set_background(worksheet.as_ptr(), filename.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn workbook_add_vba_project_lv(
    workbook: Workbook,
    filename: *const c_char,
) -> LxwError {
    let filename = utf8!("workbook_add_vba_project_lv", filename);
    sys::workbook_add_vba_project(workbook.as_ptr(), filename.as_ptr())
}

#[no_mangle]
pub unsafe extern "C" fn workbook_add_signed_vba_project_lv(
    workbook: Workbook,
    vba_project: *const c_char,
    signature: *const c_char,
) -> LxwError {
    let vba_project = utf8!("workbook_add_signed_vba_project_lv", vba_project);
    let signature = utf8!("workbook_add_signed_vba_project_lv", signature);
    sys::workbook_add_signed_vba_project(
        workbook.as_ptr(),
        vba_project.as_ptr(),
        signature.as_ptr(),
    )
}
