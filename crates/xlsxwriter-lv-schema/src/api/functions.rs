//! Function declarations of the external library, grouped by section.
//!
//! Every pointer-to-object parameter is an opaque handle; struct arguments
//! are passed by reference (`Ty::StructPtr`). Keep in lockstep with the
//! library headers.

use super::{Function, Param, Section};
use crate::types::{HandleKind, Ty};

const VOID: Ty = Ty::Void;
const I8: Ty = Ty::I8;
const U8: Ty = Ty::U8;
const I16: Ty = Ty::I16;
const U16: Ty = Ty::U16;
const I32: Ty = Ty::I32;
const U32: Ty = Ty::U32;
const I64: Ty = Ty::I64;
const F64: Ty = Ty::F64;
const INT: Ty = Ty::Int;
const SIZE: Ty = Ty::Size;
const ADDR: Ty = Ty::Addr;
const ROW: Ty = Ty::Row;
const COL: Ty = Ty::Col;
const COLOR: Ty = Ty::Color;
const STR: Ty = Ty::Str;
const BYTES: Ty = Ty::Bytes;
const ERROR: Ty = Ty::Error;

const WORKBOOK: Ty = Ty::Handle(HandleKind::Workbook);
const WORKSHEET: Ty = Ty::Handle(HandleKind::Worksheet);
const CHARTSHEET: Ty = Ty::Handle(HandleKind::Chartsheet);
const CHART: Ty = Ty::Handle(HandleKind::Chart);
const SERIES: Ty = Ty::Handle(HandleKind::ChartSeries);
const AXIS: Ty = Ty::Handle(HandleKind::ChartAxis);
const FORMAT: Ty = Ty::Handle(HandleKind::Format);
const ERROR_BARS: Ty = Ty::Handle(HandleKind::SeriesErrorBars);

macro_rules! func {
    ($section:ident $name:ident($($param:ident: $ty:expr),* $(,)?) -> $ret:expr) => {
        Function {
            section: Section::$section,
            name: stringify!($name),
            ret: $ret,
            params: &[$(Param { name: stringify!($param), ty: $ty }),*],
        }
    };
}

pub(crate) static FUNCTIONS: &[Function] = &[
    func!(Workbook workbook_new(filename: STR) -> WORKBOOK),
    func!(Workbook workbook_new_opt(filename: STR, options: ADDR) -> WORKBOOK),
    func!(Workbook workbook_add_format(workbook: WORKBOOK) -> FORMAT),
    func!(Workbook workbook_add_chart(workbook: WORKBOOK, chart_type: U8) -> CHART),
    func!(Workbook workbook_close(workbook: WORKBOOK) -> ERROR),
    func!(Workbook workbook_set_properties(workbook: WORKBOOK, properties: ADDR) -> ERROR),
    func!(Workbook workbook_set_custom_property_number(
        workbook: WORKBOOK,
        name: STR,
        value: F64,
    ) -> ERROR),
    func!(Workbook workbook_set_custom_property_integer(
        workbook: WORKBOOK,
        name: STR,
        value: I32,
    ) -> ERROR),
    func!(Workbook workbook_set_custom_property_boolean(
        workbook: WORKBOOK,
        name: STR,
        value: U8,
    ) -> ERROR),
    func!(Workbook workbook_set_custom_property_datetime(
        workbook: WORKBOOK,
        name: STR,
        datetime: Ty::StructPtr("lxw_datetime"),
    ) -> ERROR),
    func!(Workbook workbook_get_default_url_format(workbook: WORKBOOK) -> FORMAT),
    func!(Workbook workbook_add_vba_project(workbook: WORKBOOK, filename: STR) -> ERROR),
    func!(Workbook workbook_add_signed_vba_project(
        workbook: WORKBOOK,
        vba_project: STR,
        signature: STR,
    ) -> ERROR),
    func!(Workbook workbook_set_vba_name(workbook: WORKBOOK, name: STR) -> ERROR),
    func!(Workbook workbook_read_only_recommended(workbook: WORKBOOK) -> VOID),
    func!(Workbook workbook_use_1904_epoch(workbook: WORKBOOK) -> VOID),
    func!(Workbook workbook_set_size(workbook: WORKBOOK, width: U16, height: U16) -> VOID),

    func!(Worksheet worksheet_write_number(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        number: F64,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_datetime(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        datetime: Ty::StructPtr("lxw_datetime"),
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_unixtime(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        unixtime: I64,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_boolean(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        value: INT,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_blank(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_rich_string(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        rich_string: ADDR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_set_row(
        worksheet: WORKSHEET,
        row: ROW,
        height: F64,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_set_row_opt(
        worksheet: WORKSHEET,
        row: ROW,
        height: F64,
        format: FORMAT,
        options: Ty::StructPtr("lxw_row_col_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_set_row_pixels(
        worksheet: WORKSHEET,
        row: ROW,
        pixels: U32,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_set_row_pixels_opt(
        worksheet: WORKSHEET,
        row: ROW,
        pixels: U32,
        format: FORMAT,
        options: Ty::StructPtr("lxw_row_col_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_set_column(
        worksheet: WORKSHEET,
        first_col: COL,
        last_col: COL,
        width: F64,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_set_column_opt(
        worksheet: WORKSHEET,
        first_col: COL,
        last_col: COL,
        width: F64,
        format: FORMAT,
        options: Ty::StructPtr("lxw_row_col_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_set_column_pixels(
        worksheet: WORKSHEET,
        first_col: COL,
        last_col: COL,
        pixels: U32,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_set_column_pixels_opt(
        worksheet: WORKSHEET,
        first_col: COL,
        last_col: COL,
        pixels: U32,
        format: FORMAT,
        options: Ty::StructPtr("lxw_row_col_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_insert_image(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
    ) -> ERROR),
    func!(Worksheet worksheet_insert_image_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_insert_image_buffer(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        image_buffer: BYTES,
        image_size: SIZE,
    ) -> ERROR),
    func!(Worksheet worksheet_insert_image_buffer_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        image_buffer: BYTES,
        image_size: SIZE,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_insert_chart(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        chart: CHART,
    ) -> ERROR),
    func!(Worksheet worksheet_insert_chart_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        chart: CHART,
        options: Ty::StructPtr("lxw_chart_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_insert_checkbox(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        checked: U8,
    ) -> ERROR),
    func!(Worksheet worksheet_insert_button(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        options: Ty::StructPtr("lxw_button_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_embed_image(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
    ) -> ERROR),
    func!(Worksheet worksheet_embed_image_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_embed_image_buffer(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        image_buffer: BYTES,
        image_size: SIZE,
    ) -> ERROR),
    func!(Worksheet worksheet_embed_image_buffer_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        image_buffer: BYTES,
        image_size: SIZE,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_add_table(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        options: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_autofilter(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    ) -> ERROR),
    func!(Worksheet worksheet_data_validation_cell(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        validation: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_data_validation_range(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        validation: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_conditional_format_cell(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        conditional_format: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_conditional_format_range(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        conditional_format: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_activate(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_select(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_hide(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_first_sheet(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_freeze_panes(worksheet: WORKSHEET, row: ROW, col: COL) -> VOID),
    func!(Worksheet worksheet_split_panes(
        worksheet: WORKSHEET,
        vertical: F64,
        horizontal: F64,
    ) -> VOID),
    func!(Worksheet worksheet_freeze_panes_opt(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        top_row: ROW,
        left_col: COL,
        type: U8,
    ) -> VOID),
    func!(Worksheet worksheet_split_panes_opt(
        worksheet: WORKSHEET,
        vertical: F64,
        horizontal: F64,
        top_row: ROW,
        left_col: COL,
    ) -> VOID),
    func!(Worksheet worksheet_filter_column_lv(
        worksheet: WORKSHEET,
        col: COL,
        criteria: U8,
        value_string: STR,
        value: F64,
    ) -> ERROR),
    func!(Worksheet worksheet_filter_column2_lv(
        worksheet: WORKSHEET,
        col: COL,
        criteria1: U8,
        value_string1: STR,
        value1: F64,
        criteria2: U8,
        value_string2: STR,
        value2: F64,
        and_or: U8,
    ) -> ERROR),
    func!(Worksheet worksheet_set_selection(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    ) -> ERROR),
    func!(Worksheet worksheet_set_top_left_cell(worksheet: WORKSHEET, row: ROW, col: COL) -> VOID),
    func!(Worksheet worksheet_set_landscape(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_portrait(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_page_view(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_paper(worksheet: WORKSHEET, paper_type: U8) -> VOID),
    func!(Worksheet worksheet_set_margins(
        worksheet: WORKSHEET,
        left: F64,
        right: F64,
        top: F64,
        bottom: F64,
    ) -> VOID),
    func!(Worksheet worksheet_set_h_pagebreaks(worksheet: WORKSHEET, breaks: ADDR) -> ERROR),
    func!(Worksheet worksheet_set_v_pagebreaks(worksheet: WORKSHEET, breaks: ADDR) -> ERROR),
    func!(Worksheet worksheet_print_across(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_zoom(worksheet: WORKSHEET, scale: U16) -> VOID),
    func!(Worksheet worksheet_gridlines(worksheet: WORKSHEET, option: U8) -> VOID),
    func!(Worksheet worksheet_center_horizontally(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_center_vertically(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_print_row_col_headers(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_repeat_rows(
        worksheet: WORKSHEET,
        first_row: ROW,
        last_row: ROW,
    ) -> ERROR),
    func!(Worksheet worksheet_repeat_columns(
        worksheet: WORKSHEET,
        first_col: COL,
        last_col: COL,
    ) -> ERROR),
    func!(Worksheet worksheet_print_area(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    ) -> ERROR),
    func!(Worksheet worksheet_fit_to_pages(worksheet: WORKSHEET, width: U16, height: U16) -> VOID),
    func!(Worksheet worksheet_set_start_page(worksheet: WORKSHEET, start_page: U16) -> VOID),
    func!(Worksheet worksheet_set_print_scale(worksheet: WORKSHEET, scale: U16) -> VOID),
    func!(Worksheet worksheet_right_to_left(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_hide_zero(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_tab_color(worksheet: WORKSHEET, color: COLOR) -> VOID),
    func!(Worksheet worksheet_protect(
        worksheet: WORKSHEET,
        password: STR,
        options: Ty::StructPtr("lxw_protection"),
    ) -> VOID),
    func!(Worksheet worksheet_outline_settings(
        worksheet: WORKSHEET,
        visible: U8,
        symbols_below: U8,
        symbols_right: U8,
        auto_style: U8,
    ) -> VOID),
    func!(Worksheet worksheet_set_default_row(
        worksheet: WORKSHEET,
        height: F64,
        hide_unused_rows: U8,
    ) -> VOID),
    func!(Worksheet worksheet_set_vba_name(worksheet: WORKSHEET, name: STR) -> ERROR),
    func!(Worksheet worksheet_show_comments(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_ignore_errors(worksheet: WORKSHEET, type: U8, range: STR) -> ERROR),
    func!(Worksheet worksheet_set_background(worksheet: WORKSHEET, filename: STR) -> ERROR),
    func!(Worksheet worksheet_set_background_buffer(
        worksheet: WORKSHEET,
        image_buffer: BYTES,
        image_size: SIZE,
    ) -> ERROR),
    func!(Worksheet worksheet_print_black_and_white(worksheet: WORKSHEET) -> VOID),
    func!(Worksheet worksheet_set_header_opt(
        worksheet: WORKSHEET,
        string: STR,
        options: Ty::StructPtr("lxw_header_footer_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_set_footer_opt(
        worksheet: WORKSHEET,
        string: STR,
        options: Ty::StructPtr("lxw_header_footer_options"),
    ) -> ERROR),
    func!(Worksheet worksheet_write_array_formula(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        formula: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_dynamic_array_formula(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        formula: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_dynamic_formula(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_formula_num(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
        result: F64,
    ) -> ERROR),
    func!(Worksheet worksheet_write_formula_str(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
        result: STR,
    ) -> ERROR),
    func!(Worksheet worksheet_write_url_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        url: STR,
        format: FORMAT,
        string: STR,
        tooltip: STR,
    ) -> ERROR),
    func!(Worksheet worksheet_write_comment_opt(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        string: STR,
        options: ADDR,
    ) -> ERROR),
    func!(Worksheet worksheet_write_array_formula_num(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        formula: STR,
        format: FORMAT,
        result: F64,
    ) -> ERROR),
    func!(Worksheet worksheet_write_dynamic_array_formula_num(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        formula: STR,
        format: FORMAT,
        result: F64,
    ) -> ERROR),
    func!(Worksheet worksheet_write_dynamic_formula_num(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
        result: F64,
    ) -> ERROR),
    func!(Worksheet worksheet_set_error_cell(worksheet: WORKSHEET, row: ROW, col: COL) -> VOID),

    func!(Chartsheet chartsheet_set_chart(chartsheet: CHARTSHEET, chart: CHART) -> ERROR),
    func!(Chartsheet chartsheet_set_chart_opt(
        chartsheet: CHARTSHEET,
        chart: CHART,
        options: Ty::StructPtr("lxw_chart_options"),
    ) -> ERROR),
    func!(Chartsheet chartsheet_activate(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_select(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_hide(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_set_first_sheet(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_set_tab_color(chartsheet: CHARTSHEET, color: COLOR) -> VOID),
    func!(Chartsheet chartsheet_protect(
        chartsheet: CHARTSHEET,
        password: STR,
        options: Ty::StructPtr("lxw_protection"),
    ) -> VOID),
    func!(Chartsheet chartsheet_set_zoom(chartsheet: CHARTSHEET, scale: U16) -> VOID),
    func!(Chartsheet chartsheet_set_landscape(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_set_portrait(chartsheet: CHARTSHEET) -> VOID),
    func!(Chartsheet chartsheet_set_paper(chartsheet: CHARTSHEET, paper_type: U8) -> VOID),
    func!(Chartsheet chartsheet_set_margins(
        chartsheet: CHARTSHEET,
        left: F64,
        right: F64,
        top: F64,
        bottom: F64,
    ) -> VOID),
    func!(Chartsheet chartsheet_set_header_opt(
        chartsheet: CHARTSHEET,
        string: STR,
        options: Ty::StructPtr("lxw_header_footer_options"),
    ) -> ERROR),
    func!(Chartsheet chartsheet_set_footer_opt(
        chartsheet: CHARTSHEET,
        string: STR,
        options: Ty::StructPtr("lxw_header_footer_options"),
    ) -> ERROR),

    func!(Chart chart_add_series_impl(
        chart: CHART,
        categories: STR,
        values: STR,
        y2_axis: U8,
    ) -> SERIES),
    func!(Chart chart_series_set_line(
        series: SERIES,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_series_set_fill(
        series: SERIES,
        fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_series_set_invert_if_negative(series: SERIES) -> VOID),
    func!(Chart chart_series_set_pattern(
        series: SERIES,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_series_set_gradient(
        series: SERIES,
        gradient: Ty::StructPtr("lxw_chart_gradient_fill"),
    ) -> VOID),
    func!(Chart chart_series_set_marker_type(series: SERIES, type: U8) -> VOID),
    func!(Chart chart_series_set_marker_size(series: SERIES, size: U8) -> VOID),
    func!(Chart chart_series_set_marker_line(
        series: SERIES,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_series_set_marker_fill(
        series: SERIES,
        fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_series_set_marker_pattern(
        series: SERIES,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_series_set_points(series: SERIES, points: ADDR) -> ERROR),
    func!(Chart chart_series_set_smooth(series: SERIES, smooth: U8) -> VOID),
    func!(Chart chart_series_set_labels(series: SERIES) -> VOID),
    func!(Chart chart_series_set_labels_options(
        series: SERIES,
        show_name: U8,
        show_category: U8,
        show_value: U8,
    ) -> VOID),
    func!(Chart chart_series_set_labels_custom(series: SERIES, data_labels: ADDR) -> ERROR),
    func!(Chart chart_series_set_labels_separator(series: SERIES, separator: U8) -> VOID),
    func!(Chart chart_series_set_labels_position(series: SERIES, position: U8) -> VOID),
    func!(Chart chart_series_set_labels_leader_line(series: SERIES) -> VOID),
    func!(Chart chart_series_set_labels_legend(series: SERIES) -> VOID),
    func!(Chart chart_series_set_labels_percentage(series: SERIES) -> VOID),
    func!(Chart chart_series_set_labels_font(
        series: SERIES,
        font: Ty::StructPtr("lxw_chart_font"),
    ) -> VOID),
    func!(Chart chart_series_set_labels_line(
        series: SERIES,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_series_set_labels_fill(
        series: SERIES,
        fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_series_set_labels_pattern(
        series: SERIES,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_series_set_trendline(series: SERIES, type: U8, value: U8) -> VOID),
    func!(Chart chart_series_set_trendline_forecast(
        series: SERIES,
        forward: F64,
        backward: F64,
    ) -> VOID),
    func!(Chart chart_series_set_trendline_equation(series: SERIES) -> VOID),
    func!(Chart chart_series_set_trendline_r_squared(series: SERIES) -> VOID),
    func!(Chart chart_series_set_trendline_intercept(series: SERIES, intercept: F64) -> VOID),
    func!(Chart chart_series_set_trendline_line(
        series: SERIES,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_series_get_error_bars(series: SERIES, axis_type: U8) -> ERROR_BARS),
    func!(Chart chart_series_set_error_bars(error_bars: ERROR_BARS, type: U8, value: F64) -> VOID),
    func!(Chart chart_series_set_error_bars_direction(
        error_bars: ERROR_BARS,
        direction: U8,
    ) -> VOID),
    func!(Chart chart_series_set_error_bars_endcap(error_bars: ERROR_BARS, endcap: U8) -> VOID),
    func!(Chart chart_series_set_error_bars_line(
        error_bars: ERROR_BARS,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_axis_get(chart: CHART, axis_type: U8) -> AXIS),
    func!(Chart chart_axis_set_name_layout(
        axis: AXIS,
        layout: Ty::StructPtr("lxw_chart_layout"),
    ) -> VOID),
    func!(Chart chart_axis_set_name_font(
        axis: AXIS,
        font: Ty::StructPtr("lxw_chart_font"),
    ) -> VOID),
    func!(Chart chart_axis_set_num_font(axis: AXIS, font: Ty::StructPtr("lxw_chart_font")) -> VOID),
    func!(Chart chart_axis_set_line(axis: AXIS, line: Ty::StructPtr("lxw_chart_line")) -> VOID),
    func!(Chart chart_axis_set_fill(axis: AXIS, fill: Ty::StructPtr("lxw_chart_fill")) -> VOID),
    func!(Chart chart_axis_set_pattern(
        axis: AXIS,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_axis_set_reverse(axis: AXIS) -> VOID),
    func!(Chart chart_axis_set_crossing(axis: AXIS, value: F64) -> VOID),
    func!(Chart chart_axis_set_crossing_max(axis: AXIS) -> VOID),
    func!(Chart chart_axis_set_crossing_min(axis: AXIS) -> VOID),
    func!(Chart chart_axis_off(axis: AXIS) -> VOID),
    func!(Chart chart_axis_set_position(axis: AXIS, position: U8) -> VOID),
    func!(Chart chart_axis_set_label_position(axis: AXIS, position: U8) -> VOID),
    func!(Chart chart_axis_set_label_align(axis: AXIS, align: U8) -> VOID),
    func!(Chart chart_axis_set_min(axis: AXIS, min: F64) -> VOID),
    func!(Chart chart_axis_set_max(axis: AXIS, max: F64) -> VOID),
    func!(Chart chart_axis_set_log_base(axis: AXIS, log_base: U16) -> VOID),
    func!(Chart chart_axis_set_major_tick_mark(axis: AXIS, type: U8) -> VOID),
    func!(Chart chart_axis_set_minor_tick_mark(axis: AXIS, type: U8) -> VOID),
    func!(Chart chart_axis_set_interval_unit(axis: AXIS, unit: U16) -> VOID),
    func!(Chart chart_axis_set_interval_tick(axis: AXIS, unit: U16) -> VOID),
    func!(Chart chart_axis_set_major_unit(axis: AXIS, unit: F64) -> VOID),
    func!(Chart chart_axis_set_minor_unit(axis: AXIS, unit: F64) -> VOID),
    func!(Chart chart_axis_set_display_units(axis: AXIS, units: U8) -> VOID),
    func!(Chart chart_axis_set_display_units_visible(axis: AXIS, visible: U8) -> VOID),
    func!(Chart chart_axis_major_gridlines_set_visible(axis: AXIS, visible: U8) -> VOID),
    func!(Chart chart_axis_minor_gridlines_set_visible(axis: AXIS, visible: U8) -> VOID),
    func!(Chart chart_axis_major_gridlines_set_line(
        axis: AXIS,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_axis_minor_gridlines_set_line(
        axis: AXIS,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_title_set_name_font(
        chart: CHART,
        font: Ty::StructPtr("lxw_chart_font"),
    ) -> VOID),
    func!(Chart chart_title_off(chart: CHART) -> VOID),
    func!(Chart chart_legend_set_position(chart: CHART, position: U8) -> VOID),
    func!(Chart chart_legend_set_font(chart: CHART, font: Ty::StructPtr("lxw_chart_font")) -> VOID),
    func!(Chart chart_legend_delete_series(chart: CHART, delete_series: ADDR) -> ERROR),
    func!(Chart chart_chartarea_set_line(
        chart: CHART,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_chartarea_set_fill(
        chart: CHART,
        fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_chartarea_set_pattern(
        chart: CHART,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_chartarea_set_gradient(
        chart: CHART,
        gradient: Ty::StructPtr("lxw_chart_gradient_fill"),
    ) -> VOID),
    func!(Chart chart_plotarea_set_line(
        chart: CHART,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_plotarea_set_fill(
        chart: CHART,
        fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_plotarea_set_pattern(
        chart: CHART,
        pattern: Ty::StructPtr("lxw_chart_pattern"),
    ) -> VOID),
    func!(Chart chart_plotarea_set_gradient(
        chart: CHART,
        gradient: Ty::StructPtr("lxw_chart_gradient_fill"),
    ) -> VOID),
    func!(Chart chart_plotarea_set_layout(
        chart: CHART,
        layout: Ty::StructPtr("lxw_chart_layout"),
    ) -> VOID),
    func!(Chart chart_combine(chart: CHART, combined_chart: CHART) -> VOID),
    func!(Chart chart_title_set_layout(
        chart: CHART,
        layout: Ty::StructPtr("lxw_chart_layout"),
    ) -> VOID),
    func!(Chart chart_title_set_overlay(chart: CHART, overlay: U8) -> VOID),
    func!(Chart chart_legend_set_layout(
        chart: CHART,
        layout: Ty::StructPtr("lxw_chart_layout"),
    ) -> VOID),
    func!(Chart chart_set_style(chart: CHART, style_id: U8) -> VOID),
    func!(Chart chart_set_table(chart: CHART) -> VOID),
    func!(Chart chart_set_table_grid(
        chart: CHART,
        horizontal: U8,
        vertical: U8,
        outline: U8,
        legend_keys: U8,
    ) -> VOID),
    func!(Chart chart_set_table_font(chart: CHART, font: Ty::StructPtr("lxw_chart_font")) -> VOID),
    func!(Chart chart_set_up_down_bars(chart: CHART) -> VOID),
    func!(Chart chart_set_up_down_bars_format(
        chart: CHART,
        up_bar_line: Ty::StructPtr("lxw_chart_line"),
        up_bar_fill: Ty::StructPtr("lxw_chart_fill"),
        down_bar_line: Ty::StructPtr("lxw_chart_line"),
        down_bar_fill: Ty::StructPtr("lxw_chart_fill"),
    ) -> VOID),
    func!(Chart chart_set_drop_lines(chart: CHART, line: Ty::StructPtr("lxw_chart_line")) -> VOID),
    func!(Chart chart_set_high_low_lines(
        chart: CHART,
        line: Ty::StructPtr("lxw_chart_line"),
    ) -> VOID),
    func!(Chart chart_set_series_overlap(chart: CHART, overlap: I8) -> VOID),
    func!(Chart chart_set_series_gap(chart: CHART, gap: U16) -> VOID),
    func!(Chart chart_set_series_overlap_y2(chart: CHART, overlap: I8) -> VOID),
    func!(Chart chart_set_series_gap_y2(chart: CHART, gap: U16) -> VOID),
    func!(Chart chart_show_blanks_as(chart: CHART, option: U8) -> VOID),
    func!(Chart chart_show_hidden_data(chart: CHART) -> VOID),
    func!(Chart chart_set_rotation(chart: CHART, rotation: U16) -> VOID),
    func!(Chart chart_set_hole_size(chart: CHART, size: U8) -> VOID),
    func!(Chart chart_get_x_axis(chart: CHART) -> AXIS),
    func!(Chart chart_get_y_axis(chart: CHART) -> AXIS),
    func!(Chart chart_get_y2_axis(chart: CHART) -> AXIS),

    func!(Format format_set_font_size(format: FORMAT, size: F64) -> VOID),
    func!(Format format_set_font_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_bold(format: FORMAT) -> VOID),
    func!(Format format_set_italic(format: FORMAT) -> VOID),
    func!(Format format_set_underline(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_font_strikeout(format: FORMAT) -> VOID),
    func!(Format format_set_font_script(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_num_format_index(format: FORMAT, index: U8) -> VOID),
    func!(Format format_set_unlocked(format: FORMAT) -> VOID),
    func!(Format format_set_hidden(format: FORMAT) -> VOID),
    func!(Format format_set_align(format: FORMAT, alignment: U8) -> VOID),
    func!(Format format_set_text_wrap(format: FORMAT) -> VOID),
    func!(Format format_set_rotation(format: FORMAT, angle: I16) -> VOID),
    func!(Format format_set_indent(format: FORMAT, level: U8) -> VOID),
    func!(Format format_set_shrink(format: FORMAT) -> VOID),
    func!(Format format_set_pattern(format: FORMAT, pattern: U8) -> VOID),
    func!(Format format_set_bg_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_fg_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_border(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_bottom(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_top(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_left(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_right(format: FORMAT, style: U8) -> VOID),
    func!(Format format_set_border_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_bottom_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_top_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_left_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_right_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_diag_type(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_diag_border(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_diag_color(format: FORMAT, color: COLOR) -> VOID),
    func!(Format format_set_font_outline(format: FORMAT) -> VOID),
    func!(Format format_set_font_shadow(format: FORMAT) -> VOID),
    func!(Format format_set_font_family(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_font_charset(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_font_scheme(format: FORMAT, font_scheme: STR) -> VOID),
    func!(Format format_set_font_condense(format: FORMAT) -> VOID),
    func!(Format format_set_font_extend(format: FORMAT) -> VOID),
    func!(Format format_set_reading_order(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_theme(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_hyperlink(format: FORMAT) -> VOID),
    func!(Format format_set_color_indexed(format: FORMAT, value: U8) -> VOID),
    func!(Format format_set_font_only(format: FORMAT) -> VOID),
    func!(Format format_set_quote_prefix(format: FORMAT) -> VOID),
    func!(Format format_set_checkbox(format: FORMAT) -> VOID),

    func!(Reference lxw_parse_cell(
        cell_str: STR,
        row: Ty::Ptr(&Ty::Row),
        col: Ty::Ptr(&Ty::Col),
    ) -> VOID),
    func!(Reference lxw_parse_cols(
        cols_str: STR,
        first_col: Ty::Ptr(&Ty::Col),
        last_col: Ty::Ptr(&Ty::Col),
    ) -> VOID),
    func!(Reference lxw_parse_range(
        range_str: STR,
        first_row: Ty::Ptr(&Ty::Row),
        first_col: Ty::Ptr(&Ty::Col),
        last_row: Ty::Ptr(&Ty::Row),
        last_col: Ty::Ptr(&Ty::Col),
    ) -> VOID),

    func!(Utility lxw_name_to_row(row_str: STR) -> U32),
    func!(Utility lxw_name_to_col(col_str: STR) -> U16),
    func!(Utility lxw_name_to_row_2(row_str: STR) -> U32),
    func!(Utility lxw_name_to_col_2(col_str: STR) -> U16),
    func!(Utility lxw_version() -> STR),
    func!(Utility lxw_version_id() -> U16),
    func!(Utility lxw_strerror(error_num: ERROR) -> STR),
    func!(Utility lxw_lv_strerror(code: INT) -> STR),
    func!(Utility lxw_datetime_to_excel_datetime(datetime: Ty::StructPtr("lxw_datetime")) -> F64),
    func!(Utility lxw_unixtime_to_excel_date(unixtime: I64) -> I32),
    func!(Utility lxw_unixtime_to_excel_date_epoch(unixtime: I64, is_date_1904: U8) -> F64),

    func!(Wrappers worksheet_write_string_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        string: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Wrappers worksheet_write_formula_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Wrappers worksheet_write_url_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        url: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Wrappers worksheet_write_comment_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        string: STR,
    ) -> ERROR),
    func!(Wrappers worksheet_set_header_lv(worksheet: WORKSHEET, header: STR) -> ERROR),
    func!(Wrappers worksheet_set_footer_lv(worksheet: WORKSHEET, footer: STR) -> ERROR),
    func!(Wrappers worksheet_merge_range_lv(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        string: STR,
        format: FORMAT,
    ) -> ERROR),

    func!(Worksheet worksheet_write_string(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        string: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_formula(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        formula: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_url(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        url: STR,
        format: FORMAT,
    ) -> ERROR),
    func!(Worksheet worksheet_write_comment(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        string: STR,
    ) -> ERROR),
    func!(Worksheet worksheet_set_header(worksheet: WORKSHEET, header: STR) -> ERROR),
    func!(Worksheet worksheet_set_footer(worksheet: WORKSHEET, footer: STR) -> ERROR),
    func!(Worksheet worksheet_merge_range(
        worksheet: WORKSHEET,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
        string: STR,
        format: FORMAT,
    ) -> ERROR),

    func!(Wrappers chart_add_series_lv(
        chart: CHART,
        categories: STR,
        values: STR,
        y2_axis: U8,
    ) -> SERIES),
    func!(Wrappers chart_series_set_name_lv(series: SERIES, name: STR) -> VOID),
    func!(Wrappers chart_axis_set_name_lv(axis: AXIS, name: STR) -> VOID),
    func!(Wrappers chart_title_set_name_lv(chart: CHART, name: STR) -> VOID),
    func!(Wrappers format_set_font_name_lv(format: FORMAT, font_name: STR) -> VOID),
    func!(Wrappers format_set_num_format_lv(format: FORMAT, num_format: STR) -> VOID),
    func!(Wrappers workbook_add_worksheet_lv(workbook: WORKBOOK, sheetname: STR) -> WORKSHEET),
    func!(Wrappers workbook_add_chartsheet_lv(workbook: WORKBOOK, sheetname: STR) -> CHARTSHEET),
    func!(Wrappers workbook_define_name_lv(workbook: WORKBOOK, name: STR, formula: STR) -> ERROR),
    func!(Wrappers workbook_get_worksheet_by_name_lv(workbook: WORKBOOK, name: STR) -> WORKSHEET),
    func!(Wrappers workbook_get_chartsheet_by_name_lv(workbook: WORKBOOK, name: STR) -> CHARTSHEET),
    func!(Wrappers workbook_validate_sheet_name_lv(workbook: WORKBOOK, sheetname: STR) -> ERROR),
    func!(Wrappers workbook_set_custom_property_string_lv(
        workbook: WORKBOOK,
        name: STR,
        value: STR,
    ) -> ERROR),
    func!(Wrappers worksheet_set_comments_author_lv(worksheet: WORKSHEET, author: STR) -> VOID),
    func!(Wrappers worksheet_insert_textbox_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        text: STR,
    ) -> ERROR),
    func!(Wrappers worksheet_insert_textbox_opt_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        text: STR,
        options: Ty::StructPtr("lxw_textbox_options"),
    ) -> ERROR),
    func!(Wrappers chartsheet_set_header_lv(chartsheet: CHARTSHEET, header: STR) -> ERROR),
    func!(Wrappers chartsheet_set_footer_lv(chartsheet: CHARTSHEET, footer: STR) -> ERROR),
    func!(Wrappers chart_series_set_trendline_name_lv(series: SERIES, name: STR) -> VOID),
    func!(Wrappers chart_axis_set_num_format_lv(axis: AXIS, num_format: STR) -> VOID),
    func!(Wrappers chart_series_set_labels_num_format_lv(series: SERIES, num_format: STR) -> VOID),
    func!(Wrappers chart_series_set_labels_custom_lv(
        series: SERIES,
        values: Ty::Ptr(&Ty::UIntPtr),
        hide_flags: Ty::Ptr(&Ty::U8),
        count: U16,
    ) -> ERROR),
    func!(Wrappers chart_series_set_categories_lv(
        series: SERIES,
        sheetname: STR,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    ) -> VOID),
    func!(Wrappers chart_series_set_values_lv(
        series: SERIES,
        sheetname: STR,
        first_row: ROW,
        first_col: COL,
        last_row: ROW,
        last_col: COL,
    ) -> VOID),
    func!(Wrappers chart_series_set_name_range_lv(
        series: SERIES,
        sheetname: STR,
        row: ROW,
        col: COL,
    ) -> VOID),
    func!(Wrappers chart_axis_set_name_range_lv(
        axis: AXIS,
        sheetname: STR,
        row: ROW,
        col: COL,
    ) -> VOID),
    func!(Wrappers chart_title_set_name_range_lv(
        chart: CHART,
        sheetname: STR,
        row: ROW,
        col: COL,
    ) -> VOID),
    func!(Wrappers workbook_new_lv(filename: STR) -> WORKBOOK),
    func!(Wrappers workbook_new_opt_lv(
        filename: STR,
        options: Ty::StructPtr("lxw_workbook_options"),
    ) -> WORKBOOK),
    func!(Wrappers worksheet_insert_image_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
    ) -> ERROR),
    func!(Wrappers worksheet_insert_image_opt_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Wrappers worksheet_embed_image_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
    ) -> ERROR),
    func!(Wrappers worksheet_embed_image_opt_lv(
        worksheet: WORKSHEET,
        row: ROW,
        col: COL,
        filename: STR,
        options: Ty::StructPtr("lxw_image_options"),
    ) -> ERROR),
    func!(Wrappers worksheet_set_background_lv(worksheet: WORKSHEET, filename: STR) -> ERROR),
    func!(Wrappers workbook_add_vba_project_lv(workbook: WORKBOOK, filename: STR) -> ERROR),
    func!(Wrappers workbook_add_signed_vba_project_lv(
        workbook: WORKBOOK,
        vba_project: STR,
        signature: STR,
    ) -> ERROR),];
