//! Enumerations, preserved by numeric value.

use super::{EnumDef, Variant};

macro_rules! enumeration {
    ($name:ident { $($variant:ident = $value:expr),* $(,)? }) => {
        EnumDef {
            name: stringify!($name),
            variants: &[$(Variant { name: stringify!($variant), value: $value }),*],
        }
    };
}

pub(crate) static ENUMS: &[EnumDef] = &[
    enumeration!(lxw_error {
        LXW_NO_ERROR = 0,
        LXW_ERROR_MEMORY_MALLOC_FAILED = 1,
        LXW_ERROR_CREATING_XLSX_FILE = 2,
        LXW_ERROR_CREATING_TMPFILE = 3,
        LXW_ERROR_READING_TMPFILE = 4,
        LXW_ERROR_ZIP_FILE_OPERATION = 5,
        LXW_ERROR_ZIP_PARAMETER_ERROR = 6,
        LXW_ERROR_ZIP_BAD_ZIP_FILE = 7,
        LXW_ERROR_ZIP_INTERNAL_ERROR = 8,
        LXW_ERROR_ZIP_FILE_ADD = 9,
        LXW_ERROR_ZIP_CLOSE = 10,
        LXW_ERROR_FEATURE_NOT_SUPPORTED = 11,
        LXW_ERROR_NULL_PARAMETER_IGNORED = 12,
        LXW_ERROR_PARAMETER_VALIDATION = 13,
        LXW_ERROR_PARAMETER_IS_EMPTY = 14,
        LXW_ERROR_SHEETNAME_LENGTH_EXCEEDED = 15,
        LXW_ERROR_INVALID_SHEETNAME_CHARACTER = 16,
        LXW_ERROR_SHEETNAME_START_END_APOSTROPHE = 17,
        LXW_ERROR_SHEETNAME_ALREADY_USED = 18,
        LXW_ERROR_32_STRING_LENGTH_EXCEEDED = 19,
        LXW_ERROR_128_STRING_LENGTH_EXCEEDED = 20,
        LXW_ERROR_255_STRING_LENGTH_EXCEEDED = 21,
        LXW_ERROR_MAX_STRING_LENGTH_EXCEEDED = 22,
        LXW_ERROR_SHARED_STRING_INDEX_NOT_FOUND = 23,
        LXW_ERROR_WORKSHEET_INDEX_OUT_OF_RANGE = 24,
        LXW_ERROR_WORKSHEET_MAX_URL_LENGTH_EXCEEDED = 25,
        LXW_ERROR_WORKSHEET_MAX_NUMBER_URLS_EXCEEDED = 26,
        LXW_ERROR_IMAGE_DIMENSIONS = 27,
    }),
    enumeration!(lxw_chart_type {
        LXW_CHART_NONE = 0,
        LXW_CHART_AREA = 1,
        LXW_CHART_AREA_STACKED = 2,
        LXW_CHART_AREA_STACKED_PERCENT = 3,
        LXW_CHART_BAR = 4,
        LXW_CHART_BAR_STACKED = 5,
        LXW_CHART_BAR_STACKED_PERCENT = 6,
        LXW_CHART_COLUMN = 7,
        LXW_CHART_COLUMN_STACKED = 8,
        LXW_CHART_COLUMN_STACKED_PERCENT = 9,
        LXW_CHART_DOUGHNUT = 10,
        LXW_CHART_LINE = 11,
        LXW_CHART_LINE_STACKED = 12,
        LXW_CHART_LINE_STACKED_PERCENT = 13,
        LXW_CHART_PIE = 14,
        LXW_CHART_SCATTER = 15,
        LXW_CHART_SCATTER_STRAIGHT = 16,
        LXW_CHART_SCATTER_STRAIGHT_WITH_MARKERS = 17,
        LXW_CHART_SCATTER_SMOOTH = 18,
        LXW_CHART_SCATTER_SMOOTH_WITH_MARKERS = 19,
        LXW_CHART_RADAR = 20,
        LXW_CHART_RADAR_WITH_MARKERS = 21,
        LXW_CHART_RADAR_FILLED = 22,
        LXW_CHART_STOCK = 23,
    }),
    enumeration!(lxw_chart_legend_position {
        LXW_CHART_LEGEND_NONE = 0,
        LXW_CHART_LEGEND_RIGHT = 1,
        LXW_CHART_LEGEND_LEFT = 2,
        LXW_CHART_LEGEND_TOP = 3,
        LXW_CHART_LEGEND_BOTTOM = 4,
        LXW_CHART_LEGEND_TOP_RIGHT = 5,
        LXW_CHART_LEGEND_OVERLAY_RIGHT = 6,
        LXW_CHART_LEGEND_OVERLAY_LEFT = 7,
        LXW_CHART_LEGEND_OVERLAY_TOP_RIGHT = 8,
    }),
    enumeration!(lxw_chart_marker_type {
        LXW_CHART_MARKER_AUTOMATIC = 0,
        LXW_CHART_MARKER_NONE = 1,
        LXW_CHART_MARKER_SQUARE = 2,
        LXW_CHART_MARKER_DIAMOND = 3,
        LXW_CHART_MARKER_TRIANGLE = 4,
        LXW_CHART_MARKER_X = 5,
        LXW_CHART_MARKER_STAR = 6,
        LXW_CHART_MARKER_SHORT_DASH = 7,
        LXW_CHART_MARKER_LONG_DASH = 8,
        LXW_CHART_MARKER_CIRCLE = 9,
        LXW_CHART_MARKER_PLUS = 10,
        LXW_CHART_MARKER_DOT = 11,
    }),
    enumeration!(lxw_chart_axis_label_position {
        LXW_CHART_AXIS_LABEL_POSITION_NEXT_TO = 0,
        LXW_CHART_AXIS_LABEL_POSITION_HIGH = 1,
        LXW_CHART_AXIS_LABEL_POSITION_LOW = 2,
        LXW_CHART_AXIS_LABEL_POSITION_NONE = 3,
    }),
    enumeration!(lxw_alignment {
        LXW_ALIGN_NONE = 0,
        LXW_ALIGN_LEFT = 1,
        LXW_ALIGN_CENTER = 2,
        LXW_ALIGN_RIGHT = 3,
        LXW_ALIGN_FILL = 4,
        LXW_ALIGN_JUSTIFY = 5,
        LXW_ALIGN_CENTER_ACROSS = 6,
        LXW_ALIGN_DISTRIBUTED = 7,
        LXW_ALIGN_VERTICAL_TOP = 8,
        LXW_ALIGN_VERTICAL_BOTTOM = 9,
        LXW_ALIGN_VERTICAL_CENTER = 10,
        LXW_ALIGN_VERTICAL_JUSTIFY = 11,
        LXW_ALIGN_VERTICAL_DISTRIBUTED = 12,
    }),
    enumeration!(lxw_border_style {
        LXW_BORDER_NONE = 0,
        LXW_BORDER_THIN = 1,
        LXW_BORDER_MEDIUM = 2,
        LXW_BORDER_DASHED = 3,
        LXW_BORDER_DOTTED = 4,
        LXW_BORDER_THICK = 5,
        LXW_BORDER_DOUBLE = 6,
        LXW_BORDER_HAIR = 7,
        LXW_BORDER_MEDIUM_DASHED = 8,
        LXW_BORDER_DASH_DOT = 9,
        LXW_BORDER_MEDIUM_DASH_DOT = 10,
        LXW_BORDER_DASH_DOT_DOT = 11,
        LXW_BORDER_MEDIUM_DASH_DOT_DOT = 12,
        LXW_BORDER_SLANT_DASH_DOT = 13,
    }),
    enumeration!(lxw_diagonal_border_type {
        LXW_DIAGONAL_BORDER_UP = 1,
        LXW_DIAGONAL_BORDER_DOWN = 2,
        LXW_DIAGONAL_BORDER_UP_DOWN = 3,
    }),
    enumeration!(lxw_pattern_type {
        LXW_PATTERN_NONE = 0,
        LXW_PATTERN_SOLID = 1,
        LXW_PATTERN_MEDIUM_GRAY = 2,
        LXW_PATTERN_DARK_GRAY = 3,
        LXW_PATTERN_LIGHT_GRAY = 4,
        LXW_PATTERN_DARK_HORIZONTAL = 5,
        LXW_PATTERN_DARK_VERTICAL = 6,
        LXW_PATTERN_DARK_DOWN = 7,
        LXW_PATTERN_DARK_UP = 8,
        LXW_PATTERN_DARK_GRID = 9,
        LXW_PATTERN_DARK_TRELLIS = 10,
        LXW_PATTERN_LIGHT_HORIZONTAL = 11,
        LXW_PATTERN_LIGHT_VERTICAL = 12,
        LXW_PATTERN_LIGHT_DOWN = 13,
        LXW_PATTERN_LIGHT_UP = 14,
        LXW_PATTERN_LIGHT_GRID = 15,
        LXW_PATTERN_LIGHT_TRELLIS = 16,
        LXW_PATTERN_GRAY_125 = 17,
        LXW_PATTERN_GRAY_0625 = 18,
    }),
    enumeration!(lxw_chart_gradient_fill_type {
        LXW_CHART_GRADIENT_FILL_LINEAR = 1,
        LXW_CHART_GRADIENT_FILL_RADIAL = 2,
        LXW_CHART_GRADIENT_FILL_RECTANGULAR = 3,
        LXW_CHART_GRADIENT_FILL_PATH = 4,
    }),
    enumeration!(lxw_defined_color {
        LXW_COLOR_BLACK = 0x000000,
        LXW_COLOR_NAVY = 0x000080,
        LXW_COLOR_BLUE = 0x0000FF,
        LXW_COLOR_GREEN = 0x008000,
        LXW_COLOR_CYAN = 0x00FFFF,
        LXW_COLOR_LIME = 0x00FF00,
        LXW_COLOR_ORANGE = 0xFF6600,
        LXW_COLOR_BROWN = 0x800000,
        LXW_COLOR_PURPLE = 0x800080,
        LXW_COLOR_GRAY = 0x808080,
        LXW_COLOR_SILVER = 0xC0C0C0,
        LXW_COLOR_RED = 0xFF0000,
        LXW_COLOR_MAGENTA = 0xFF00FF,
        LXW_COLOR_PINK = 0xFF00FF,
        LXW_COLOR_YELLOW = 0xFFFF00,
        LXW_COLOR_WHITE = 0xFFFFFF,
    }),
    enumeration!(lxw_format_underlines {
        LXW_UNDERLINE_NONE = 0,
        LXW_UNDERLINE_SINGLE = 1,
        LXW_UNDERLINE_DOUBLE = 2,
        LXW_UNDERLINE_SINGLE_ACCOUNTING = 3,
        LXW_UNDERLINE_DOUBLE_ACCOUNTING = 4,
    }),
    enumeration!(lxw_format_scripts {
        LXW_FONT_SUPERSCRIPT = 1,
        LXW_FONT_SUBSCRIPT = 2,
    }),
    enumeration!(lxw_filter_criteria {
        LXW_FILTER_CRITERIA_NONE = 0,
        LXW_FILTER_CRITERIA_EQUAL_TO = 1,
        LXW_FILTER_CRITERIA_NOT_EQUAL_TO = 2,
        LXW_FILTER_CRITERIA_GREATER_THAN = 3,
        LXW_FILTER_CRITERIA_LESS_THAN = 4,
        LXW_FILTER_CRITERIA_GREATER_THAN_OR_EQUAL_TO = 5,
        LXW_FILTER_CRITERIA_LESS_THAN_OR_EQUAL_TO = 6,
        LXW_FILTER_CRITERIA_BLANKS = 7,
        LXW_FILTER_CRITERIA_NON_BLANKS = 8,
    }),
    enumeration!(lxw_filter_operator {
        LXW_FILTER_AND = 0,
        LXW_FILTER_OR = 1,
    }),
];
