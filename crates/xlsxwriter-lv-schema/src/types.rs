//! Primitive and handle types of the flattened descriptor

use serde::Serialize;

/// Target the descriptor is laid out or rendered for.
///
/// The consuming tool runs on Windows, so both targets use the Windows C ABI:
/// 8-byte types are 8-byte aligned inside structures on either width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    /// 32-bit DLL (handles are 4 bytes)
    Win32,
    /// 64-bit DLL (handles are 8 bytes)
    Win64,
}

impl Target {
    /// Size of a pointer (and of every handle) in bytes
    pub fn pointer_width(self) -> usize {
        match self {
            Target::Win32 => 4,
            Target::Win64 => 8,
        }
    }

    /// Target matching the pointer width of the running process
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            Target::Win64
        } else {
            Target::Win32
        }
    }

    /// Select a target from a bit width (32 or 64)
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Target::Win32),
            64 => Some(Target::Win64),
            _ => None,
        }
    }

    /// C spelling of the unsigned integer type as wide as a pointer
    pub(crate) fn pointer_sized_uint(self) -> &'static str {
        match self {
            Target::Win32 => "unsigned long",
            Target::Win64 => "unsigned long long",
        }
    }
}

/// Kind of library object an opaque handle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandleKind {
    Workbook,
    Worksheet,
    Chartsheet,
    Chart,
    ChartSeries,
    ChartAxis,
    Format,
    SeriesErrorBars,
    Styles,
    Relationships,
    Drawing,
    FileHandle,
}

impl HandleKind {
    /// All handle kinds, in declaration order
    pub const ALL: [HandleKind; 12] = [
        HandleKind::Workbook,
        HandleKind::Worksheet,
        HandleKind::Chartsheet,
        HandleKind::Chart,
        HandleKind::ChartSeries,
        HandleKind::ChartAxis,
        HandleKind::Format,
        HandleKind::SeriesErrorBars,
        HandleKind::Styles,
        HandleKind::Relationships,
        HandleKind::Drawing,
        HandleKind::FileHandle,
    ];

    /// Type name used in the C declarations
    pub fn c_name(self) -> &'static str {
        match self {
            HandleKind::Workbook => "lxw_workbook",
            HandleKind::Worksheet => "lxw_worksheet",
            HandleKind::Chartsheet => "lxw_chartsheet",
            HandleKind::Chart => "lxw_chart",
            HandleKind::ChartSeries => "lxw_chart_series",
            HandleKind::ChartAxis => "lxw_chart_axis",
            HandleKind::Format => "lxw_format",
            HandleKind::SeriesErrorBars => "lxw_series_error_bars",
            HandleKind::Styles => "lxw_styles",
            HandleKind::Relationships => "lxw_relationships",
            HandleKind::Drawing => "lxw_drawing",
            HandleKind::FileHandle => "lxw_file_handle",
        }
    }
}

/// A type as it appears in a declaration.
///
/// Only fixed-width scalars, handles, C strings and single-level pointers
/// are representable; nested pointer types cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Ty {
    Void,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    /// C `int`
    Int,
    /// `size_t`
    Size,
    /// `uintptr_t`, element type of address arrays
    UIntPtr,
    /// Address of a string or structure carried as an integer
    Addr,
    /// `lxw_row_t`
    Row,
    /// `lxw_col_t`
    Col,
    /// `lxw_color_t`
    Color,
    /// `const char *`
    Str,
    /// `const unsigned char *`
    Bytes,
    /// `lxw_error`
    Error,
    Handle(HandleKind),
    /// Pointer to a declared structure
    StructPtr(&'static str),
    /// Pointer to a scalar (out-parameters and flat arrays)
    Ptr(&'static Ty),
    /// Fixed-length inline array (structure fields only)
    Array(&'static Ty, usize),
}

impl Ty {
    /// C spelling of the type
    pub fn c_decl(&self) -> String {
        match self {
            Ty::Void => "void".into(),
            Ty::I8 => "int8_t".into(),
            Ty::U8 => "uint8_t".into(),
            Ty::I16 => "int16_t".into(),
            Ty::U16 => "uint16_t".into(),
            Ty::I32 => "int32_t".into(),
            Ty::U32 => "uint32_t".into(),
            Ty::I64 => "int64_t".into(),
            Ty::U64 => "uint64_t".into(),
            Ty::F32 => "float".into(),
            Ty::F64 => "double".into(),
            Ty::Int => "int".into(),
            Ty::Size => "size_t".into(),
            Ty::UIntPtr | Ty::Addr => "uintptr_t".into(),
            Ty::Row => "lxw_row_t".into(),
            Ty::Col => "lxw_col_t".into(),
            Ty::Color => "lxw_color_t".into(),
            Ty::Str => "const char *".into(),
            Ty::Bytes => "const unsigned char *".into(),
            Ty::Error => "lxw_error".into(),
            Ty::Handle(kind) => kind.c_name().into(),
            Ty::StructPtr(name) => format!("{name} *"),
            Ty::Ptr(inner) => format!("{} *", inner.c_decl()),
            Ty::Array(inner, _) => inner.c_decl(),
        }
    }

    /// Size and alignment in bytes on the given target
    pub fn size_align(&self, target: Target) -> (usize, usize) {
        let ptr = target.pointer_width();
        match self {
            Ty::Void => (0, 1),
            Ty::I8 | Ty::U8 => (1, 1),
            Ty::I16 | Ty::U16 | Ty::Col => (2, 2),
            Ty::I32 | Ty::U32 | Ty::F32 | Ty::Int | Ty::Row | Ty::Color | Ty::Error => (4, 4),
            Ty::I64 | Ty::U64 | Ty::F64 => (8, 8),
            Ty::Size
            | Ty::UIntPtr
            | Ty::Addr
            | Ty::Str
            | Ty::Bytes
            | Ty::Handle(_)
            | Ty::StructPtr(_)
            | Ty::Ptr(_) => (ptr, ptr),
            Ty::Array(inner, len) => {
                let (size, align) = inner.size_align(target);
                (size * len, align)
            }
        }
    }

    /// Name of the structure this type points to, if any
    pub fn referenced_struct(&self) -> Option<&'static str> {
        match self {
            Ty::StructPtr(name) => Some(*name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_sized_types_follow_target() {
        for ty in [Ty::Addr, Ty::Str, Ty::Handle(HandleKind::Workbook), Ty::Ptr(&Ty::Row)] {
            assert_eq!(ty.size_align(Target::Win32), (4, 4));
            assert_eq!(ty.size_align(Target::Win64), (8, 8));
        }
    }

    #[test]
    fn test_array_size() {
        let colors = Ty::Array(&Ty::Color, 4);
        assert_eq!(colors.size_align(Target::Win32), (16, 4));
        assert_eq!(colors.c_decl(), "lxw_color_t");
    }

    #[test]
    fn test_c_decl() {
        assert_eq!(Ty::Ptr(&Ty::Col).c_decl(), "lxw_col_t *");
        assert_eq!(Ty::StructPtr("lxw_datetime").c_decl(), "lxw_datetime *");
        assert_eq!(Ty::Handle(HandleKind::ChartSeries).c_decl(), "lxw_chart_series");
    }

    #[test]
    fn test_target_from_bits() {
        assert_eq!(Target::from_bits(32), Some(Target::Win32));
        assert_eq!(Target::from_bits(64), Some(Target::Win64));
        assert_eq!(Target::from_bits(16), None);
    }
}
