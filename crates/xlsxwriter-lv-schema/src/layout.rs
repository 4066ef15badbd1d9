//! C structure layout for a given target width

use serde::Serialize;

use crate::api::StructDef;
use crate::types::Target;

/// Offset and size of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

/// Layout of a structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructLayout {
    pub name: &'static str,
    pub target: Target,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl StructLayout {
    /// Offset of a field by name
    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().find(|f| f.name == field).map(|f| f.offset)
    }
}

/// Lay out a structure using the natural alignment rules of the C ABI
pub fn layout(def: &StructDef, target: Target) -> StructLayout {
    let mut offset = 0;
    let mut align = 1;
    let mut fields = Vec::with_capacity(def.fields.len());

    for field in def.fields {
        let (field_size, field_align) = field.ty.size_align(target);
        offset = align_up(offset, field_align);
        fields.push(FieldLayout {
            name: field.name,
            offset,
            size: field_size,
        });
        offset += field_size;
        align = align.max(field_align);
    }

    StructLayout {
        name: def.name,
        target,
        size: align_up(offset, align),
        align,
        fields,
    }
}

fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) / align * align
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::API;

    #[test]
    fn test_data_label_layout() {
        let l64 = API.layout("lxw_chart_data_label", Target::Win64).unwrap();
        assert_eq!(l64.size, 48);
        assert_eq!(l64.offset_of("hide"), Some(8));
        assert_eq!(l64.offset_of("font"), Some(16));
        assert_eq!(l64.offset_of("pattern"), Some(40));

        let l32 = API.layout("lxw_chart_data_label", Target::Win32).unwrap();
        assert_eq!(l32.size, 24);
        assert_eq!(l32.offset_of("font"), Some(8));
    }

    #[test]
    fn test_filter_rule_layout() {
        let l64 = API.layout("lxw_filter_rule", Target::Win64).unwrap();
        assert_eq!(l64.offset_of("value_string"), Some(8));
        assert_eq!(l64.offset_of("value"), Some(16));
        assert_eq!(l64.size, 24);

        // double stays 8-aligned on 32-bit Windows
        let l32 = API.layout("lxw_filter_rule", Target::Win32).unwrap();
        assert_eq!(l32.offset_of("value"), Some(8));
        assert_eq!(l32.size, 16);
    }

    #[test]
    fn test_inline_array_layout() {
        let l = API.layout("lxw_chart_gradient_fill", Target::Win32).unwrap();
        assert_eq!(l.offset_of("colors"), Some(4));
        assert_eq!(l.offset_of("num_colors"), Some(20));
        assert_eq!(l.offset_of("angle"), Some(24));
        assert_eq!(l.size, 32);
    }

    #[test]
    fn test_reference_struct_layout() {
        let l = API.layout("lxw_range_ref", Target::Win64).unwrap();
        assert_eq!(l.offset_of("first_col"), Some(4));
        assert_eq!(l.offset_of("last_row"), Some(8));
        assert_eq!(l.offset_of("last_col"), Some(12));
        assert_eq!(l.size, 16);
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), 0);
        assert_eq!(align_up(1, 8), 8);
        assert_eq!(align_up(9, 4), 12);
    }
}
