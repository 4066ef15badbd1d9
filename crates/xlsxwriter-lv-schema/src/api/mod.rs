//! The declared surface of the external library

mod enums;
mod functions;
mod structs;

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, SchemaError};
use crate::layout::{self, StructLayout};
use crate::types::{HandleKind, Target, Ty};

/// Suffix of the entry points that convert legacy 8-bit text to UTF-8
pub const LV_SUFFIX: &str = "_lv";

/// Entry points that take a structure of the wrapped call as flat scalars
/// and arrays, so the wrapped call's arguments do not carry over
pub const CALL_SHAPE_ADAPTERS: &[&str] = &[
    "worksheet_filter_column_lv",
    "worksheet_filter_column2_lv",
    "chart_series_set_labels_custom_lv",
];

/// Header section a function is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Workbook,
    Worksheet,
    Chartsheet,
    Chart,
    Format,
    Reference,
    Utility,
    Wrappers,
}

impl Section {
    /// All sections in header order
    pub const ALL: [Section; 8] = [
        Section::Workbook,
        Section::Worksheet,
        Section::Chartsheet,
        Section::Chart,
        Section::Format,
        Section::Reference,
        Section::Utility,
        Section::Wrappers,
    ];

    /// Banner title used in the rendered header
    pub fn title(self) -> &'static str {
        match self {
            Section::Workbook => "Workbook Functions",
            Section::Worksheet => "Worksheet Functions",
            Section::Chartsheet => "Chartsheet Functions",
            Section::Chart => "Chart Functions",
            Section::Format => "Format Functions",
            Section::Reference => "Cell/Range Reference Functions",
            Section::Utility => "Utility Functions",
            Section::Wrappers => "Wrapper Functions (legacy 8-bit text converted to UTF-8)",
        }
    }
}

/// A function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: &'static str,
    pub ty: Ty,
}

/// A function declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Function {
    pub section: Section,
    pub name: &'static str,
    pub ret: Ty,
    pub params: &'static [Param],
}

impl Function {
    /// Whether this entry point converts legacy 8-bit text before forwarding
    pub fn is_lv_wrapper(&self) -> bool {
        self.name.ends_with(LV_SUFFIX)
    }

    pub fn is_call_shape_adapter(&self) -> bool {
        CALL_SHAPE_ADAPTERS.contains(&self.name)
    }

    /// C prototype, without the trailing semicolon
    pub fn prototype(&self) -> String {
        let params = if self.params.is_empty() {
            "void".to_string()
        } else {
            self.params
                .iter()
                .map(|p| join_decl(&p.ty.c_decl(), p.name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{}({})", join_decl(&self.ret.c_decl(), self.name), params)
    }
}

/// A structure field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub ty: Ty,
}

/// A flat structure declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructDef {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl StructDef {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An enumeration constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: &'static str,
    pub value: i64,
}

/// An enumeration declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: &'static str,
    pub variants: &'static [Variant],
}

impl EnumDef {
    /// Numeric value of a constant
    pub fn value_of(&self, variant: &str) -> Option<i64> {
        self.variants
            .iter()
            .find(|v| v.name == variant)
            .map(|v| v.value)
    }
}

/// A scalar typedef (`typedef uint32_t lxw_row_t;`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: &'static str,
    pub ty: Ty,
}

/// The complete descriptor
#[derive(Debug, Serialize)]
pub struct Api {
    pub aliases: &'static [Alias],
    pub handles: &'static [HandleKind],
    pub enums: &'static [EnumDef],
    pub structs: &'static [StructDef],
    pub functions: &'static [Function],
}

static ALIASES: &[Alias] = &[
    Alias {
        name: "lxw_row_t",
        ty: Ty::U32,
    },
    Alias {
        name: "lxw_col_t",
        ty: Ty::U16,
    },
    Alias {
        name: "lxw_color_t",
        ty: Ty::U32,
    },
];

/// The libxlsxwriter surface as exposed to foreign callers
pub static API: Api = Api {
    aliases: ALIASES,
    handles: &HandleKind::ALL,
    enums: enums::ENUMS,
    structs: structs::STRUCTS,
    functions: functions::FUNCTIONS,
};

impl Api {
    /// Look up a function by name
    pub fn function(&self, name: &str) -> Option<&'static Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Look up a structure by name
    pub fn struct_def(&self, name: &str) -> Option<&'static StructDef> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Look up an enumeration by name
    pub fn enum_def(&self, name: &str) -> Option<&'static EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Functions declared in a section, in declaration order
    pub fn functions_in(&self, section: Section) -> impl Iterator<Item = &'static Function> {
        self.functions.iter().filter(move |f| f.section == section)
    }

    /// The legacy-text wrapper of a library function, if one exists
    pub fn lv_wrapper(&self, name: &str) -> Option<&'static Function> {
        if name.ends_with(LV_SUFFIX) {
            return self.function(name);
        }
        self.function(&format!("{name}{LV_SUFFIX}"))
    }

    /// The wrapper of `name` that accepts the same arguments, if one exists
    ///
    /// Call-shape adapters and wrappers whose parameter count differs from
    /// the declared library function are excluded.
    pub fn drop_in_wrapper(&self, name: &str) -> Option<&'static Function> {
        let wrapper = self.lv_wrapper(name)?;
        if wrapper.is_call_shape_adapter() {
            return None;
        }
        match self.function(name) {
            Some(wrapped) if wrapped.params.len() != wrapper.params.len() => None,
            _ => Some(wrapper),
        }
    }

    /// Compute the layout of a declared structure
    pub fn layout(&self, name: &str, target: Target) -> Result<StructLayout> {
        let def = self
            .struct_def(name)
            .ok_or_else(|| SchemaError::UnknownStruct(name.to_string()))?;
        Ok(layout::layout(def, target))
    }

    /// Check internal consistency: unique names and resolvable references
    pub fn validate(&self) -> Result<()> {
        let mut types = HashSet::new();
        let type_names = self
            .aliases
            .iter()
            .map(|a| a.name)
            .chain(self.handles.iter().map(|h| h.c_name()))
            .chain(self.enums.iter().map(|e| e.name))
            .chain(self.structs.iter().map(|s| s.name));
        for name in type_names {
            if !types.insert(name) {
                return Err(SchemaError::DuplicateName(name.to_string()));
            }
        }

        let mut constants = HashSet::new();
        for variant in self.enums.iter().flat_map(|e| e.variants) {
            if !constants.insert(variant.name) {
                return Err(SchemaError::DuplicateName(variant.name.to_string()));
            }
        }

        let mut functions = HashSet::new();
        for function in self.functions {
            if !functions.insert(function.name) {
                return Err(SchemaError::DuplicateName(function.name.to_string()));
            }
            let tys = std::iter::once(&function.ret).chain(function.params.iter().map(|p| &p.ty));
            for ty in tys {
                self.check_reference(function.name, ty)?;
            }
        }

        for def in self.structs {
            for field in def.fields {
                self.check_reference(def.name, &field.ty)?;
            }
        }

        if self.enum_def("lxw_error").is_none() {
            return Err(SchemaError::UnknownEnum("lxw_error".into()));
        }

        Ok(())
    }

    fn check_reference(&self, owner: &str, ty: &Ty) -> Result<()> {
        match ty.referenced_struct() {
            Some(name) if self.struct_def(name).is_none() => Err(SchemaError::DanglingReference {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn join_decl(ty: &str, name: &str) -> String {
    if ty.ends_with('*') {
        format!("{ty}{name}")
    } else {
        format!("{ty} {name}")
    }
}
