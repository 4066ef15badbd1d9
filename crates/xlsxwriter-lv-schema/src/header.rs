//! Rendering of the preprocessor-free C header
//!
//! The output is meant for mechanical import tools: no `#` directives,
//! every integer width spelled out through typedefs, handles declared as
//! pointer-sized integers for the chosen target.

use std::fmt::Write;

use crate::api::{Api, Section};
use crate::types::Target;

/// Render the complete header for a target width
pub fn render_header(api: &Api, target: Target) -> String {
    let mut out = String::new();
    let bits = target.pointer_width() * 8;

    let _ = writeln!(out, "/*");
    let _ = writeln!(out, " * libxlsxwriter_LV.h - flattened libxlsxwriter interface ({bits}-bit)");
    let _ = writeln!(out, " *");
    let _ = writeln!(out, " * Generated file. Contains no preprocessor directives so that");
    let _ = writeln!(out, " * shared library import wizards can parse it. Handles are");
    let _ = writeln!(out, " * {bits}-bit unsigned integers holding library object pointers.");
    let _ = writeln!(out, " */");
    out.push('\n');

    render_basic_types(&mut out, target);
    render_aliases(&mut out, api);
    render_handles(&mut out, api);
    render_enums(&mut out, api);
    render_structs(&mut out, api);

    for section in Section::ALL {
        let mut functions = api.functions_in(section).peekable();
        if functions.peek().is_none() {
            continue;
        }
        banner(&mut out, section.title());
        for function in functions {
            let _ = writeln!(out, "{};", function.prototype());
        }
        out.push('\n');
    }

    out
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(76);
    let _ = writeln!(out, "/* {rule}");
    let _ = writeln!(out, " * {title}");
    let _ = writeln!(out, " * {rule} */");
    out.push('\n');
}

fn render_basic_types(out: &mut String, target: Target) {
    banner(out, "Basic Type Definitions");
    let basics = [
        ("signed char", "int8_t"),
        ("signed short", "int16_t"),
        ("signed int", "int32_t"),
        ("signed long long", "int64_t"),
        ("unsigned char", "uint8_t"),
        ("unsigned short", "uint16_t"),
        ("unsigned int", "uint32_t"),
        ("unsigned long long", "uint64_t"),
        (target.pointer_sized_uint(), "size_t"),
        (target.pointer_sized_uint(), "uintptr_t"),
    ];
    for (c_type, name) in basics {
        let _ = writeln!(out, "typedef {c_type} {name};");
    }
    out.push('\n');
}

fn render_aliases(out: &mut String, api: &Api) {
    banner(out, "Library-Specific Type Definitions");
    for alias in api.aliases {
        let _ = writeln!(out, "typedef {} {};", alias.ty.c_decl(), alias.name);
    }
    out.push('\n');
}

fn render_handles(out: &mut String, api: &Api) {
    banner(out, "Opaque Handle Types");
    for handle in api.handles {
        let _ = writeln!(out, "typedef uintptr_t {};", handle.c_name());
    }
    out.push('\n');
}

fn render_enums(out: &mut String, api: &Api) {
    banner(out, "Enumerations");
    for def in api.enums {
        let hex = def.name.ends_with("_color");
        let _ = writeln!(out, "typedef enum {} {{", def.name);
        let last = def.variants.len().saturating_sub(1);
        for (i, variant) in def.variants.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            if hex {
                let _ = writeln!(out, "    {} = 0x{:06X}{sep}", variant.name, variant.value);
            } else {
                let _ = writeln!(out, "    {} = {}{sep}", variant.name, variant.value);
            }
        }
        let _ = writeln!(out, "}} {};", def.name);
        out.push('\n');
    }
}

fn render_structs(out: &mut String, api: &Api) {
    banner(out, "Structures");
    for def in api.structs {
        let _ = writeln!(out, "typedef struct {} {{", def.name);
        for field in def.fields {
            let decl = field.ty.c_decl();
            match field.ty {
                crate::types::Ty::Array(_, len) => {
                    let _ = writeln!(out, "    {decl} {}[{len}];", field.name);
                }
                _ if decl.ends_with('*') => {
                    let _ = writeln!(out, "    {decl}{};", field.name);
                }
                _ => {
                    let _ = writeln!(out, "    {decl} {};", field.name);
                }
            }
        }
        let _ = writeln!(out, "}} {};", def.name);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::API;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_preprocessor_directives() {
        for target in [Target::Win32, Target::Win64] {
            let header = render_header(&API, target);
            assert!(header.lines().all(|l| !l.trim_start().starts_with('#')));
        }
    }

    #[test]
    fn test_pointer_width_typedefs() {
        let h32 = render_header(&API, Target::Win32);
        assert!(h32.contains("typedef unsigned long uintptr_t;"));
        let h64 = render_header(&API, Target::Win64);
        assert!(h64.contains("typedef unsigned long long uintptr_t;"));
        assert!(h64.contains("typedef uintptr_t lxw_workbook;"));
    }

    #[test]
    fn test_every_function_declared_once() {
        let header = render_header(&API, Target::Win64);
        for function in API.functions {
            let needle = format!("{};", function.prototype());
            assert_eq!(header.matches(&needle).count(), 1, "{}", function.name);
        }
    }

    #[test]
    fn test_struct_rendering() {
        let header = render_header(&API, Target::Win32);
        let expected = "typedef struct lxw_filter_rule {\n    uint8_t criteria;\n    const char *value_string;\n    double value;\n} lxw_filter_rule;\n";
        assert!(header.contains(expected), "{header}");
        assert!(header.contains("    lxw_color_t colors[4];\n"));
    }

    #[test]
    fn test_enum_rendering() {
        let header = render_header(&API, Target::Win32);
        assert!(header.contains("    LXW_FILTER_AND = 0,\n    LXW_FILTER_OR = 1\n} lxw_filter_operator;"));
        assert!(header.contains("    LXW_COLOR_WHITE = 0xFFFFFF\n"));
    }

    #[test]
    fn test_label_wrapper_prototype() {
        let header = render_header(&API, Target::Win64);
        let line = header
            .lines()
            .find(|l| l.contains("chart_series_set_labels_custom_lv("))
            .unwrap();
        assert_eq!(
            line,
            "lxw_error chart_series_set_labels_custom_lv(lxw_chart_series series, uintptr_t *values, uint8_t *hide_flags, uint16_t count);"
        );
    }
}
