//! Parsing of a single C example program

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::args::{clean_arg, split_args};
use crate::error::{RecipeError, Result};

static CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\(\s*([^;]*?)\s*\)\s*;").expect("call regex"));
static DECL_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(lxw_\w+)\s*\*\s*(\w+)\s*=\s*(\w+)\s*\(\s*([^;]*?)\s*\)\s*;")
        .expect("declaration regex")
});
static DATA_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s+(\w+)\s*\[([^\]]*)\]\s*(?:\[([^\]]*)\])?\s*=\s*\{([^;]+)\};")
        .expect("data array regex")
});
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[^*]*\*/").expect("block comment regex"));
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n]*").expect("line comment regex"));
static ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("row regex"));
static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*\s*\n?\s*\*?\s*([^\n*]+)").expect("description regex"));

/// Prefixes of library function names
const LIBRARY_PREFIXES: &[&str] = &[
    "workbook_",
    "worksheet_",
    "chart_",
    "format_",
    "chartsheet_",
    "lxw_",
    "table_",
];

const DESCRIPTION_PREFIXES: &[&str] = &["Example of ", "An example of ", "A demo of "];

pub fn is_library_function(name: &str) -> bool {
    LIBRARY_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// A literal found in a data array initialiser
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl DataValue {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let number = if raw.contains('.') {
            raw.parse().ok().map(DataValue::Float)
        } else {
            raw.parse().ok().map(DataValue::Int)
        };
        number.unwrap_or_else(|| {
            let text = raw
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(raw);
            DataValue::Text(text.to_string())
        })
    }
}

/// Values of a one- or two-dimensional array initialiser
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataArray {
    Flat(Vec<DataValue>),
    Table(Vec<Vec<DataValue>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedArray {
    pub name: String,
    pub value: DataArray,
}

/// Kind of library object a variable holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Workbook,
    Worksheet,
    Chartsheet,
    Series,
    Chart,
    Format,
}

impl ObjectKind {
    fn from_c_type(c_type: &str) -> Option<Self> {
        let c_type = c_type.to_ascii_lowercase();
        [
            ("workbook", ObjectKind::Workbook),
            ("worksheet", ObjectKind::Worksheet),
            ("chartsheet", ObjectKind::Chartsheet),
            ("series", ObjectKind::Series),
            ("chart", ObjectKind::Chart),
            ("format", ObjectKind::Format),
        ]
        .into_iter()
        .find(|(needle, _)| c_type.contains(needle))
        .map(|(_, kind)| kind)
    }
}

/// One library call, in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub line: usize,
    pub function: String,
    pub args: Vec<String>,
    /// Variable receiving the result, empty for standalone calls
    pub assigns_to: String,
}

/// Everything extracted from one example file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedExample {
    pub file: String,
    pub path: String,
    pub description: String,
    pub data_arrays: Vec<NamedArray>,
    pub objects: BTreeMap<String, ObjectKind>,
    pub operations: Vec<Operation>,
}

impl ParsedExample {
    /// Read and parse an example file; invalid UTF-8 is replaced
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| RecipeError::io(path, e))?;
        let source = String::from_utf8_lossy(&bytes);
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut parsed = Self::parse(&source);
        parsed.file = file;
        parsed.path = path.display().to_string();
        log::debug!(
            "{}: {} operations, {} data arrays",
            parsed.file,
            parsed.operations.len(),
            parsed.data_arrays.len()
        );
        Ok(parsed)
    }

    /// Parse example source text
    pub fn parse(source: &str) -> Self {
        let mut objects = BTreeMap::new();
        let mut operations = Vec::new();

        for caps in DECL_CALL.captures_iter(source) {
            let function = &caps[3];
            if !is_library_function(function) {
                continue;
            }
            let var = caps[2].to_string();
            if let Some(kind) = ObjectKind::from_c_type(&caps[1]) {
                objects.insert(var.clone(), kind);
            }
            operations.push(Operation {
                line: line_of(source, caps.get(0).map_or(0, |m| m.start())),
                function: function.to_string(),
                args: cleaned(&caps[4]),
                assigns_to: var,
            });
        }

        for caps in CALL.captures_iter(source) {
            let function = &caps[1];
            if !is_library_function(function) {
                continue;
            }
            let Some(whole) = caps.get(0) else { continue };
            if is_declaration_line(source, whole.start(), whole.end()) {
                continue;
            }
            operations.push(Operation {
                line: line_of(source, whole.start()),
                function: function.to_string(),
                args: cleaned(&caps[2]),
                assigns_to: String::new(),
            });
        }

        operations.sort_by_key(|op| op.line);
        let mut seen = HashSet::new();
        operations.retain(|op| seen.insert(op.line));

        Self {
            file: String::new(),
            path: String::new(),
            description: description(source),
            data_arrays: data_arrays(source),
            objects,
            operations,
        }
    }
}

fn cleaned(args: &str) -> Vec<String> {
    split_args(args).iter().map(|a| clean_arg(a)).collect()
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Whether the call sits on a `type *var = call(...)` line already captured
fn is_declaration_line(source: &str, start: usize, end: usize) -> bool {
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..end];
    match line.find('=') {
        Some(eq) => line[..eq].contains('*'),
        None => false,
    }
}

/// First line of the leading block comment, without boilerplate prefixes
pub fn description(source: &str) -> String {
    let Some(caps) = DESCRIPTION.captures(source) else {
        return String::new();
    };
    let mut desc = caps[1].trim();
    for prefix in DESCRIPTION_PREFIXES {
        if let Some(rest) = desc.strip_prefix(prefix) {
            desc = rest;
        }
    }
    desc.to_string()
}

/// Array initialisers such as `double data[] = {1, 2.5};`
pub fn data_arrays(source: &str) -> Vec<NamedArray> {
    let mut arrays: Vec<NamedArray> = Vec::new();

    for caps in DATA_ARRAY.captures_iter(source) {
        let name = caps[2].to_string();
        let body = BLOCK_COMMENT.replace_all(&caps[5], "");
        let body = LINE_COMMENT.replace_all(&body, "");
        let body = body.trim();

        let value = if caps.get(4).is_some() {
            DataArray::Table(
                ROW.captures_iter(body)
                    .map(|row| values(&row[1], |v| v))
                    .collect(),
            )
        } else {
            DataArray::Flat(values(body, |v| v.trim_matches(|c| c == '{' || c == '}')))
        };

        match arrays.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => arrays.push(NamedArray { name, value }),
        }
    }

    arrays
}

fn values(list: &str, strip: impl Fn(&str) -> &str) -> Vec<DataValue> {
    list.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| DataValue::parse(strip(v)))
        .collect()
}
