//! Splitting and cleaning of C call arguments

use once_cell::sync::Lazy;
use regex::Regex;

static CELL_MACRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^CELL\s*\(\s*"([^"]+)"\s*\)"#).expect("cell macro regex"));
static RANGE_MACRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^RANGE\s*\(\s*"([^"]+)"\s*\)"#).expect("range macro regex"));

/// Split an argument list at top-level commas.
///
/// Commas inside string literals, parentheses or braces do not split.
pub fn split_args(args: &str) -> Vec<String> {
    if args.trim().is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut parens = 0i32;
    let mut braces = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for c in args.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                current.push(c);
                escaped = true;
            }
            '"' => {
                in_string = !in_string;
                current.push(c);
            }
            _ if in_string => current.push(c),
            '(' => {
                parens += 1;
                current.push(c);
            }
            ')' => {
                parens -= 1;
                current.push(c);
            }
            '{' => {
                braces += 1;
                current.push(c);
            }
            '}' => {
                braces -= 1;
                current.push(c);
            }
            ',' if parens == 0 && braces == 0 => {
                out.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        out.push(current.trim().to_string());
    }
    out
}

/// Reduce a C argument to the value a graphical caller would wire in
pub fn clean_arg(arg: &str) -> String {
    let arg = arg.trim();

    if let Some(caps) = CELL_MACRO.captures(arg).or_else(|| RANGE_MACRO.captures(arg)) {
        return caps[1].to_string();
    }
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        return arg[1..arg.len() - 1].to_string();
    }
    if arg == "NULL" {
        return String::new();
    }
    if let Some(rest) = arg.strip_prefix('&') {
        return rest.to_string();
    }
    arg.to_string()
}
