use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn lvxlsx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lvxlsx"))
        .args(args)
        .env_remove("XLSXWRITER_LV_CODEPAGE")
        .env_remove("XLSXWRITER_LV_STRICT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lvxlsx")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_header_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xlsxwriter_lv.h");

    let output = lvxlsx(&["header", "--bits", "32", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());

    let header = fs::read_to_string(&path).unwrap();
    assert!(header.contains("typedef unsigned long uintptr_t;"));
    assert!(header.contains("lxw_error worksheet_write_string_lv("));
    assert!(!header.lines().any(|l| l.trim_start().starts_with('#')));
}

#[test]
fn test_header_rejects_bad_width() {
    let output = lvxlsx(&["header", "--bits", "16"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported target width"));
}

#[test]
fn test_layout_json() {
    let output = lvxlsx(&["layout", "lxw_chart_data_label", "--json"]);
    assert!(output.status.success());

    let layouts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layouts[0]["name"], "lxw_chart_data_label");
    assert_eq!(layouts[0]["size"], 48);

    let output = lvxlsx(&["layout", "lxw_chart_data_label", "--bits", "32"]);
    assert!(stdout(&output).starts_with("lxw_chart_data_label (size 24, align 4)\n"));
}

#[test]
fn test_layout_unknown_struct() {
    let output = lvxlsx(&["layout", "lxw_nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No structure named 'lxw_nope'"));
}

#[test]
fn test_describe() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.json");

    let output = lvxlsx(&["describe", "--output", path.to_str().unwrap()]);
    assert!(output.status.success());

    let api: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let functions = api["functions"].as_array().unwrap();
    assert!(functions
        .iter()
        .any(|f| f["name"] == "chart_series_set_labels_custom_lv"));
}

#[test]
fn test_parse_ref() {
    let cell: serde_json::Value =
        serde_json::from_slice(&lvxlsx(&["parse-ref", "A1"]).stdout).unwrap();
    assert_eq!(cell, serde_json::json!({ "row": 0, "col": 0 }));

    let cols: serde_json::Value = serde_json::from_slice(&lvxlsx(&["ref", "B:D"]).stdout).unwrap();
    assert_eq!(cols, serde_json::json!({ "first_col": 1, "last_col": 3 }));

    let range: serde_json::Value =
        serde_json::from_slice(&lvxlsx(&["parse-ref", "A1:K42"]).stdout).unwrap();
    assert_eq!(
        range,
        serde_json::json!({ "first_row": 0, "first_col": 0, "last_row": 41, "last_col": 10 })
    );

    let output = lvxlsx(&["parse-ref", "--kind", "cell", "B"]);
    assert!(!output.status.success());
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin.txt");
    let output_path = dir.path().join("utf8.txt");
    fs::write(&input, b"Caf\xe9 \x805").unwrap();

    let output = lvxlsx(&[
        "convert",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "Café €5");
}

#[test]
fn test_convert_stdin_shift_jis() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lvxlsx"))
        .args(["convert", "--codepage", "932"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\x93\xfa\x96\x7b")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "日本");
}

#[test]
fn test_convert_strict_and_lenient() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.txt");
    fs::write(&input, b"abc\x93").unwrap();

    let lenient = lvxlsx(&["convert", "--codepage", "932", input.to_str().unwrap()]);
    assert!(lenient.status.success());
    assert_eq!(lenient.stdout, b"abc\x93");

    let strict = lvxlsx(&["convert", "--codepage", "932", "--strict", input.to_str().unwrap()]);
    assert!(!strict.status.success());
    assert!(strict.stdout.is_empty());

    let unsupported = lvxlsx(&["convert", "--codepage", "437", input.to_str().unwrap()]);
    assert!(!unsupported.status.success());
}

#[test]
fn test_strerror() {
    let output = lvxlsx(&["strerror", "12"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("12: "));
}

#[test]
fn test_recipe_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("hello.c"),
        "/* Example of a hello world. */\n\
         int main() {\n\
         \x20   lxw_workbook *workbook = workbook_new(\"hello.xlsx\");\n\
         \x20   lxw_worksheet *worksheet = workbook_add_worksheet(workbook, NULL);\n\
         \x20   worksheet_write_string(worksheet, 0, 0, \"Hello\", NULL);\n\
         \x20   return workbook_close(workbook);\n\
         }\n",
    )
    .unwrap();
    fs::write(dir.path().join("readme.txt"), "not an example").unwrap();

    let listed = lvxlsx(&["recipe", "--list", dir.path().to_str().unwrap()]);
    assert_eq!(stdout(&listed), "hello.c\n");

    let output = lvxlsx(&["recipe", dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    let recipes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = recipes[0]["steps"].as_array().unwrap();
    let wrappers: Vec<_> = steps.iter().map(|s| s["lv_wrapper"].as_str().unwrap()).collect();
    assert_eq!(
        wrappers,
        vec![
            "workbook_new_lv",
            "workbook_add_worksheet_lv",
            "worksheet_write_string_lv",
            "",
        ]
    );
    assert_eq!(recipes[0]["description"], "a hello world.");

    let parsed = lvxlsx(&[
        "recipe",
        "--parsed",
        dir.path().join("hello.c").to_str().unwrap(),
    ]);
    let parsed: serde_json::Value = serde_json::from_slice(&parsed.stdout).unwrap();
    assert_eq!(parsed["objects"]["worksheet"], "worksheet");
}
