use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use xlsxwriter_lv_recipe::{
    list_examples, parse_all, recipes_all, DataArray, DataValue, ObjectKind, ParsedExample,
    Recipe, RecipeError,
};

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

#[test]
fn test_chart_labels_example() {
    let parsed = ParsedExample::from_path(&data_dir().join("chart_labels.c")).unwrap();

    assert_eq!(parsed.file, "chart_labels.c");
    assert_eq!(
        parsed.description,
        "a chart with custom data labels using libxlsxwriter."
    );

    assert_eq!(parsed.data_arrays.len(), 1);
    assert_eq!(parsed.data_arrays[0].name, "data");
    match &parsed.data_arrays[0].value {
        DataArray::Table(rows) => {
            assert_eq!(rows.len(), 6);
            assert_eq!(
                rows[0],
                vec![DataValue::Int(2), DataValue::Int(10), DataValue::Int(30)]
            );
        }
        other => panic!("expected a table, got {other:?}"),
    }

    assert_eq!(parsed.objects.get("chart"), Some(&ObjectKind::Chart));
    assert_eq!(parsed.objects.get("series"), Some(&ObjectKind::Series));

    let functions: Vec<_> = parsed.operations.iter().map(|op| op.function.as_str()).collect();
    assert_eq!(
        functions,
        vec![
            "workbook_new",
            "workbook_add_worksheet",
            "workbook_add_chart",
            "worksheet_write_number",
            "chart_add_series",
            "chart_series_set_labels",
            "chart_series_set_labels_custom",
            "chart_title_set_name",
            "worksheet_insert_chart",
            "workbook_close",
        ]
    );
}

#[test]
fn test_chart_labels_recipe() {
    let parsed = ParsedExample::from_path(&data_dir().join("chart_labels.c")).unwrap();
    let recipe = Recipe::from_example(&parsed);

    assert_eq!(recipe.data_arrays.len(), 1);
    assert!(recipe.data_arrays[0].starts_with("data=[[2,10,30],"));

    let wrapped: Vec<_> = recipe
        .steps
        .iter()
        .filter(|s| s.use_lv_wrapper)
        .map(|s| s.lv_wrapper.as_str())
        .collect();
    assert_eq!(
        wrapped,
        vec![
            "workbook_new_lv",
            "workbook_add_worksheet_lv",
            "chart_add_series_lv",
            "chart_title_set_name_lv",
        ]
    );

    let insert = recipe
        .steps
        .iter()
        .find(|s| s.c_function == "worksheet_insert_chart")
        .unwrap();
    assert_eq!(insert.args, vec!["worksheet", "E9", "chart"]);
    assert_eq!(insert.lv_wrapper, "");

    let labels = recipe
        .steps
        .iter()
        .find(|s| s.c_function == "chart_series_set_labels_custom")
        .unwrap();
    assert!(!labels.use_lv_wrapper);
    assert_eq!(labels.lv_wrapper, "");

    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json["steps"][1]["args"][1], "Données");
    assert_eq!(json["steps"][0]["assigns_to"], "workbook");
}

#[test]
fn test_directory_scan() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b_second.c"), "workbook_close(wb);\n").unwrap();
    fs::write(
        dir.path().join("a_first.c"),
        "/* Example of nothing. */\nlxw_workbook *wb = workbook_new(\"a.xlsx\");\n",
    )
    .unwrap();
    fs::write(dir.path().join(".hidden.c"), "workbook_close(wb);\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "workbook_close(wb);\n").unwrap();
    fs::create_dir(dir.path().join("nested.c")).unwrap();

    let names: Vec<_> = list_examples(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_first.c", "b_second.c"]);

    let parsed = parse_all(dir.path()).unwrap();
    assert_eq!(parsed[0].description, "nothing.");
    assert_eq!(parsed[1].operations.len(), 1);

    let recipes = recipes_all(dir.path()).unwrap();
    assert_eq!(recipes[0].steps[0].lv_wrapper, "workbook_new_lv");
    assert!(!recipes[1].steps[0].use_lv_wrapper);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.c");
    fs::write(&path, b"worksheet_write_string(ws, 0, 0, \"Caf\xe9\", NULL);\n").unwrap();

    let parsed = ParsedExample::from_path(&path).unwrap();
    assert_eq!(parsed.operations[0].args[3], "Caf\u{fffd}");
}

#[test]
fn test_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("single.c");
    fs::write(&file, "").unwrap();

    assert!(matches!(
        list_examples(&file),
        Err(RecipeError::NotADirectory(_))
    ));
    assert!(matches!(
        ParsedExample::from_path(&dir.path().join("missing.c")),
        Err(RecipeError::Io { .. })
    ));
}
