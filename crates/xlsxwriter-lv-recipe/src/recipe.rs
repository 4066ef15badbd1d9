//! Recipes: the calls of an example mapped onto the exported entry points

use serde::Serialize;
use xlsxwriter_lv_schema::{API, LV_SUFFIX};

use crate::example::{DataArray, ParsedExample};

/// One call of the example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub step: usize,
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub c_function: String,
    /// Wrapper taking legacy-encoded text, empty when none exists
    pub lv_wrapper: String,
    pub use_lv_wrapper: bool,
    pub assigns_to: String,
    pub args: Vec<String>,
}

/// An example reduced to data and an ordered list of calls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub file: String,
    pub description: String,
    /// `name=<json>` per data array, in source order
    pub data_arrays: Vec<String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn from_example(parsed: &ParsedExample) -> Self {
        let data_arrays = parsed
            .data_arrays
            .iter()
            .map(|a| format!("{}={}", a.name, array_json(&a.value)))
            .collect();

        let steps = parsed
            .operations
            .iter()
            .enumerate()
            .map(|(i, op)| {
                let lv_wrapper = lv_wrapper_for(&op.function);
                Step {
                    step: i,
                    line: op.line,
                    kind: "function_call",
                    c_function: op.function.clone(),
                    use_lv_wrapper: !lv_wrapper.is_empty(),
                    lv_wrapper,
                    assigns_to: op.assigns_to.clone(),
                    args: op.args.clone(),
                }
            })
            .collect();

        Self {
            file: parsed.file.clone(),
            description: parsed.description.clone(),
            data_arrays,
            steps,
        }
    }
}

/// Name of the `_lv` entry point to call instead of `function` with the
/// same arguments, if any
pub fn lv_wrapper_for(function: &str) -> String {
    if function.ends_with(LV_SUFFIX) {
        return function.to_string();
    }
    API.drop_in_wrapper(function)
        .map(|f| f.name.to_string())
        .unwrap_or_default()
}

fn array_json(value: &DataArray) -> String {
    // Serializing plain numbers and strings cannot fail
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lv_wrapper_for() {
        assert_eq!(lv_wrapper_for("worksheet_write_string"), "worksheet_write_string_lv");
        assert_eq!(lv_wrapper_for("workbook_new"), "workbook_new_lv");
        assert_eq!(lv_wrapper_for("chart_add_series"), "chart_add_series_lv");
        assert_eq!(lv_wrapper_for("format_set_bold"), "");
        assert_eq!(lv_wrapper_for("my_helper_lv"), "my_helper_lv");
    }

    #[test]
    fn test_call_shape_adapters_are_not_substituted() {
        assert_eq!(lv_wrapper_for("worksheet_filter_column"), "");
        assert_eq!(lv_wrapper_for("worksheet_filter_column2"), "");
        assert_eq!(lv_wrapper_for("chart_series_set_labels_custom"), "");
    }

    #[test]
    fn test_reshaped_calls_keep_their_c_arguments() {
        let source = r#"int main() {
    worksheet_filter_column(worksheet, 0, &rule);
    chart_series_set_labels_custom(series, data_labels);
    worksheet_write_string(worksheet, 0, 0, "Texte", NULL);
}
"#;
        let recipe = Recipe::from_example(&ParsedExample::parse(source));

        let steps: Vec<_> = recipe
            .steps
            .iter()
            .map(|s| (s.c_function.as_str(), s.lv_wrapper.as_str(), s.use_lv_wrapper))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("worksheet_filter_column", "", false),
                ("chart_series_set_labels_custom", "", false),
                ("worksheet_write_string", "worksheet_write_string_lv", true),
            ]
        );
        assert_eq!(recipe.steps[0].args, vec!["worksheet", "0", "rule"]);
        assert_eq!(recipe.steps[1].args, vec!["series", "data_labels"]);
    }

    #[test]
    fn test_recipe_from_example() {
        let source = r#"/* Example of a simple chart. */
int main() {
    int data[] = {1, 2, 3};
    lxw_workbook *workbook = workbook_new("chart.xlsx");
    worksheet_write_number(worksheet, 0, 0, 1, NULL);
    chart_title_set_name(chart, "Résultats");
    return workbook_close(workbook);
}
"#;
        let parsed = ParsedExample::parse(source);
        let recipe = Recipe::from_example(&parsed);

        assert_eq!(recipe.description, "a simple chart.");
        assert_eq!(recipe.data_arrays, vec!["data=[1,2,3]"]);

        let steps: Vec<_> = recipe
            .steps
            .iter()
            .map(|s| (s.step, s.c_function.as_str(), s.lv_wrapper.as_str(), s.use_lv_wrapper))
            .collect();
        assert_eq!(
            steps,
            vec![
                (0, "workbook_new", "workbook_new_lv", true),
                (1, "worksheet_write_number", "", false),
                (2, "chart_title_set_name", "chart_title_set_name_lv", true),
                (3, "workbook_close", "", false),
            ]
        );
        assert_eq!(recipe.steps[2].args, vec!["chart", "Résultats"]);
    }

    #[test]
    fn test_step_json_shape() {
        let step = Step {
            step: 0,
            line: 4,
            kind: "function_call",
            c_function: "workbook_new".into(),
            lv_wrapper: "workbook_new_lv".into(),
            use_lv_wrapper: true,
            assigns_to: "workbook".into(),
            args: vec!["out.xlsx".into()],
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["type"], "function_call");
        assert_eq!(json["use_lv_wrapper"], true);
        assert_eq!(json["args"][0], "out.xlsx");
    }
}
