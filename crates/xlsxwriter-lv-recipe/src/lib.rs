//! # xlsxwriter-lv-recipe
//!
//! Turns libxlsxwriter's C example programs into JSON recipes: the data
//! arrays an example declares and the ordered library calls it makes, each
//! mapped to the `_lv` wrapper a LabVIEW caller should use instead.
//!
//! ## Example
//!
//! ```rust
//! use xlsxwriter_lv_recipe::{ParsedExample, Recipe};
//!
//! let parsed = ParsedExample::parse(r#"worksheet_write_string(ws, 0, 0, "Hi", NULL);"#);
//! let recipe = Recipe::from_example(&parsed);
//! assert_eq!(recipe.steps[0].lv_wrapper, "worksheet_write_string_lv");
//! ```

pub mod args;
pub mod error;
pub mod example;
pub mod recipe;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::{RecipeError, Result};
pub use example::{DataArray, DataValue, NamedArray, ObjectKind, Operation, ParsedExample};
pub use recipe::{lv_wrapper_for, Recipe, Step};

/// `*.c` files of a directory, sorted by name, dot-files skipped
pub fn list_examples(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RecipeError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| RecipeError::io(dir, e))? {
        let path = entry.map_err(|e| RecipeError::io(dir, e))?.path();
        let hidden = path
            .file_name()
            .map_or(true, |n| n.to_string_lossy().starts_with('.'));
        if !hidden && path.is_file() && path.extension().is_some_and(|e| e == "c") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every example of a directory
pub fn parse_all(dir: &Path) -> Result<Vec<ParsedExample>> {
    list_examples(dir)?
        .iter()
        .map(|path| ParsedExample::from_path(path))
        .collect()
}

/// Build the recipe of every example of a directory
pub fn recipes_all(dir: &Path) -> Result<Vec<Recipe>> {
    Ok(parse_all(dir)?.iter().map(Recipe::from_example).collect())
}
