//! lvxlsx - developer tool for the libxlsxwriter LabVIEW bindings

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use xlsxwriter_lv::{
    AdapterConfig, CellRef, ColRange, ConversionMode, Converter, LxwError, RangeRef,
};
use xlsxwriter_lv_recipe::{list_examples, parse_all, recipes_all, ParsedExample, Recipe};
use xlsxwriter_lv_schema::{render_header, Target, API};

#[derive(Parser)]
#[command(name = "lvxlsx")]
#[command(
    author,
    version,
    about = "Header, layout and recipe tooling for the libxlsxwriter LabVIEW bindings"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the flattened C header for the import wizard
    Header {
        /// Target width in bits (32 or 64)
        #[arg(short, long, default_value = "64")]
        bits: u32,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print structure sizes and field offsets
    Layout {
        /// Structures to print (default: all)
        names: Vec<String>,

        /// Target width in bits (32 or 64)
        #[arg(short, long, default_value = "64")]
        bits: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Dump the interface descriptor as JSON
    Describe {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse an A1-style cell, column or range reference
    #[command(alias = "ref")]
    ParseRef {
        /// Reference such as "B3", "B:D" or "A1:K42"
        reference: String,

        /// Kind of reference (default: guessed from the text)
        #[arg(short, long, value_enum)]
        kind: Option<RefKind>,
    },

    /// Convert legacy 8-bit text to UTF-8
    Convert {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Windows code page (default: XLSXWRITER_LV_CODEPAGE or 1252)
        #[arg(short, long)]
        codepage: Option<u16>,

        /// Fail on malformed input instead of passing it through
        #[arg(long)]
        strict: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe a library error code
    Strerror {
        /// Numeric lxw_error value
        code: i32,
    },

    /// Extract call recipes from C example programs
    Recipe {
        /// Example file or directory of examples
        path: PathBuf,

        /// List the example files of a directory
        #[arg(long, conflicts_with = "parsed")]
        list: bool,

        /// Print the raw parse instead of the recipe
        #[arg(long)]
        parsed: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RefKind {
    Cell,
    Cols,
    Range,
}

impl RefKind {
    fn guess(reference: &str) -> Self {
        if !reference.chars().any(|c| c.is_ascii_digit()) {
            RefKind::Cols
        } else if reference.contains(':') {
            RefKind::Range
        } else {
            RefKind::Cell
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Header { bits, output } => header(bits, output.as_deref()),
        Commands::Layout { names, bits, json } => layout(&names, bits, json),
        Commands::Describe { output } => describe(output.as_deref()),
        Commands::ParseRef { reference, kind } => parse_ref(&reference, kind),
        Commands::Convert {
            input,
            codepage,
            strict,
            output,
        } => convert(input.as_deref(), codepage, strict, output.as_deref()),
        Commands::Strerror { code } => strerror(code),
        Commands::Recipe {
            path,
            list,
            parsed,
            output,
        } => recipe(&path, list, parsed, output.as_deref()),
    }
}

fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let directive = log_directive(verbose);
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    } else {
        EnvFilter::new(directive)
    };

    // try_init also routes `log` records from the library crates
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn target(bits: u32) -> Result<Target> {
    match Target::from_bits(bits) {
        Some(target) => Ok(target),
        None => bail!("Unsupported target width {bits} (expected 32 or 64)"),
    }
}

fn header(bits: u32, output: Option<&Path>) -> Result<()> {
    let target = target(bits)?;
    API.validate().context("Interface descriptor is inconsistent")?;

    let header = render_header(&API, target);
    tracing::info!(?target, functions = API.functions.len(), "rendered header");
    write_output(output, header.as_bytes())
}

fn layout(names: &[String], bits: u32, as_json: bool) -> Result<()> {
    let target = target(bits)?;

    let layouts = if names.is_empty() {
        API.structs
            .iter()
            .map(|s| API.layout(s.name, target))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        names
            .iter()
            .map(|name| {
                API.layout(name, target)
                    .with_context(|| format!("No structure named '{name}'"))
            })
            .collect::<Result<Vec<_>>>()?
    };

    if as_json {
        return write_json(None, &layouts);
    }

    let mut text = String::new();
    for layout in &layouts {
        text.push_str(&format!(
            "{} (size {}, align {})\n",
            layout.name, layout.size, layout.align
        ));
        for field in &layout.fields {
            text.push_str(&format!(
                "  {:>4}  {:>4}  {}\n",
                field.offset, field.size, field.name
            ));
        }
    }
    write_output(None, text.as_bytes())
}

fn describe(output: Option<&Path>) -> Result<()> {
    API.validate().context("Interface descriptor is inconsistent")?;
    write_json(output, &API)
}

fn parse_ref(reference: &str, kind: Option<RefKind>) -> Result<()> {
    let kind = kind.unwrap_or_else(|| RefKind::guess(reference));
    let value = match kind {
        RefKind::Cell => {
            let cell = CellRef::parse(reference)
                .with_context(|| format!("Invalid cell reference '{reference}'"))?;
            json!({ "row": cell.row, "col": cell.col })
        }
        RefKind::Cols => {
            let cols = ColRange::parse(reference)
                .with_context(|| format!("Invalid column range '{reference}'"))?;
            json!({ "first_col": cols.first_col, "last_col": cols.last_col })
        }
        RefKind::Range => {
            let range = RangeRef::parse(reference)
                .with_context(|| format!("Invalid range '{reference}'"))?;
            json!({
                "first_row": range.first_row,
                "first_col": range.first_col,
                "last_row": range.last_row,
                "last_col": range.last_col,
            })
        }
    };
    write_json(None, &value)
}

fn convert(
    input: Option<&Path>,
    codepage: Option<u16>,
    strict: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut config = AdapterConfig::from_env();
    if let Some(codepage) = codepage {
        config.codepage = codepage;
    }
    if strict {
        config.mode = ConversionMode::Strict;
    }
    let converter = Converter::for_codepage(config.codepage, config.mode)
        .context("Cannot convert text")?;

    let bytes = match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    match converter.decode(&bytes) {
        Ok(text) => write_output(output, text.as_bytes()),
        Err(err) if config.mode == ConversionMode::Lenient => {
            tracing::warn!(%err, "passing input through unchanged");
            write_output(output, &bytes)
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "Input is not valid {} text",
                converter.encoding().name()
            )
        }),
    }
}

fn strerror(code: i32) -> Result<()> {
    let error = LxwError(code);
    println!("{code}: {}", error.description());
    Ok(())
}

fn recipe(path: &Path, list: bool, parsed: bool, output: Option<&Path>) -> Result<()> {
    if list {
        let files = list_examples(path)
            .with_context(|| format!("Failed to list examples in '{}'", path.display()))?;
        let mut text = String::new();
        for file in &files {
            if let Some(name) = file.file_name() {
                text.push_str(&name.to_string_lossy());
                text.push('\n');
            }
        }
        return write_output(output, text.as_bytes());
    }

    if path.is_dir() {
        let context = || format!("Failed to parse examples in '{}'", path.display());
        if parsed {
            let examples = parse_all(path).with_context(context)?;
            tracing::info!(count = examples.len(), "parsed examples");
            write_json(output, &examples)
        } else {
            let recipes = recipes_all(path).with_context(context)?;
            tracing::info!(count = recipes.len(), "built recipes");
            write_json(output, &recipes)
        }
    } else {
        let example = ParsedExample::from_path(path)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;
        if parsed {
            write_json(output, &example)
        } else {
            write_json(output, &Recipe::from_example(&example))
        }
    }
}

fn write_json<T: Serialize + ?Sized>(output: Option<&Path>, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    text.push('\n');
    write_output(output, text.as_bytes())
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("Wrote {} bytes to '{}'", bytes.len(), path.display());
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(bytes).context("Failed to write to stdout")?;
        handle.flush().context("Failed to write to stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_guess_ref_kind() {
        assert_eq!(RefKind::guess("B3"), RefKind::Cell);
        assert_eq!(RefKind::guess("B:D"), RefKind::Cols);
        assert_eq!(RefKind::guess("A1:K42"), RefKind::Range);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["lvxlsx", "-vv", "strerror", "0"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(log_directive(0), "warn");
        assert_eq!(log_directive(cli.verbose), "debug");
        assert_eq!(log_directive(1), "info");
        assert_eq!(log_directive(7), "trace");
    }

    #[test]
    fn test_target_bits() {
        assert_eq!(target(32).unwrap(), Target::Win32);
        assert!(target(16).is_err());
    }
}
