use hsym_core::{Problem, ScanResult};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Serialize as pretty or single-line JSON.
fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Render the per-file symbol listing.
///
/// JSON maps each path to its symbol list, or with `by_kind` to a map from
/// matcher kind to symbol list.
pub fn render_result(
    result: &ScanResult,
    format: OutputFormat,
    by_kind: bool,
) -> anyhow::Result<String> {
    let pretty = match format {
        OutputFormat::Table => {
            let options = table::TableOptions {
                max_width: ui::prefs().term_width,
            };
            return Ok(render_table(result, by_kind, options));
        }
        OutputFormat::Json => true,
        OutputFormat::Raw => false,
    };
    if by_kind {
        to_json(&result.by_kind(), pretty)
    } else {
        to_json(&result.names(), pretty)
    }
}

/// Print the listing to stdout.
pub fn print_result(result: &ScanResult, format: OutputFormat, by_kind: bool) -> anyhow::Result<()> {
    let rendered = render_result(result, format, by_kind)?;
    println!("{rendered}");
    Ok(())
}

/// One `Problem: <symbol> in <path>` line per problem.
#[must_use]
pub fn render_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print check problems after the listing.
///
/// They go to stderr in JSON mode so stdout stays parseable.
pub fn print_problems(problems: &[Problem], format: OutputFormat) {
    if problems.is_empty() {
        return;
    }
    let rendered = render_problems(problems);
    if format == OutputFormat::Json {
        eprintln!("{rendered}");
    } else {
        println!("{rendered}");
    }
}

fn render_table(result: &ScanResult, by_kind: bool, options: table::TableOptions) -> String {
    if result.is_empty() {
        return String::from("(no files)");
    }

    let mut rows = Vec::new();
    if by_kind {
        for (path, kinds) in result.by_kind() {
            let file = path.display().to_string();
            if kinds.is_empty() {
                rows.push(vec![file, "-".to_string(), "-".to_string()]);
                continue;
            }
            let mut first = true;
            for (kind, names) in kinds {
                for name in names {
                    let file_cell = if first { file.clone() } else { String::new() };
                    rows.push(vec![file_cell, kind.to_string(), name.to_string()]);
                    first = false;
                }
            }
        }
        return table::render_entity_table(&["file", "kind", "symbol"], &rows, options);
    }

    for (path, symbols) in result.iter() {
        let file = path.display().to_string();
        if symbols.is_empty() {
            rows.push(vec![file, "-".to_string()]);
            continue;
        }
        for (index, symbol) in symbols.iter().enumerate() {
            let file_cell = if index == 0 { file.clone() } else { String::new() };
            rows.push(vec![file_cell, symbol.name.clone()]);
        }
    }
    table::render_entity_table(&["file", "symbol"], &rows, options)
}
