use std::collections::BTreeSet;
use std::path::PathBuf;

use super::{parse_file, report_syntax_errors};
use crate::cli::{GlobalOpts, ParseArgs};
use crate::error::{syntax_error_json, CliError};
use crate::output::{OutputContext, OutputMode};

/// Run the `parse` command: check .skm files and render diagnostics.
pub fn run(args: ParseArgs, _global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let files = discover_schema_files(&args.paths)?;

    let mut total_declarations = 0usize;
    let mut total_errors = 0usize;
    let mut failed_files = 0usize;
    let mut all_file_results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let parsed = parse_file(file)?;
        let tree = &parsed.output.tree;
        let errors = &parsed.output.errors;

        total_declarations += tree.len();
        total_errors += errors.len();
        if !errors.is_empty() {
            failed_files += 1;
            report_syntax_errors(output, errors, &parsed.source, &parsed.filename);
        }

        if output.mode == OutputMode::Json {
            let mut result = serde_json::json!({
                "file": parsed.filename,
                "declarations": tree.len(),
                "errors": errors.iter().map(syntax_error_json).collect::<Vec<_>>(),
            });
            if args.print_json {
                result["tree"] = serde_json::to_value(tree)
                    .map_err(|e| CliError::Other(e.to_string()))?;
            }
            all_file_results.push(result);
            continue;
        }

        if args.print_ast {
            print!("{}", eskema_dsl::visualize(tree));
        }
        if args.print_json {
            let json = serde_json::to_string_pretty(tree)
                .map_err(|e| CliError::Other(e.to_string()))?;
            println!("{json}");
        }
        output.status(&format!(
            "  {} .... {} declarations, {} errors",
            parsed.filename,
            tree.len(),
            errors.len()
        ));
    }

    // Summary
    match output.mode {
        OutputMode::Human => {
            let summary = format!(
                "{total_declarations} declarations parsed from {} files, {total_errors} errors",
                files.len()
            );
            if failed_files > 0 {
                output.warn(&summary);
            } else {
                output.success(&summary);
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "declarations": total_declarations,
                "errors": total_errors,
                "results": all_file_results,
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{total_declarations}\t{total_errors}", files.len());
        }
    }

    if failed_files > 0 {
        Err(CliError::ParseMany {
            files: failed_files,
        })
    } else {
        Ok(())
    }
}

const SCHEMA_GLOB: &str = "**/*.skm";

/// Expands the `parse` arguments into a sorted, duplicate-free file list.
/// Files are taken as given whatever their extension; directories are
/// searched recursively for `.skm` files.
fn discover_schema_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = BTreeSet::new();

    for path in paths {
        if path.is_file() {
            files.insert(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(CliError::NoSchemaFiles { path: path.clone() });
        }

        let pattern = path.join(SCHEMA_GLOB);
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern)
            .map_err(|e| CliError::Other(format!("invalid search pattern {pattern}: {e}")))?;
        for entry in entries {
            let entry = entry.map_err(|e| CliError::Io {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            files.insert(entry);
        }
    }

    if files.is_empty() {
        let path = paths.first().cloned().unwrap_or_else(|| PathBuf::from("."));
        return Err(CliError::NoSchemaFiles { path });
    }

    tracing::debug!(count = files.len(), "discovered schema files");
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_schema_files_nonexistent_path() {
        let result = discover_schema_files(&[PathBuf::from("/nonexistent/path")]);
        assert!(matches!(result, Err(CliError::NoSchemaFiles { .. })));
    }

    #[test]
    fn discover_schema_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_schema_files(&[dir.path().to_path_buf()]);
        assert!(matches!(result, Err(CliError::NoSchemaFiles { .. })));
    }

    #[test]
    fn discover_schema_files_recurses_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.skm"), "enum B { X }").unwrap();
        std::fs::write(dir.path().join("nested/a.skm"), "enum A { X }").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = discover_schema_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("b.skm"), dir.path().join("nested/a.skm")]
        );
    }

    #[test]
    fn discover_schema_files_dedups_repeated_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.skm");
        std::fs::write(&file, "enum One { X }").unwrap();

        let files = discover_schema_files(&[file.clone(), dir.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn explicit_file_need_not_use_skm_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.txt");
        std::fs::write(&file, "enum One { X }").unwrap();

        let files = discover_schema_files(&[file.clone()]).unwrap();
        assert_eq!(files, vec![file]);
    }
}
