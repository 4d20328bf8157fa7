use std::path::{Path, PathBuf};

use eskema_emit::emitter_for;

use super::{parse_file, report_syntax_errors};
use crate::cli::{GenerateArgs, GlobalOpts};
use crate::config::{load_config, resolve_emit_options, resolve_language};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `generate` command: parse one schema file and emit code for the
/// chosen language. Nothing is emitted if the file has syntax errors.
pub fn run(args: GenerateArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let language = resolve_language(&config, &args)?;
    let options = resolve_emit_options(&config, &args);
    let emitter = emitter_for(&language, &options)
        .ok_or_else(|| CliError::UnsupportedLanguage { name: language })?;

    let parsed = parse_file(&args.file)?;
    if parsed.output.has_errors() {
        report_syntax_errors(
            output,
            &parsed.output.errors,
            &parsed.source,
            &parsed.filename,
        );
        return Err(CliError::Parse {
            errors: parsed.output.errors,
            file: args.file,
        });
    }

    let code = emitter.emit(&parsed.output.tree);

    let written = match &args.output {
        Some(target) => {
            let path = output_path(target, &args.file, emitter.file_extension());
            write_output(&path, &code)?;
            Some(path)
        }
        None => None,
    };

    match output.mode {
        OutputMode::Json => {
            let inline_code = written.is_none().then_some(&code);
            output.print_json(&serde_json::json!({
                "file": parsed.filename,
                "language": emitter.name(),
                "declarations": parsed.output.tree.len(),
                "output": written.as_ref().map(|p| p.display().to_string()),
                "code": inline_code,
            }));
        }
        _ => match &written {
            Some(path) => output.success(&format!(
                "{} declarations written to {}",
                parsed.output.tree.len(),
                path.display()
            )),
            None => output.print_code(&code),
        },
    }

    Ok(())
}

/// Resolves `--output`: an existing directory, or a path ending in a
/// separator, receives `<input stem>.<extension>`; anything else is used as
/// the file path.
fn output_path(target: &Path, input: &Path, extension: &str) -> PathBuf {
    let is_dir = target.is_dir() || target.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR);
    if !is_dir {
        return target.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    target.join(format!("{stem}.{extension}"))
}

fn write_output(path: &Path, code: &str) -> Result<(), CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, code).map_err(io_err)?;
    tracing::info!(path = %path.display(), bytes = code.len(), "wrote generated code");
    Ok(())
}
