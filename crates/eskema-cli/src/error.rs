use std::path::PathBuf;

use eskema_dsl::SyntaxError;

/// Process exit status, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Bad flags, a bad config file, or nothing to work on.
    InvalidArguments = 2,
    /// A schema file has syntax errors.
    ParseError = 3,
    UnsupportedLanguage = 4,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{count} syntax error(s) in {file}", count = .errors.len())]
    Parse {
        errors: Vec<SyntaxError>,
        file: PathBuf,
    },

    /// Several files failed to parse; their errors were already reported.
    #[error("syntax errors in {files} file(s)")]
    ParseMany { files: usize },

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("no target language given (use --language or set emit.default_language)")]
    MissingLanguage,

    #[error("unsupported language '{name}' (supported: {supported})", supported = eskema_emit::supported_languages().join(", "))]
    UnsupportedLanguage { name: String },

    #[error("no .skm files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } | Self::ParseMany { .. } => ExitCode::ParseError,
            Self::UnsupportedLanguage { .. } => ExitCode::UnsupportedLanguage,
            Self::Config { .. } | Self::MissingLanguage | Self::NoSchemaFiles { .. } => {
                ExitCode::InvalidArguments
            }
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Stable machine-readable name for the `error` key of JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } | Self::ParseMany { .. } => "parse_error",
            Self::Io { .. } => "io_error",
            Self::Config { .. } => "config_error",
            Self::MissingLanguage => "missing_language",
            Self::UnsupportedLanguage { .. } => "unsupported_language",
            Self::NoSchemaFiles { .. } => "no_schema_files",
            Self::Other(_) => "error",
        }
    }

    /// `{"error": kind, "message": ...}` plus the details of the variant.
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        match self {
            Self::Parse { errors, file } => {
                json["file"] = file.display().to_string().into();
                json["errors"] = errors.iter().map(syntax_error_json).collect();
            }
            Self::ParseMany { files } => json["files"] = (*files).into(),
            Self::Io { path, .. } | Self::NoSchemaFiles { path } => {
                json["path"] = path.display().to_string().into();
            }
            Self::UnsupportedLanguage { name } => {
                json["language"] = name.as_str().into();
                json["supported"] = eskema_emit::supported_languages().to_vec().into();
            }
            Self::Config { .. } | Self::MissingLanguage | Self::Other(_) => {}
        }
        json
    }
}

/// Structured form of one syntax error.
pub fn syntax_error_json(error: &SyntaxError) -> serde_json::Value {
    let meta = error.metadata();
    serde_json::json!({
        "message": error.to_string(),
        "line": meta.line,
        "column": meta.column,
        "offset": meta.offset,
        "expected": error.expected().iter().map(|t| t.description()).collect::<Vec<_>>(),
        "found": error.found(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<SyntaxError> {
        eskema_dsl::parse("schema Foo { name String }", "test.skm").errors
    }

    #[test]
    fn parse_error_exit_code() {
        let err = CliError::Parse {
            errors: sample_errors(),
            file: PathBuf::from("test.skm"),
        };
        assert_eq!(err.exit_code(), ExitCode::ParseError);
        assert_eq!(CliError::ParseMany { files: 2 }.exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn unsupported_language_exit_code() {
        let err = CliError::UnsupportedLanguage {
            name: "cobol".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::UnsupportedLanguage);
        assert!(err.to_string().contains("kotlin, csharp, go, swift"));
    }

    #[test]
    fn argument_errors_exit_code() {
        assert_eq!(CliError::MissingLanguage.exit_code(), ExitCode::InvalidArguments);
        let err = CliError::Config {
            message: "bad config".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
        let err = CliError::NoSchemaFiles {
            path: PathBuf::from("schemas/"),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn other_exit_code() {
        let err = CliError::Other("something".into());
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn display_parse_error() {
        let err = CliError::Parse {
            errors: sample_errors(),
            file: PathBuf::from("test.skm"),
        };
        assert_eq!(err.to_string(), "1 syntax error(s) in test.skm");
    }

    #[test]
    fn to_json_parse_error() {
        let err = CliError::Parse {
            errors: sample_errors(),
            file: PathBuf::from("test.skm"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "parse_error");
        assert_eq!(json["file"], "test.skm");
        assert_eq!(json["errors"][0]["line"], 1);
        assert_eq!(json["errors"][0]["column"], 19);
        assert_eq!(json["errors"][0]["expected"][0], ":");
        assert_eq!(json["errors"][0]["found"], "String");
    }

    #[test]
    fn to_json_io_error() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "io_error");
        assert_eq!(json["path"], "/tmp/file");
    }

    #[test]
    fn to_json_unsupported_language() {
        let json = CliError::UnsupportedLanguage {
            name: "cobol".into(),
        }
        .to_json();
        assert_eq!(json["error"], "unsupported_language");
        assert_eq!(json["supported"][3], "swift");
    }

    #[test]
    fn to_json_missing_language() {
        let json = CliError::MissingLanguage.to_json();
        assert_eq!(json["error"], "missing_language");
        assert!(json["message"].as_str().unwrap().contains("--language"));
    }

    #[test]
    fn to_json_no_schema_files_carries_path() {
        let json = CliError::NoSchemaFiles {
            path: PathBuf::from("schemas"),
        }
        .to_json();
        assert_eq!(json["error"], "no_schema_files");
        assert_eq!(json["path"], "schemas");
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::ParseError as i32, 3);
        assert_eq!(ExitCode::UnsupportedLanguage as i32, 4);
    }
}
