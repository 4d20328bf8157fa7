use std::fmt::Display;

use console::{Style, Term};

use crate::cli::{Format, GlobalOpts};
use crate::error::CliError;

/// How command results are rendered, selected by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl From<Format> for OutputMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => Self::Human,
            Format::Json => Self::Json,
            Format::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Ok,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn style(self) -> Style {
        let style = Style::new().bold();
        match self {
            Self::Ok => style.green(),
            Self::Warning => style.yellow(),
            Self::Error => style.red(),
        }
    }
}

/// Where and how results, status lines and errors are written.
///
/// Generated code and machine-readable results go to stdout so they can be
/// piped; everything addressed to a person goes to stderr.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: global.format.into(),
            quiet: global.quiet,
            use_color,
        }
    }

    fn tagged(&self, level: Level, msg: &dyn Display) -> String {
        match self.mode {
            OutputMode::Plain => format!("{}\t{msg}", level.tag()),
            _ if self.use_color => {
                let tag = format!("{}:", level.tag());
                format!("{} {msg}", level.style().apply_to(tag))
            }
            _ => format!("{}: {msg}", level.tag()),
        }
    }

    /// A completed-action line. Human mode only.
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{}", self.tagged(Level::Ok, &msg));
    }

    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            _ => eprintln!("{}", self.tagged(Level::Warning, &msg)),
        }
    }

    /// Reports the error a command failed with. Never suppressed by `-q`.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Json => eprintln!("{}", err.to_json()),
            _ => eprintln!("{}", self.tagged(Level::Error, err)),
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::warn!(error = %e, "could not serialize JSON output"),
        }
    }

    /// Writes generated source to stdout untouched; emitters already end it
    /// with a newline.
    pub fn print_code(&self, code: &str) {
        print!("{code}");
    }

    /// A per-file progress line. Human mode only.
    pub fn status(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(mode: OutputMode, use_color: bool) -> OutputContext {
        OutputContext {
            mode,
            quiet: false,
            use_color,
        }
    }

    fn global(format: Format, quiet: bool, no_color: bool) -> GlobalOpts {
        GlobalOpts {
            config: None,
            format,
            verbose: 0,
            quiet,
            no_color,
        }
    }

    #[test]
    fn format_flag_selects_mode() {
        assert_eq!(OutputMode::from(Format::Human), OutputMode::Human);
        assert_eq!(OutputMode::from(Format::Json), OutputMode::Json);
        assert_eq!(OutputMode::from(Format::Plain), OutputMode::Plain);
    }

    #[test]
    fn from_global_carries_quiet_and_mode() {
        let ctx = OutputContext::from_global(&global(Format::Plain, true, false));
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(ctx.quiet);
    }

    #[test]
    fn no_color_flag_disables_color() {
        let ctx = OutputContext::from_global(&global(Format::Human, false, true));
        assert!(!ctx.use_color);
    }

    #[test]
    fn human_lines_without_color() {
        let ctx = context(OutputMode::Human, false);
        assert_eq!(ctx.tagged(Level::Ok, &"2 files"), "ok: 2 files");
        assert_eq!(ctx.tagged(Level::Warning, &"careful"), "warning: careful");
    }

    #[test]
    fn plain_lines_are_tab_separated() {
        let ctx = context(OutputMode::Plain, true);
        let err = CliError::MissingLanguage;
        assert!(ctx
            .tagged(Level::Error, &err)
            .starts_with("error\tno target language"));
    }

    #[test]
    fn colored_lines_keep_the_message() {
        let ctx = context(OutputMode::Human, true);
        assert!(ctx.tagged(Level::Ok, &"done").ends_with(" done"));
    }
}
