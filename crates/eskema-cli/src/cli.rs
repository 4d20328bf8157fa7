use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Schema definition language compiler.
///
/// Eskema reads `.skm` files describing records and enums and generates
/// matching type declarations for Kotlin, C#, Go and Swift.
#[derive(Parser)]
#[command(
    name = "eskema",
    version,
    propagate_version = true,
    after_help = "Run 'eskema <command> --help' for the options of a single command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Colored text and rich diagnostics
    #[default]
    Human,
    /// One JSON document on stdout, JSON errors on stderr
    Json,
    /// Tab-separated lines for scripts
    Plain,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Read settings from this TOML file instead of searching for eskema.toml
    #[arg(short = 'c', long, global = true, env = "ESKEMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Result format
    #[arg(long, global = true, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never color output
    #[arg(long = "no-color", global = true, env = "NO_COLOR", value_parser = clap::builder::BoolishValueParser::new())]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile one schema file into source code for a target language
    Generate(GenerateArgs),

    /// Check schema files for syntax errors and optionally dump their tree
    Parse(ParseArgs),

    /// List the languages code can be generated for
    Languages,

    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Schema file to compile
    pub file: PathBuf,

    /// Target language (kotlin, csharp, go, swift); falls back to emit.default_language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Write to this file, or into this directory as <input stem>.<ext> (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Kotlin package, C# namespace or Go package for the generated code
    #[arg(short, long)]
    pub package: Option<String>,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Schema files, or directories searched for *.skm
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Print each parsed tree as an indented listing
    #[arg(long = "ast")]
    pub print_ast: bool,

    /// Print each parsed tree as JSON
    #[arg(long = "json")]
    pub print_json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::try_parse_from(["eskema", "languages"]).unwrap();
        assert!(matches!(cli.command, Commands::Languages));
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::try_parse_from(["eskema", "-vvv", "languages"]).unwrap();
        assert_eq!(cli.global.verbose, 3);
    }

    #[test]
    fn parse_global_quiet() {
        let cli = Cli::try_parse_from(["eskema", "-q", "languages"]).unwrap();
        assert!(cli.global.quiet);
    }

    #[test]
    fn parse_global_format_json() {
        let cli = Cli::try_parse_from(["eskema", "--format", "json", "languages"]).unwrap();
        assert_eq!(cli.global.format, Format::Json);
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::try_parse_from([
            "eskema",
            "generate",
            "models.skm",
            "--language",
            "kotlin",
            "-o",
            "out/",
            "--package",
            "org.acme",
        ])
        .unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("models.skm"));
            assert_eq!(args.language.as_deref(), Some("kotlin"));
            assert_eq!(args.output, Some(PathBuf::from("out/")));
            assert_eq!(args.package.as_deref(), Some("org.acme"));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn generate_language_is_optional() {
        let cli = Cli::try_parse_from(["eskema", "generate", "models.skm"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert!(args.language.is_none());
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn parse_parse_command_flags() {
        let cli =
            Cli::try_parse_from(["eskema", "parse", "--ast", "--json", "schemas/", "a.skm"]).unwrap();
        if let Commands::Parse(args) = cli.command {
            assert!(args.print_ast);
            assert!(args.print_json);
            assert_eq!(
                args.paths,
                vec![PathBuf::from("schemas/"), PathBuf::from("a.skm")]
            );
        } else {
            panic!("expected Parse command");
        }
    }

    #[test]
    fn parse_command_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["eskema", "parse"]).unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
        } else {
            panic!("expected Parse command");
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["eskema", "-v", "-q", "languages"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_format_rejected() {
        let result = Cli::try_parse_from(["eskema", "--format", "xml", "languages"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_shell_parsed() {
        let cli = Cli::try_parse_from(["eskema", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, Shell::Zsh),
            _ => panic!("expected completions command"),
        }
    }

    #[test]
    fn invalid_shell_rejected() {
        let result = Cli::try_parse_from(["eskema", "completions", "tcsh"]);
        assert!(result.is_err());
    }
}
