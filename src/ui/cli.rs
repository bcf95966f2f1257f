// Command-line interface definitions and parsing for loadmail

use crate::config::ConfigLoader;
use crate::core::constants::paths;
use crate::reporting::GenerateOptions;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the HTML summary from a CSV of load-test results
    Generate(GenerateArgs),
    /// Email a previously generated summary to the configured recipients
    Send(SendArgs),
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions for the current user
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// CSV file with a header row
    #[arg(value_name = "CSV", default_value = paths::DEFAULT_CSV)]
    pub csv: String,

    /// Where to write the HTML report
    #[arg(short = 'o', long, value_name = "PATH", default_value = paths::DEFAULT_REPORT)]
    pub output: String,

    /// Render a built-in sample dataset when the CSV file does not exist
    #[arg(long)]
    pub sample_if_missing: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Report to send
    #[arg(short = 'r', long, value_name = "PATH", default_value = paths::DEFAULT_REPORT)]
    pub report: String,

    /// Email subject (default: config file value, then "Load Test Summary Report")
    #[arg(short = 's', long, value_name = "TEXT")]
    pub subject: Option<String>,

    // Configuration
    /// Use specific config file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files; read settings from the environment only
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,

    /// Build and validate the message without contacting the SMTP server
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            sample_if_missing: self.sample_if_missing,
        }
    }
}

impl SendArgs {
    /// Config loader matching the `--config` / `--no-config` flags
    pub fn config_loader(&self) -> ConfigLoader {
        let loader = ConfigLoader::new();
        if self.no_config {
            loader.without_config_file()
        } else if let Some(ref path) = self.config {
            loader.with_config_file(path)
        } else {
            loader
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["loadmail", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.csv, paths::DEFAULT_CSV);
                assert_eq!(args.output, paths::DEFAULT_REPORT);
                assert!(!args.options().sample_if_missing);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_with_arguments() {
        let cli = Cli::try_parse_from([
            "loadmail",
            "generate",
            "results.csv",
            "-o",
            "out/report.html",
            "--sample-if-missing",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.csv, "results.csv");
                assert_eq!(args.output, "out/report.html");
                assert!(args.options().sample_if_missing);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_send_arguments() {
        let cli = Cli::try_parse_from([
            "loadmail",
            "-q",
            "send",
            "--report",
            "r.html",
            "--subject",
            "Nightly",
            "--config",
            "cfg.json",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.report, "r.html");
                assert_eq!(args.subject.as_deref(), Some("Nightly"));
                assert_eq!(args.config.as_deref(), Some("cfg.json"));
                assert!(args.dry_run);
                assert!(!args.no_config);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["loadmail"]).is_err());
    }
}
