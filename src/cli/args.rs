//! Command line argument parsing for mailfix CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// mailfix - Validate email addresses and fix mistyped domains
#[derive(Parser, Debug, Clone)]
#[command(name = "mailfix")]
#[command(about = "Validate email addresses and suggest corrections for mistyped domains")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MailfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "MAILFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reference domain list, one domain per line (overrides the config list)
    #[arg(short, long, value_name = "DOMAINS_FILE")]
    pub domains: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MailfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate addresses and correct their domains
    Correct(CorrectArgs),

    /// Suggest the closest known domain
    Suggest(SuggestArgs),

    /// Check address syntax only
    Validate(ValidateArgs),

    /// Print the edit distance between two strings
    Distance(DistanceArgs),

    /// List the active reference domains
    Domains,
}

/// Arguments for correcting addresses
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Email addresses to correct
    #[arg(value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Read additional addresses from a file, one per line (`#` starts a comment line)
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Only report addresses whose domain was changed
    #[arg(long)]
    pub changed_only: bool,
}

/// Arguments for domain suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Domains to look up
    #[arg(value_name = "DOMAIN", required = true)]
    pub domains: Vec<String>,
}

/// Arguments for syntax validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Email addresses to validate
    #[arg(value_name = "EMAIL", required = true)]
    pub emails: Vec<String>,
}

/// Arguments for distance computation
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_correct_command() {
        let args = MailfixArgs::try_parse_from([
            "mailfix",
            "correct",
            "user@gmial.com",
            "other@yaho.com",
            "--input",
            "emails.txt",
            "--changed-only",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.emails, vec!["user@gmial.com", "other@yaho.com"]);
            assert_eq!(correct_args.input, Some(PathBuf::from("emails.txt")));
            assert!(correct_args.changed_only);
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_suggest_requires_domain() {
        assert!(MailfixArgs::try_parse_from(["mailfix", "suggest"]).is_err());

        let args = MailfixArgs::try_parse_from(["mailfix", "suggest", "gmial.com"]).unwrap();
        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.domains, vec!["gmial.com"]);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_distance_command() {
        let args =
            MailfixArgs::try_parse_from(["mailfix", "distance", "kitten", "sitting"]).unwrap();
        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.a, "kitten");
            assert_eq!(distance_args.b, "sitting");
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_global_options() {
        let args = MailfixArgs::try_parse_from([
            "mailfix",
            "--domains",
            "domains.txt",
            "--config",
            "mailfix.json",
            "domains",
        ])
        .unwrap();
        assert_eq!(args.domains, Some(PathBuf::from("domains.txt")));
        assert_eq!(args.config, Some(PathBuf::from("mailfix.json")));
        assert!(matches!(args.command, Command::Domains));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = MailfixArgs::try_parse_from(["mailfix", "domains"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = MailfixArgs::try_parse_from(["mailfix", "-vv", "domains"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = MailfixArgs::try_parse_from(["mailfix", "--quiet", "-vvv", "domains"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            MailfixArgs::try_parse_from(["mailfix", "--format", "json", "domains"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
