//! Command implementations for mailfix CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::CorrectorConfig;
use crate::email::{EmailCorrector, is_valid_format};
use crate::error::{MailfixError, Result};
use crate::util::levenshtein::levenshtein_distance;
use crate::util::lines::read_entries_from_file;

/// Execute a CLI command.
pub fn execute_command(args: MailfixArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_emails(correct_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_domains(suggest_args.clone(), &args),
        Command::Validate(validate_args) => validate_emails(validate_args.clone(), &args),
        Command::Distance(distance_args) => show_distance(distance_args.clone(), &args),
        Command::Domains => list_domains(&args),
    }
}

/// Build the corrector configuration from the global options.
pub fn load_config(cli_args: &MailfixArgs) -> Result<CorrectorConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            CorrectorConfig::from_file(path)?
        }
        None => CorrectorConfig::default(),
    };

    if let Some(path) = &cli_args.domains {
        info!("loading reference domains from {}", path.display());
        config.load_domains_file(path)?;
    }

    Ok(config)
}

/// Correct addresses given on the command line and/or in a file.
fn correct_emails(args: CorrectArgs, cli_args: &MailfixArgs) -> Result<()> {
    let mut emails = args.emails;
    if let Some(input) = &args.input {
        emails.extend(read_entries_from_file(input)?);
    }
    if emails.is_empty() {
        return Err(MailfixError::other(
            "no email addresses given; pass them as arguments or with --input",
        ));
    }

    let corrector = EmailCorrector::from_config(&load_config(cli_args)?)?;
    debug!("correcting {} addresses", emails.len());

    let mut results = Vec::with_capacity(emails.len());
    let mut changed = 0;
    let mut invalid = 0;
    for (email, result) in emails.iter().zip(corrector.correct_batch(&emails)) {
        let outcome = match result {
            Ok(correction) => {
                let is_changed = correction.is_changed();
                if is_changed {
                    changed += 1;
                }
                CorrectionOutcome {
                    input: correction.original,
                    corrected: Some(correction.corrected),
                    changed: is_changed,
                    distance: Some(correction.distance),
                    error: None,
                }
            }
            Err(e) => {
                invalid += 1;
                CorrectionOutcome {
                    input: email.clone(),
                    corrected: None,
                    changed: false,
                    distance: None,
                    error: Some(e.to_string()),
                }
            }
        };

        if !args.changed_only || outcome.changed {
            results.push(outcome);
        }
    }

    output_result(
        "Correction results",
        &CorrectionReport {
            results,
            total: emails.len(),
            changed,
            invalid,
        },
        cli_args,
    )?;

    if invalid > 0 {
        return Err(MailfixError::invalid_format(format!(
            "{invalid} of {} addresses are malformed",
            emails.len()
        )));
    }
    Ok(())
}

/// Suggest the closest reference domain for each argument.
fn suggest_domains(args: SuggestArgs, cli_args: &MailfixArgs) -> Result<()> {
    let corrector = EmailCorrector::from_config(&load_config(cli_args)?)?;
    let domains = corrector.domain_corrector();

    let suggestions = args
        .domains
        .iter()
        .map(|domain| {
            let suggestion = domains.suggest_with_distance(domain);
            SuggestionOutcome {
                changed: suggestion.is_changed(),
                domain: suggestion.original,
                suggestion: suggestion.suggestion,
                distance: suggestion.distance,
            }
        })
        .collect();

    output_result(
        "Domain suggestions",
        &SuggestionReport { suggestions },
        cli_args,
    )
}

/// Check address syntax without correcting.
fn validate_emails(args: ValidateArgs, cli_args: &MailfixArgs) -> Result<()> {
    let results: Vec<ValidationOutcome> = args
        .emails
        .iter()
        .map(|email| ValidationOutcome {
            email: email.clone(),
            valid: is_valid_format(email),
        })
        .collect();
    let invalid = results.iter().filter(|r| !r.valid).count();

    output_result(
        "Validation results",
        &ValidationReport { results, invalid },
        cli_args,
    )?;

    if invalid > 0 {
        return Err(MailfixError::invalid_format(format!(
            "{invalid} of {} addresses are malformed",
            args.emails.len()
        )));
    }
    Ok(())
}

/// Print the edit distance between two strings.
fn show_distance(args: DistanceArgs, cli_args: &MailfixArgs) -> Result<()> {
    let distance = levenshtein_distance(&args.a, &args.b);
    output_result(
        "Edit distance",
        &DistanceResult {
            a: args.a,
            b: args.b,
            distance,
        },
        cli_args,
    )
}

/// List the active reference domains.
fn list_domains(cli_args: &MailfixArgs) -> Result<()> {
    output_result("Reference domains", &domain_listing(cli_args)?, cli_args)
}

/// Collect the active reference domains and their repeats.
fn domain_listing(cli_args: &MailfixArgs) -> Result<DomainListing> {
    let reference = load_config(cli_args)?.reference_domains();
    Ok(DomainListing {
        domains: reference.as_slice().to_vec(),
        duplicates: reference.duplicates().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn parse(argv: &[&str]) -> MailfixArgs {
        MailfixArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_config_defaults() {
        let args = parse(&["mailfix", "domains"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config, CorrectorConfig::default());
    }

    #[test]
    fn test_domains_file_overrides_config() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, r#"{{"domains": ["a.com"], "parallel_threshold": 4}}"#).unwrap();
        let mut domains_file = NamedTempFile::new().unwrap();
        writeln!(domains_file, "b.com").unwrap();
        writeln!(domains_file, "c.com").unwrap();

        let config_path = config_file.path().to_string_lossy().to_string();
        let domains_path = domains_file.path().to_string_lossy().to_string();
        let args = parse(&[
            "mailfix",
            "--config",
            config_path.as_str(),
            "--domains",
            domains_path.as_str(),
            "domains",
        ]);

        let config = load_config(&args).unwrap();
        assert_eq!(config.domains, vec!["b.com", "c.com"]);
        assert_eq!(config.parallel_threshold, 4);
    }

    #[test]
    fn test_correct_reports_malformed_input() {
        let args = parse(&[
            "mailfix",
            "--quiet",
            "--format",
            "json",
            "correct",
            "user@gmial.com",
            "user@",
        ]);
        let err = execute_command(args).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_correct_from_input_file() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "a@gmial.com").unwrap();
        writeln!(input).unwrap();
        writeln!(input, "  b@yaho.com  ").unwrap();

        let input_path = input.path().to_string_lossy().to_string();
        let args = parse(&[
            "mailfix",
            "--quiet",
            "--format",
            "json",
            "correct",
            "--input",
            input_path.as_str(),
        ]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_domains_command_lists_duplicates() {
        let mut domains_file = NamedTempFile::new().unwrap();
        writeln!(domains_file, "b.com").unwrap();
        writeln!(domains_file, "c.com").unwrap();
        writeln!(domains_file, "b.com").unwrap();

        let domains_path = domains_file.path().to_string_lossy().to_string();
        let argv = [
            "mailfix",
            "--quiet",
            "--format",
            "json",
            "--domains",
            domains_path.as_str(),
            "domains",
        ];

        let listing = domain_listing(&parse(&argv)).unwrap();
        assert_eq!(listing.domains, vec!["b.com", "c.com", "b.com"]);
        assert_eq!(listing.duplicates, vec!["b.com"]);

        assert!(execute_command(parse(&argv)).is_ok());
    }

    #[test]
    fn test_domains_command_builtin_list() {
        let listing = domain_listing(&parse(&["mailfix", "domains"])).unwrap();
        assert_eq!(listing.domains[0], "gmail.com");
        assert_eq!(
            listing.duplicates,
            vec!["fastmail.com", "tutanota.com", "hushmail.com"]
        );
        assert!(execute_command(parse(&["mailfix", "--quiet", "domains"])).is_ok());
    }

    #[test]
    fn test_correct_without_addresses_fails() {
        let args = parse(&["mailfix", "--quiet", "correct"]);
        assert!(matches!(
            execute_command(args).unwrap_err(),
            MailfixError::Other(_)
        ));
    }

    #[test]
    fn test_validate_and_distance() {
        let args = parse(&["mailfix", "--quiet", "validate", "test@example.com"]);
        assert!(execute_command(args).is_ok());

        let args = parse(&["mailfix", "--quiet", "validate", "invalidemail.com"]);
        assert!(execute_command(args).unwrap_err().is_invalid_format());

        let args = parse(&["mailfix", "--quiet", "distance", "gmial.com", "gmail.com"]);
        assert!(execute_command(args).is_ok());
    }
}
