//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MailfixArgs, OutputFormat};
use crate::error::Result;

/// Outcome of correcting one input line.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutcome {
    pub input: String,
    pub corrected: Option<String>,
    pub changed: bool,
    pub distance: Option<usize>,
    pub error: Option<String>,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub results: Vec<CorrectionOutcome>,
    pub total: usize,
    pub changed: usize,
    pub invalid: usize,
}

/// One domain lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    pub domain: String,
    pub suggestion: String,
    pub distance: usize,
    pub changed: bool,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub suggestions: Vec<SuggestionOutcome>,
}

/// One syntax check.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub email: String,
    pub valid: bool,
}

/// Result structure for the validate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub results: Vec<ValidationOutcome>,
    pub invalid: usize,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// Result structure for the domains command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DomainListing {
    pub domains: Vec<String>,
    pub duplicates: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MailfixArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MailfixArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().ends_with("CorrectionReport") => {
            output_corrections_human(&value, args)
        }
        _ if std::any::type_name::<T>().ends_with("SuggestionReport") => {
            output_suggestions_human(&value)
        }
        _ if std::any::type_name::<T>().ends_with("ValidationReport") => {
            output_validation_human(&value)
        }
        _ if std::any::type_name::<T>().ends_with("DomainListing") => {
            output_domains_human(&value, args)
        }
        _ => output_generic_human(&value),
    }
}

/// Output corrections in human format.
fn output_corrections_human(value: &serde_json::Value, args: &MailfixArgs) -> Result<()> {
    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        for outcome in results {
            let input = outcome.get("input").and_then(|i| i.as_str()).unwrap_or("");

            if let Some(error) = outcome.get("error").and_then(|e| e.as_str()) {
                println!("{input}: {error}");
            } else if let Some(corrected) = outcome.get("corrected").and_then(|c| c.as_str()) {
                let changed = outcome
                    .get("changed")
                    .and_then(|c| c.as_bool())
                    .unwrap_or(false);
                if changed {
                    let distance = outcome
                        .get("distance")
                        .and_then(|d| d.as_u64())
                        .unwrap_or(0);
                    println!("{input} -> {corrected} (distance {distance})");
                } else {
                    println!("{input} (ok)");
                }
            }
        }
    }

    if args.verbosity() > 0 {
        let total = value.get("total").and_then(|t| t.as_u64()).unwrap_or(0);
        let changed = value.get("changed").and_then(|c| c.as_u64()).unwrap_or(0);
        let invalid = value.get("invalid").and_then(|i| i.as_u64()).unwrap_or(0);
        println!();
        println!("{total} addresses, {changed} corrected, {invalid} invalid");
    }
    Ok(())
}

/// Output domain suggestions in human format.
fn output_suggestions_human(value: &serde_json::Value) -> Result<()> {
    if let Some(suggestions) = value.get("suggestions").and_then(|s| s.as_array()) {
        for suggestion in suggestions {
            let domain = suggestion.get("domain").and_then(|d| d.as_str()).unwrap_or("");
            let suggested = suggestion
                .get("suggestion")
                .and_then(|s| s.as_str())
                .unwrap_or("");
            let distance = suggestion
                .get("distance")
                .and_then(|d| d.as_u64())
                .unwrap_or(0);
            println!("{domain} -> {suggested} (distance {distance})");
        }
    }
    Ok(())
}

/// Output validation results in human format.
fn output_validation_human(value: &serde_json::Value) -> Result<()> {
    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        for outcome in results {
            let email = outcome.get("email").and_then(|e| e.as_str()).unwrap_or("");
            let valid = outcome
                .get("valid")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            println!("{email}: {}", if valid { "valid" } else { "invalid" });
        }
    }
    Ok(())
}

/// Output the reference list in human format.
fn output_domains_human(value: &serde_json::Value, args: &MailfixArgs) -> Result<()> {
    if let Some(domains) = value.get("domains").and_then(|d| d.as_array()) {
        for domain in domains {
            println!("{}", format_value(domain));
        }
        if args.verbosity() > 0 {
            println!();
            println!("{} domains", domains.len());
        }
    }

    if let Some(duplicates) = value.get("duplicates").and_then(|d| d.as_array())
        && !duplicates.is_empty()
    {
        let formatted = duplicates
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Duplicates: {formatted}");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MailfixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
