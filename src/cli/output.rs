//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MagusArgs, OutputFormat};
use crate::error::Result;

/// One resolved virtual property, flattened for reporting.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolvedProperty {
    pub name: String,
    pub readable: bool,
    pub writable: bool,
    pub by_reference: bool,
    pub read_method: Option<String>,
    pub write_method: Option<String>,
}

/// The resolved property table of one class.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolvedClass {
    pub class: String,
    pub properties: Vec<ResolvedProperty>,
}

/// Report produced by the `resolve` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveReport {
    pub classes: Vec<ResolvedClass>,
}

/// Report produced by the `suggest` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub target: String,
    pub suggestion: Option<String>,
}

/// Event fields of one class, produced by the `events` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventReport {
    pub class: String,
    pub events: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MagusArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MagusArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if std::any::type_name::<T>().contains("ResolveReport") {
        output_resolve_report_human(&value);
    } else if std::any::type_name::<T>().contains("SuggestionReport") {
        output_suggestion_report_human(&value);
    } else if std::any::type_name::<T>().contains("EventReport") {
        output_event_reports_human(&value);
    } else {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}

fn output_resolve_report_human(value: &serde_json::Value) {
    let classes = value["classes"].as_array().cloned().unwrap_or_default();
    for class in classes {
        println!("{}:", class["class"].as_str().unwrap_or("?"));
        let properties = class["properties"].as_array().cloned().unwrap_or_default();
        if properties.is_empty() {
            println!("  (no virtual properties)");
            continue;
        }
        for property in properties {
            let mut capabilities = Vec::new();
            if property["readable"].as_bool().unwrap_or(false) {
                capabilities.push("read");
            }
            if property["writable"].as_bool().unwrap_or(false) {
                capabilities.push("write");
            }
            if property["by_reference"].as_bool().unwrap_or(false) {
                capabilities.push("by-ref");
            }

            let mut accessors = Vec::new();
            if let Some(method) = property["read_method"].as_str() {
                accessors.push(format!("{method}()"));
            }
            if let Some(method) = property["write_method"].as_str() {
                accessors.push(format!("{method}(value)"));
            }

            println!(
                "  {} [{}] via {}",
                property["name"].as_str().unwrap_or("?"),
                capabilities.join(", "),
                accessors.join(", "),
            );
        }
    }
}

fn output_suggestion_report_human(value: &serde_json::Value) {
    let target = value["target"].as_str().unwrap_or("?");
    match value["suggestion"].as_str() {
        Some(suggestion) => println!("{target}: did you mean {suggestion}?"),
        None => println!("{target}: no suggestion"),
    }
}

fn output_event_reports_human(value: &serde_json::Value) {
    let reports = value.as_array().cloned().unwrap_or_default();
    for report in reports {
        println!("{}:", report["class"].as_str().unwrap_or("?"));
        let events = report["events"].as_array().cloned().unwrap_or_default();
        if events.is_empty() {
            println!("  (no event fields)");
            continue;
        }
        for event in events {
            println!("  {}", event.as_str().unwrap_or("?"));
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MagusArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
