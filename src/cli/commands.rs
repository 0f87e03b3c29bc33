//! Command execution logic for the Magus CLI.

use std::fs;
use std::path::Path;

use crate::cli::args::{Command, EventsArgs, MagusArgs, ResolveArgs, SuggestArgs};
use crate::cli::output::{
    EventReport, ResolveReport, ResolvedClass, ResolvedProperty, SuggestionReport, output_result,
};
use crate::dispatch::event::is_event_name;
use crate::error::{MagusError, Result};
use crate::metadata::class::ClassMetadata;
use crate::registry::ClassRegistry;
use crate::spelling::suggest::suggest;

/// Execute the given CLI command.
pub fn execute_command(args: MagusArgs) -> Result<()> {
    match args.command.clone() {
        Command::Resolve(resolve_args) => execute_resolve(resolve_args, &args),
        Command::Suggest(suggest_args) => execute_suggest(suggest_args, &args),
        Command::Events(events_args) => execute_events(events_args, &args),
    }
}

/// Load a registry from a JSON metadata file (an array of class
/// descriptions, or a single one).
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<ClassRegistry> {
    let text = fs::read_to_string(path)?;
    let classes: Vec<ClassMetadata> = if text.trim_start().starts_with('[') {
        serde_json::from_str(&text)?
    } else {
        vec![serde_json::from_str(&text)?]
    };

    let registry = ClassRegistry::new();
    for class in classes {
        registry.register(class)?;
    }
    Ok(registry)
}

fn selected_classes(registry: &ClassRegistry, filter: Option<&str>) -> Result<Vec<String>> {
    match filter {
        Some(name) => {
            // Fail early with the usual unknown-class error.
            registry.class(name)?;
            Ok(vec![name.to_string()])
        }
        None => Ok(registry.class_names()),
    }
}

/// Build the resolve report for a registry.
pub fn build_resolve_report(
    registry: &ClassRegistry,
    filter: Option<&str>,
) -> Result<ResolveReport> {
    let mut classes = Vec::new();
    for class_name in selected_classes(registry, filter)? {
        let table = registry.properties(&class_name)?;
        let properties = table
            .iter()
            .map(|descriptor| ResolvedProperty {
                name: descriptor.name().to_string(),
                readable: descriptor.is_readable(),
                writable: descriptor.is_writable(),
                by_reference: descriptor.returns_by_reference(),
                read_method: descriptor.read_method(),
                write_method: descriptor.write_method(),
            })
            .collect();
        classes.push(ResolvedClass {
            class: class_name,
            properties,
        });
    }
    Ok(ResolveReport { classes })
}

/// Build the event reports for a registry.
pub fn build_event_reports(
    registry: &ClassRegistry,
    filter: Option<&str>,
) -> Result<Vec<EventReport>> {
    let mut reports = Vec::new();
    for class_name in selected_classes(registry, filter)? {
        let class = registry.class(&class_name)?;
        let events = class
            .public_instance_field_names()
            .into_iter()
            .filter(|name| is_event_name(name))
            .collect();
        reports.push(EventReport {
            class: class_name,
            events,
        });
    }
    Ok(reports)
}

fn execute_resolve(resolve_args: ResolveArgs, args: &MagusArgs) -> Result<()> {
    let registry = load_registry(&resolve_args.metadata_file)?;
    let report = build_resolve_report(&registry, resolve_args.class.as_deref())?;
    output_result("Resolved virtual properties", &report, args)
}

fn execute_suggest(suggest_args: SuggestArgs, args: &MagusArgs) -> Result<()> {
    if suggest_args.candidates.is_empty() {
        return Err(MagusError::metadata("At least one candidate is required"));
    }
    let report = SuggestionReport {
        suggestion: suggest(suggest_args.candidates.iter(), &suggest_args.target),
        target: suggest_args.target,
    };
    output_result("Spelling suggestion", &report, args)
}

fn execute_events(events_args: EventsArgs, args: &MagusArgs) -> Result<()> {
    let registry = load_registry(&events_args.metadata_file)?;
    let reports = build_event_reports(&registry, events_args.class.as_deref())?;
    output_result("Event fields", &reports, args)
}
