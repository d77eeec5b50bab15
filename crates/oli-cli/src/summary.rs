use anyhow::Result;
use oli_cli::render::{conversions_table, issues_table, summary_table};
use oli_core::ImportReport;

use crate::commands::CheckOutcome;

pub fn print_summary(outcome: &CheckOutcome) {
    let result = &outcome.result;
    println!("File: {}", outcome.source);
    println!("Schema: {}", outcome.schema);
    if let Some(error) = &outcome.directory_error {
        println!("Project directory unavailable: {error}");
    }
    if let Some(path) = &outcome.clean_output {
        println!("Clean CSV: {}", path.display());
    }
    println!("{}", summary_table(result));
    if let Some(table) = issues_table(result) {
        println!();
        println!("Issues:");
        println!("{table}");
    }
    if let Some(table) = conversions_table(result) {
        println!();
        println!("Conversions:");
        println!("{table}");
    }
}

pub fn print_json(outcome: &CheckOutcome) -> Result<()> {
    let report = ImportReport::new(&outcome.source, outcome.schema.as_str(), &outcome.result);
    println!("{}", report.to_json()?);
    Ok(())
}
