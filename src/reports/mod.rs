mod tables;

use keyfit::analyzer::AggregateReport;
use keyfit::config::{OutputFormat, ReportParams};
use keyfit::error::KfResult;
use keyfit::registry::LayoutRegistry;
use serde::Serialize;

/// Aggregate results for one analysed text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReport {
    pub source: String,
    pub characters: usize,
    pub report: AggregateReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutListing<'a> {
    name: &'a str,
    keys: usize,
    enabled: bool,
}

pub fn print_analysis(results: &[TextReport], params: &ReportParams) -> KfResult<()> {
    match params.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Table => {
            for text in results {
                println!(
                    "\n📊 === {} ({} chars) === 📊",
                    text.source, text.characters
                );
                if text.report.is_empty() {
                    println!("No layouts enabled.");
                    continue;
                }
                println!("{}", tables::summary(&text.report, params));
                println!("{}", tables::comparison(&text.report, params));
            }
        }
    }
    Ok(())
}

pub fn print_layouts(registry: &LayoutRegistry, params: &ReportParams) -> KfResult<()> {
    match params.format {
        OutputFormat::Json => {
            let listing: Vec<LayoutListing> = registry
                .layouts()
                .iter()
                .map(|l| LayoutListing {
                    name: l.name(),
                    keys: l.key_count(),
                    enabled: l.enabled,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Table => println!("\n{}", tables::layouts(registry)),
    }
    Ok(())
}
