use crate::reports::{self, TextReport};
use clap::Args;
use keyfit::config::Config;
use keyfit::error::KfResult;
use keyfit::registry::LayoutRegistry;
use keyfit::text::{self, SampleText, TextSource};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Built-in sample text(s): usher, colemak.
    #[arg(short, long, value_delimiter = ',')]
    pub sample: Vec<SampleText>,

    /// Text file(s) to analyse.
    #[arg(short, long)]
    pub file: Vec<PathBuf>,

    /// Literal text to analyse.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read the text from standard input.
    #[arg(long, default_value_t = false)]
    pub stdin: bool,

    /// Analyse only these layouts.
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub enable: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,
}

impl AnalyzeArgs {
    /// Requested texts in argument order; every sample when none is given.
    pub fn sources(&self) -> Vec<TextSource> {
        let mut sources: Vec<TextSource> = self
            .sample
            .iter()
            .map(|s| TextSource::Sample(*s))
            .chain(self.file.iter().cloned().map(TextSource::File))
            .collect();

        if let Some(t) = &self.text {
            sources.push(TextSource::Inline(t.clone()));
        }
        if self.stdin {
            sources.push(TextSource::Stdin);
        }

        if sources.is_empty() {
            sources = SampleText::iter().map(TextSource::Sample).collect();
        }
        sources
    }

    pub fn apply_selection(&self, registry: &mut LayoutRegistry) -> KfResult<()> {
        if !self.only.is_empty() {
            registry.enable_only(&self.only)?;
        }
        for name in &self.enable {
            registry.set_enabled(name, true)?;
        }
        for name in &self.disable {
            registry.set_enabled(name, false)?;
        }
        Ok(())
    }
}

pub fn run(args: AnalyzeArgs, config: Config) -> KfResult<()> {
    let mut registry = super::build_registry(&config.analysis)?;
    args.apply_selection(&mut registry)?;

    let enabled: Vec<&str> = registry.enabled().map(|l| l.name()).collect();
    if enabled.is_empty() {
        warn!("⚠️  No layouts enabled; nothing to compare.");
    } else {
        info!("⌨️  Layouts: {}", enabled.join(", "));
    }

    let mut results = Vec::new();
    for source in args.sources() {
        let raw = source.read()?;
        let prepared = text::prepare(&raw, config.analysis.case_sensitive);
        let characters = prepared.chars().count();
        info!("🔎 Analysing {} ({} chars)", source, characters);

        results.push(TextReport {
            source: source.to_string(),
            characters,
            report: registry.aggregate(&prepared),
        });
    }

    reports::print_analysis(&results, &config.report)
}
