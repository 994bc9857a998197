use crate::reports;
use clap::Args;
use keyfit::config::Config;
use keyfit::error::KfResult;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: Config) -> KfResult<()> {
    let registry = super::build_registry(&config.analysis)?;
    reports::print_layouts(&registry, &config.report)
}
