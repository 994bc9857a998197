pub mod analyze;
pub mod layouts;

use keyfit::config::AnalysisParams;
use keyfit::error::KfResult;
use keyfit::loader;
use keyfit::registry::LayoutRegistry;
use tracing::info;

/// Built-in layouts followed by any from `--layouts-dir`, in that order.
pub fn build_registry(params: &AnalysisParams) -> KfResult<LayoutRegistry> {
    let mut registry = LayoutRegistry::with_builtin();

    if let Some(dir) = &params.layouts_dir {
        info!("📂 Loading layouts from: {}", dir.display());
        for layout in loader::load_layout_dir(dir)? {
            registry.register(layout)?;
        }
    }

    if params.include_disabled {
        let names: Vec<String> = registry.names().iter().map(|n| n.to_string()).collect();
        for name in &names {
            registry.set_enabled(name, true)?;
        }
    }

    Ok(registry)
}
