use crate::analyzer::{self, AggregateReport};
use crate::error::{KeyFitError, KfResult};
use crate::layouts::{self, Layout};
use tracing::{debug, info};

/// Named layouts in registration order.
///
/// Populate once before analysing; afterwards only the enabled flags change.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: Vec<Layout>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in layout.
    pub fn with_builtin() -> Self {
        Self {
            layouts: layouts::get_all_layouts(),
        }
    }

    pub fn register(&mut self, layout: Layout) -> KfResult<()> {
        if self.get(layout.name()).is_some() {
            return Err(KeyFitError::DuplicateLayout(layout.name().to_string()));
        }
        debug!(
            "Registered layout '{}' ({} keys, enabled={})",
            layout.name(),
            layout.key_count(),
            layout.enabled
        );
        self.layouts.push(layout);
        Ok(())
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> KfResult<()> {
        let layout = self
            .layouts
            .iter_mut()
            .find(|l| l.name() == name)
            .ok_or_else(|| KeyFitError::UnknownLayout(name.to_string()))?;

        if layout.enabled != enabled {
            info!(
                "{} layout '{}'",
                if enabled { "Enabling" } else { "Disabling" },
                name
            );
        }
        layout.enabled = enabled;
        Ok(())
    }

    /// Enables exactly the named layouts and disables every other one.
    pub fn enable_only(&mut self, names: &[String]) -> KfResult<()> {
        for name in names {
            if self.get(name).is_none() {
                return Err(KeyFitError::UnknownLayout(name.clone()));
            }
        }
        for layout in &mut self.layouts {
            layout.enabled = names.iter().any(|n| n == layout.name());
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name() == name)
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.iter().filter(|l| l.enabled)
    }

    pub fn names(&self) -> Vec<&str> {
        self.layouts.iter().map(|l| l.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn aggregate(&self, text: &str) -> AggregateReport {
        analyzer::aggregate(text, &self.layouts)
    }
}
