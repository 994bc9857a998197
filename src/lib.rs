pub mod analyzer;
pub mod config;
pub mod error;
pub mod layouts;
pub mod loader;
pub mod profile;
pub mod registry;
pub mod text;
// cmd and reports are modules of the binary crate (main).

pub use analyzer::{aggregate, analyze_one, normalize};
pub use layouts::Layout;
pub use registry::LayoutRegistry;
