mod client;
mod dotfile;
mod error;
pub mod format;
mod source;
pub mod types;

pub use client::PassClient;
pub use source::{DataSource, DotfilePaths, FixtureSource, LiveSource, DEFAULT_API_BASE};
pub use types::VisualPassReport;
