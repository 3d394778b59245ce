pub mod config;
pub mod server;
pub mod ui;

pub use server::run_server;
