//! `stockroom` command line: settings and the demo driver.

pub mod demo;
pub mod settings;

pub use settings::Settings;
