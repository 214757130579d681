pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{decoder_for, encode_csv, CsvDecoder, JsonDecoder};
pub use config::{toml_config::ReportConfig, Settings};
pub use crate::core::{engine::ReportEngine, report::build_report, resolver::resolve_input};
pub use domain::model::{InputFormat, Product, ProductReport};
pub use utils::error::{ReportError, Result};
