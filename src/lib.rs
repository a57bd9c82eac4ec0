pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::LoaderConfig;

pub use adapters::{LocalStorage, ReqwestFetcher};
pub use core::{loader::LaborDataLoader, prerender::Prerenderer};
pub use domain::model::{LaborStatsDocument, PageData};
pub use utils::error::{LoaderError, Result};
