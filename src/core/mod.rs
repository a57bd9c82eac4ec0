pub mod loader;
pub mod prerender;

pub use crate::domain::model::{LaborStatsDocument, PageData};
pub use crate::domain::ports::{ConfigProvider, FetchResponse, Fetcher, Storage};
pub use crate::utils::error::Result;
