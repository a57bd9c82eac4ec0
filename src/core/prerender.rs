use crate::core::loader::LaborDataLoader;
use crate::domain::model::PageData;
use crate::domain::ports::{ConfigProvider, Fetcher, Storage};
use crate::utils::error::Result;

/// Serialises page data the same way for the data file and for stdout.
pub fn render_page(page: &PageData, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(page)?
    } else {
        serde_json::to_vec(page)?
    };
    Ok(bytes)
}

/// Runs the loader once and writes the page data file.
pub struct Prerenderer<F: Fetcher, S: Storage> {
    loader: LaborDataLoader<F>,
    storage: S,
    filename: String,
    pretty: bool,
}

impl<F: Fetcher, S: Storage> Prerenderer<F, S> {
    pub fn new<C: ConfigProvider>(fetcher: F, storage: S, config: &C) -> Self {
        Self {
            loader: LaborDataLoader::new(fetcher, config.source_url()),
            storage,
            filename: config.output_filename().to_string(),
            pretty: config.pretty(),
        }
    }

    /// Returns the page data and the path it was written to. Only the write
    /// can fail: a failed fetch still produces a fallback file.
    pub async fn run(&self) -> Result<(PageData, String)> {
        // 載入資料（失敗時已轉為預設值）
        tracing::info!("Loading labor data from {}", self.loader.url());
        let page = self.loader.load().await;

        if let Some(error) = &page.error {
            tracing::warn!("Prerendering fallback page data: {}", error);
        } else {
            let (monthly, industries, occupations) = page.entry_counts();
            tracing::info!(
                "Loaded {} monthly, {} industry and {} occupation entries",
                monthly,
                industries,
                occupations
            );
        }

        // 序列化並寫入儲存
        let bytes = render_page(&page, self.pretty)?;
        tracing::debug!("Writing {} bytes to {}", bytes.len(), self.filename);
        let output_path = self.storage.write_file(&self.filename, &bytes).await?;

        Ok((page, output_path))
    }
}
