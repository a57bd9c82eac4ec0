use clap::Parser;
use labor_stats_loader::core::prerender::render_page;
use labor_stats_loader::core::ConfigProvider;
use labor_stats_loader::utils::{logger, validation::Validate};
use labor_stats_loader::{
    CliArgs, LaborDataLoader, LoaderConfig, LoaderError, LocalStorage, Prerenderer,
    ReqwestFetcher,
};
use std::io::Write;

fn report_failure(context: &str, e: &LoaderError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    e.severity().exit_code()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting labor-stats-loader");
    tracing::debug!("CLI args: {:?}", args);

    // 載入並驗證配置：TOML 檔案在先，命令列參數覆蓋
    let config = match LoaderConfig::from_cli(&args).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => std::process::exit(report_failure("Configuration validation failed", &e)),
    };
    tracing::debug!("Effective config: {:?}", config);

    // 只輸出到 stdout，不寫檔
    if args.stdout {
        let page = LaborDataLoader::new(ReqwestFetcher::new(), config.source_url())
            .load()
            .await;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&render_page(&page, config.pretty())?)?;
        writeln!(stdout)?;
        return Ok(());
    }

    // 創建存儲並預先渲染頁面資料
    let storage = LocalStorage::new(config.output_path().to_string());
    let prerenderer = Prerenderer::new(ReqwestFetcher::new(), storage, &config);

    match prerenderer.run().await {
        Ok((page, output_path)) => {
            if let Some(generated) = page.generated_at_utc() {
                tracing::info!("🕒 Data generated at {}", generated.to_rfc3339());
            } else if let Some(raw) = &page.generated_at {
                tracing::debug!("generated_at is not a timestamp: {}", raw);
            }
            tracing::info!("📁 Page data saved to: {}", output_path);
            println!("📁 Page data saved to: {}", output_path);
        }
        Err(e) => {
            // 根據錯誤嚴重程度決定退出碼
            let exit_code = report_failure("Prerender failed", &e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
