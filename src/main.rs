use clap::Parser;
use pet_report::utils::error::PetReportError;
use pet_report::utils::{logger, validation::Validate};
use pet_report::{ApiOwnerSource, CliConfig, ConsoleRenderer, GenderReportService, ReportEngine};

fn exit_with(e: &PetReportError, context: &str) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pet-report v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e, "Failed to load configuration"),
    };
    if let Err(e) = settings.validate() {
        exit_with(&e, "Configuration validation failed");
    }

    let filter = cli.pet_filter(&settings);

    let source = match ApiOwnerSource::new(&settings) {
        Ok(source) => source,
        Err(e) => exit_with(&e, "Failed to create HTTP client"),
    };
    tracing::debug!("Pet owner API: {}", source.endpoint());

    let producer = GenderReportService::new(source);
    let renderer = ConsoleRenderer::new(std::io::stdout(), settings.output_format);
    let mut engine = ReportEngine::new(producer, renderer);

    match engine.run(&filter).await {
        Ok(groups) => {
            tracing::info!("✅ Report complete ({} gender groups)", groups);
        }
        Err(e) => exit_with(&e, "Pet report failed"),
    }

    Ok(())
}
