use chrono::NaiveDate;
use clap::Parser;
use visitor_pass::config::toml_config::TomlConfig;
use visitor_pass::domain::ports::{BatchSettings, Clock};
use visitor_pass::utils::error::ErrorSeverity;
use visitor_pass::utils::{logger, validation::Validate};
use visitor_pass::{BatchRunner, LocalStorage, SystemClock};

#[derive(Parser)]
#[command(name = "batch-pass")]
#[command(about = "Issue visitor passes for every row of a CSV, configured by TOML")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "visitor-pass.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Evaluate as of this date instead of the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Override strict validation setting from config
    #[arg(long)]
    strict: Option<bool>,

    /// Dry run - evaluate visitors without writing the report
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger_with_level(args.verbose, config.log_level());
    }

    tracing::info!("🚀 Starting batch visitor passes");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(strict) = args.strict {
        config.set_strict_mode(strict);
        tracing::info!("🔧 Strict mode overridden to: {}", strict);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let today = args.today.unwrap_or_else(|| SystemClock.today());
    display_config_summary(&config, &args, today);

    let storage = LocalStorage::new(".".to_string());
    let runner = BatchRunner::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No report will be written");
        let visitors = runner.read_visitors()?;
        let total = visitors.len();
        let (summaries, invalid) = runner.evaluate(visitors, today);
        let eligible = summaries.iter().filter(|s| s.eligibility.is_eligible()).count();
        println!("🔍 Dry Run Analysis:");
        println!("  Visitors: {}", total);
        println!("  Eligible: {}", eligible);
        println!("  Not Eligible: {}", summaries.len() - eligible);
        println!("  Invalid: {}", invalid);
        return Ok(());
    }

    match runner.run(today) {
        Ok(report) => {
            tracing::info!("✅ Batch completed successfully!");
            println!(
                "✅ {} passes issued ({} eligible, {} skipped)",
                report.eligible + report.not_eligible,
                report.eligible,
                skipped(&report)
            );
            println!("📁 Report saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            std::process::exit(exit_code);
        }
    }

    Ok(())
}

// strict 模式下被略過的列
fn skipped(report: &visitor_pass::domain::model::BatchReport) -> usize {
    report.total - report.eligible - report.not_eligible
}

fn display_config_summary(config: &TomlConfig, args: &Args, today: NaiveDate) {
    println!("📋 Configuration Summary:");
    println!("  Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input());
    println!("  Output: {} ({})", config.output_file(), config.report_format().extension());
    println!("  Strict: {}", config.strict());
    println!("  As of: {}", today);

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
