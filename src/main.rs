use clap::Parser;
use visitor_pass::core::extract::VisitorExtractor;
use visitor_pass::core::render::{render, OutputFormat};
use visitor_pass::domain::ports::Clock;
use visitor_pass::utils::error::{ErrorSeverity, PassError};
use visitor_pass::utils::logger;
use visitor_pass::{CliConfig, FixedClock, FormHandler, MemoryTarget, SubmitEvent, SystemClock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting visitor-pass CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut event = match submission(&config) {
        Ok(event) => event,
        Err(e) => exit_with(e),
    };

    // 系統時鐘只在最外層讀取
    let today = config.today.unwrap_or_else(|| SystemClock.today());
    tracing::debug!("Evaluating as of {}", today);

    let mut handler =
        FormHandler::new(FixedClock::new(today), MemoryTarget::default()).with_strict(config.strict);

    match handler.handle_submit(&mut event) {
        Ok(summary) => {
            let output = match config.format {
                OutputFormat::Markup => handler.target().contents().to_string(),
                format => render(&summary, format)?,
            };
            println!("{}", output);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

/// Builds the submit event from flags, or from `--from-text`.
fn submission(config: &CliConfig) -> Result<SubmitEvent, PassError> {
    let Some(path) = &config.from_text else {
        return Ok(SubmitEvent::new(
            config.name.clone().unwrap_or_default(),
            config.dob.clone().unwrap_or_default(),
        ));
    };

    tracing::info!("📄 Reading visitor details from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let details = VisitorExtractor::new()?.extract(&text);

    if let Some(visit) = &details.date_of_visit {
        tracing::info!("Date of Visit: {}", visit);
    }
    if let Some(purpose) = &details.purpose {
        tracing::info!("Purpose: {}", purpose);
    }
    for error in &details.errors {
        tracing::warn!("⚠️ {}", error);
    }

    let input = details.to_visitor_input();
    if config.strict {
        details.into_result()?;
    }
    Ok(SubmitEvent::new(input.name, input.dob))
}

fn exit_with(e: PassError) -> ! {
    tracing::error!(
        "❌ Pass could not be issued: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
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
