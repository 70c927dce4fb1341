use addtime::utils::error::ErrorCategory;
use addtime::utils::{logger, validation::Validate};
use addtime::{AddTime, AddTimeError, CliConfig, EvaluationResult, Evaluator, Function, OutputFormat, TomlConfig};
use clap::Parser;

fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Validation => 1,
        ErrorCategory::Config => 2,
        ErrorCategory::System => 3,
    }
}

fn fail(e: &AddTimeError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message(AddTime::NAME));
    std::process::exit(exit_code(e.category()));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先載入設定檔，日誌層級可能由設定檔決定
    let file_config = cli.config.as_ref().map(TomlConfig::from_file).transpose();

    let (level, json_logs) = match &file_config {
        Ok(Some(config)) => (config.log_level().map(str::to_string), config.json_logs()),
        _ => (None, false),
    };
    if json_logs {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match file_config {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let evaluator = Evaluator::new(AddTime);
    let values = match cli.values() {
        Ok(values) => values,
        Err(e) => fail(&e),
    };

    let Some(mut config) = file_config else {
        // 單次呼叫：直接輸出結果
        let format = cli.format.unwrap_or_default();
        match evaluator.function().call(&values) {
            Ok(value) => {
                match format {
                    OutputFormat::Text => println!("{}", value),
                    OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
                }
                return Ok(());
            }
            Err(e) => fail(&e),
        }
    };

    // 命令列參數併入批次後再驗證，名稱衝突會被擋下
    if !values.is_empty() {
        config.push_command_line(values);
    }
    if let Err(e) = config.validate() {
        fail(&e);
    }
    tracing::info!("✅ Configuration loaded and validated successfully");

    let results = evaluator.run(&config.evaluations);
    let format = cli.format.or(config.output_format()).unwrap_or_default();
    print_results(&results, format)?;

    if results.iter().any(|r| !r.is_ok()) {
        std::process::exit(exit_code(ErrorCategory::Validation));
    }

    Ok(())
}

fn print_results(results: &[EvaluationResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            for result in results {
                match (&result.value, &result.error) {
                    (Some(value), _) => println!("{}: {}", result.name, value),
                    (None, Some(error)) => println!("{}: ❌ {}", result.name, error),
                    (None, None) => println!("{}:", result.name),
                }
            }
        }
    }
    Ok(())
}
