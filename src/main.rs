use clap::Parser;
use small_sieve::config::cli::{Command, OutputFormat};
use small_sieve::utils::{logger, validation::Validate};
use small_sieve::{
    format_sequence, CliConfig, CsvPeople, Person, Result, SieveConfig, SieveEngine, SieveError,
    TomlConfig,
};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_settings(cli: &CliConfig) -> Result<SieveConfig> {
    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file_config = TomlConfig::from_file(path)?;
            SieveConfig::from_toml(&file_config)
        }
        None => SieveConfig::default(),
    };
    Ok(settings)
}

/// Returns the process exit code on success.
fn run(cli: &CliConfig) -> Result<i32> {
    let settings = load_settings(cli)?;

    match cli.command() {
        Command::Filter { numbers, less_than } => {
            let settings = settings.with_overrides(&numbers, less_than);
            let engine = SieveEngine::new(settings);
            let kept = engine.run_filter();
            println!("{}", format_sequence(&kept));
            Ok(0)
        }
        Command::Validate { name, age, phone } => {
            settings.validate()?;
            let engine = SieveEngine::new(settings);
            let person = Person::new(name, age, phone.as_str());
            match engine.ensure_valid(&person) {
                Ok(()) => {
                    println!("valid");
                    Ok(0)
                }
                Err(SieveError::InvalidPersonError { reasons, .. }) => {
                    println!("invalid: {}", reasons);
                    Ok(1)
                }
                Err(e) => Err(e),
            }
        }
        Command::ValidateFile { path, format } => {
            settings.validate()?;
            let engine = SieveEngine::new(settings);
            let summary = engine.run_validation(&CsvPeople::new(path))?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Text => {
                    for outcome in &summary.outcomes {
                        let failures = outcome.report.failures();
                        if failures.is_empty() {
                            println!("{}: valid", outcome.person.name);
                        } else {
                            let reasons: Vec<String> =
                                failures.iter().map(|r| r.to_string()).collect();
                            println!("{}: invalid: {}", outcome.person.name, reasons.join(", "));
                        }
                    }
                    println!("{} valid, {} invalid", summary.valid, summary.invalid);
                }
            }

            Ok(if summary.all_valid() { 0 } else { 1 })
        }
    }
}
