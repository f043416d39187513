use anyhow::Result;
use locale_check::config::Config;
use locale_check::i18n::{
    load_language_table, CheckError, CheckOptions, ConsistencyChecker, LanguageRegistry,
    LanguageTable,
};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        // Missing groups and words end the scan early but keep the default exit status
        Err(e) => match e.downcast_ref::<CheckError>() {
            Some(finding) if finding.is_finding() => {
                error!("Check stopped: {}", finding);
                ExitCode::SUCCESS
            }
            _ => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_check=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let [reference_code, first_code, second_code] = config.locale_codes();

    info!(
        "Checking {} and {} against {}",
        language_name(first_code),
        language_name(second_code),
        language_name(reference_code)
    );

    // Step 1: Load all three locale files before checking
    let reference = load(&config, reference_code)?;
    let first = load(&config, first_code)?;
    let second = load(&config, second_code)?;

    // Step 2: Compare
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let metrics = ConsistencyChecker::new(&reference, &first, &second)
        .with_options(CheckOptions {
            validate: config.check_placeholders,
            report_extra: true,
        })
        .check(&mut out)?;

    let report = metrics.report();
    if config.show_summary {
        writeln!(out)?;
        writeln!(out, "{}", report)?;
    }
    out.flush()?;

    info!("Check complete: {}", serde_json::to_string(&report)?);
    Ok(())
}

fn load(config: &Config, code: &str) -> Result<LanguageTable> {
    let path = config.locale_path(code)?;
    Ok(load_language_table(&path)?)
}

fn language_name(code: &str) -> String {
    match LanguageRegistry::get().get_by_code(code) {
        Some(lang) => format!("{} ({})", lang.name, lang.native_name),
        None => code.to_string(),
    }
}
