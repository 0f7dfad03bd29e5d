use capcheck::config::{LogFormat, ReportFormat};
use capcheck::utils::{logger, validation::Validate};
use capcheck::{CliConfig, PlanConfig, PlanRunner};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("🚀 Starting capcheck");
    if config.verbose {
        tracing::debug!("📋 CLI config: {:?}", config);
    }

    let plan = match PlanConfig::from_file(&config.plan).and_then(|plan| {
        plan.validate()?;
        Ok(plan)
    }) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Check plan {} is invalid: {}", config.plan, e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    tracing::info!("📁 Loaded check plan {} from {}", plan.plan.name, config.plan);

    let runner = PlanRunner::default().force_require_extra(config.require_extra);
    let report = match runner.run(&plan) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Check plan {} could not run: {}", plan.plan.name, e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    match config.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    if !report.passed() {
        tracing::warn!("{}", report.summary());
        std::process::exit(1);
    }

    tracing::info!("{}", report.summary());

    Ok(())
}
