pub mod plan_config;

pub use plan_config::{CheckConfig, ModelConfig, ModelKind, PlanConfig, PlanInfo};

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "capcheck")]
#[command(about = "Check models against the capabilities a test requires")]
pub struct CliConfig {
    #[arg(long, help = "Path to the TOML check plan")]
    pub plan: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Require a registered extra check for every capability")]
    pub require_extra: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_defaults() {
        let config = CliConfig::parse_from(["capcheck", "--plan", "checks.toml"]);
        assert_eq!(config.plan, "checks.toml");
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(!config.require_extra);
    }

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "capcheck",
            "--plan",
            "checks.toml",
            "--format",
            "json",
            "--log-format",
            "json",
            "--require-extra",
            "--verbose",
        ]);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.require_extra);
        assert!(config.verbose);
    }
}
