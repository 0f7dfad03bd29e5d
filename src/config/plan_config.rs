use crate::core::registry::CapabilityRegistry;
use crate::domain::model::RunParams;
use crate::utils::error::{CapcheckError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A check plan: which models to build and which capabilities to check them for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub plan: PlanInfo,
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInfo {
    pub name: String,
    pub description: Option<String>,
    /// Default for checks that do not set `require_extra` themselves.
    pub require_extra: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: ModelKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    Const {
        value: f64,
    },
    Broken,
    Decay {
        defaults: Option<RunParams>,
        /// Run once with these parameters before the checks.
        run: Option<RunParams>,
    },
    DeclaredOnly {
        capabilities: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub model: String,
    pub capability: String,
    pub require_extra: Option<bool>,
}

impl PlanConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CapcheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CapcheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CapcheckError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn model(&self, name: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Effective `require_extra` for a check, before any CLI override.
    pub fn require_extra_for(&self, check: &CheckConfig) -> bool {
        check
            .require_extra
            .or(self.plan.require_extra)
            .unwrap_or(false)
    }

    pub fn validate_with(&self, registry: &CapabilityRegistry) -> Result<()> {
        validate_non_empty_string("plan.name", &self.plan.name)?;

        for model in &self.models {
            validate_non_empty_string("models.name", &model.name)?;
            if let ModelKind::DeclaredOnly { capabilities } = &model.kind {
                if capabilities.is_empty() {
                    return Err(CapcheckError::InvalidConfigValueError {
                        field: format!("models.{}.capabilities", model.name),
                        value: "[]".to_string(),
                        reason: "A declared_only model must declare at least one capability"
                            .to_string(),
                    });
                }
                for capability in capabilities {
                    registry.lookup(capability)?;
                }
            }
        }
        validate_unique_names("models", self.models.iter().map(|m| m.name.as_str()))?;

        if self.checks.is_empty() {
            return Err(CapcheckError::MissingConfigError {
                field: "checks".to_string(),
            });
        }

        for check in &self.checks {
            if self.model(&check.model).is_none() {
                return Err(CapcheckError::UnknownModel {
                    name: check.model.clone(),
                });
            }
            registry.lookup(&check.capability)?;
        }

        Ok(())
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_with(&CapabilityRegistry::builtin())
    }
}
