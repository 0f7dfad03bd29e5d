use crate::adapters::diagnostics::RecordingSink;
use crate::app::models::{BrokenModel, ConstModel, DecayModel, DeclaredOnlyModel};
use crate::config::plan_config::{ModelConfig, ModelKind, PlanConfig};
use crate::core::declarations::Runnable;
use crate::core::registry::CapabilityRegistry;
use crate::domain::model::{Diagnostic, ModelDeclaration, Verdict};
use crate::domain::ports::Model;
use crate::utils::error::{CapcheckError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub model: String,
    pub capability: String,
    pub require_extra: bool,
    pub passed: bool,
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub plan: String,
    pub checked_at: DateTime<Utc>,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line outcome for the CLI log.
    pub fn summary(&self) -> String {
        if self.passed() {
            format!("✅ All {} capability checks passed", self.outcomes.len())
        } else {
            format!(
                "❌ {} of {} capability checks failed",
                self.failed_count(),
                self.outcomes.len()
            )
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Plan {} checked at {}",
            self.plan,
            self.checked_at.to_rfc3339()
        );
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            let source = match outcome.verdict.source_conformant {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };
            let extra = if outcome.require_extra {
                ", extra required"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{} {} / {} (declared: {}, implemented: {}, instance: {}{})",
                status,
                outcome.model,
                outcome.capability,
                yes_no(outcome.verdict.class_conformant),
                source,
                yes_no(outcome.verdict.instance_conformant),
                extra,
            );
            for diagnostic in &outcome.diagnostics {
                let _ = writeln!(out, "    warning: {}", diagnostic.message);
            }
        }
        let _ = writeln!(
            out,
            "{} of {} checks passed",
            self.outcomes.len() - self.failed_count(),
            self.outcomes.len()
        );
        out
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Builds the models of a plan and checks each of them for the requested
/// capabilities.
pub struct PlanRunner {
    registry: CapabilityRegistry,
    force_require_extra: bool,
}

impl PlanRunner {
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self {
            registry,
            force_require_extra: false,
        }
    }

    /// Requires an extra check on every capability, whatever the plan says.
    pub fn force_require_extra(mut self, force: bool) -> Self {
        self.force_require_extra = force;
        self
    }

    pub fn build_model(&self, config: &ModelConfig) -> Result<Box<dyn Model>> {
        let model: Box<dyn Model> = match &config.kind {
            ModelKind::Const { value } => Box::new(ConstModel::named(&config.name, *value)),
            ModelKind::Broken => Box::new(BrokenModel::named(&config.name)),
            ModelKind::Decay { defaults, run } => {
                let mut model = DecayModel::named(&config.name);
                if let Some(defaults) = defaults {
                    model.set_default_run_params(defaults.clone())?;
                }
                if let Some(params) = run {
                    model.run(params.clone())?;
                }
                Box::new(model)
            }
            ModelKind::DeclaredOnly { capabilities } => {
                let mut declaration = ModelDeclaration::new();
                for name in capabilities {
                    declaration = declaration.declares(self.registry.lookup(name)?);
                }
                Box::new(DeclaredOnlyModel::new(&config.name, declaration))
            }
        };

        model.declaration().validate()?;
        tracing::debug!(
            model = %config.name,
            capabilities = ?model
                .declaration()
                .capabilities()
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>(),
            "built model"
        );
        Ok(model)
    }

    pub fn run(&self, plan: &PlanConfig) -> Result<CheckReport> {
        plan.validate_with(&self.registry)?;
        tracing::info!(plan = %plan.plan.name, checks = plan.checks.len(), "running check plan");

        let mut models: HashMap<&str, Box<dyn Model>> = HashMap::new();
        for config in &plan.models {
            models.insert(config.name.as_str(), self.build_model(config)?);
        }

        let mut outcomes = Vec::with_capacity(plan.checks.len());
        for check in &plan.checks {
            let model = models
                .get(check.model.as_str())
                .ok_or_else(|| CapcheckError::UnknownModel {
                    name: check.model.clone(),
                })?;
            let capability = self.registry.lookup(&check.capability)?;
            let require_extra = self.force_require_extra || plan.require_extra_for(check);

            let sink = RecordingSink::forwarding();
            let verdict = capability.check_with(model.as_ref(), require_extra, &sink);
            let passed = verdict.passed();

            if passed {
                tracing::info!(model = %check.model, capability = capability.name, "capability check passed");
            } else {
                tracing::info!(model = %check.model, capability = capability.name, "capability check failed");
            }

            outcomes.push(CheckOutcome {
                model: check.model.clone(),
                capability: capability.name.to_string(),
                require_extra,
                passed,
                verdict,
                diagnostics: sink.take(),
            });
        }

        Ok(CheckReport {
            plan: plan.plan.name.clone(),
            checked_at: Utc::now(),
            outcomes,
        })
    }
}

impl Default for PlanRunner {
    fn default() -> Self {
        Self::new(CapabilityRegistry::builtin())
    }
}
