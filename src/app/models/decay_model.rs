use crate::core::declarations::{ProducesNumber, Runnable, PRODUCES_NUMBER, RUNNABLE};
use crate::domain::model::{ExtraChecks, ModelDeclaration, RunParams};
use crate::domain::ports::Model;
use crate::utils::error::{CapcheckError, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const STEPS: &str = "steps";
const RATE: &str = "rate";
const INITIAL: &str = "initial";

/// Discrete exponential decay, `x[n+1] = x[n] * (1 - rate)`.
///
/// Run parameters are merged in order: defaults, then parameters staged with
/// `set_run_params`, then the ones passed to `run`.
#[derive(Debug)]
pub struct DecayModel {
    name: String,
    defaults: RunParams,
    staged: RunParams,
    last_value: Option<f64>,
    has_run: Arc<AtomicBool>,
    declaration: ModelDeclaration,
    extra_checks: ExtraChecks,
}

impl DecayModel {
    pub fn new() -> Self {
        Self::named("DecayModel")
    }

    pub fn named(name: impl Into<String>) -> Self {
        let has_run = Arc::new(AtomicBool::new(false));
        let ran = Arc::clone(&has_run);

        let mut defaults = RunParams::new();
        defaults.insert(STEPS.to_string(), Value::from(10u64));
        defaults.insert(RATE.to_string(), Value::from(0.1));
        defaults.insert(INITIAL.to_string(), Value::from(1.0));

        Self {
            name: name.into(),
            defaults,
            staged: RunParams::new(),
            last_value: None,
            has_run,
            declaration: ModelDeclaration::new()
                .implements(
                    &RUNNABLE,
                    ["run", "set_run_params", "set_default_run_params"],
                )
                .implements(&PRODUCES_NUMBER, ["produce_number"]),
            // The number it produces is only meaningful once it has been run.
            extra_checks: ExtraChecks::new().with(&PRODUCES_NUMBER, move || {
                ran.load(Ordering::SeqCst)
            }),
        }
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    fn resolve(&self, params: RunParams) -> RunParams {
        let mut merged = self.defaults.clone();
        merged.extend(self.staged.clone());
        merged.extend(params);
        merged
    }
}

impl Default for DecayModel {
    fn default() -> Self {
        Self::new()
    }
}

fn float_param(params: &RunParams, name: &str) -> Result<f64> {
    params
        .get(name)
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
        .ok_or_else(|| CapcheckError::InvalidRunParameter {
            name: name.to_string(),
            reason: "expected a finite number".to_string(),
        })
}

fn steps_param(params: &RunParams) -> Result<u64> {
    params
        .get(STEPS)
        .and_then(Value::as_u64)
        .ok_or_else(|| CapcheckError::InvalidRunParameter {
            name: STEPS.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}

impl Model for DecayModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaration(&self) -> &ModelDeclaration {
        &self.declaration
    }

    fn extra_capability_checks(&self) -> Option<&ExtraChecks> {
        Some(&self.extra_checks)
    }
}

impl Runnable for DecayModel {
    fn run(&mut self, params: RunParams) -> Result<()> {
        let params = self.resolve(params);
        let steps = steps_param(&params)?;
        let rate = float_param(&params, RATE)?;
        let initial = float_param(&params, INITIAL)?;

        if !(0.0..=1.0).contains(&rate) {
            return Err(CapcheckError::InvalidRunParameter {
                name: RATE.to_string(),
                reason: format!("{} is outside [0, 1]", rate),
            });
        }

        let value = initial * (1.0 - rate).powf(steps as f64);

        tracing::debug!(model = %self.name, steps, rate, value, "decay run finished");
        self.staged.clear();
        self.last_value = Some(value);
        self.has_run.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn set_run_params(&mut self, params: RunParams) -> Result<()> {
        self.staged.extend(params);
        Ok(())
    }

    fn set_default_run_params(&mut self, params: RunParams) -> Result<()> {
        self.defaults.extend(params);
        Ok(())
    }
}

impl ProducesNumber for DecayModel {
    /// The value at the end of the last run, or the initial value before any run.
    fn produce_number(&self) -> Result<f64> {
        match self.last_value {
            Some(value) => Ok(value),
            None => float_param(&self.resolve(RunParams::new()), INITIAL),
        }
    }
}
