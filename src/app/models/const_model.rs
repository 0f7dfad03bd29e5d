use crate::core::declarations::{ProducesNumber, PRODUCES_NUMBER};
use crate::domain::model::{ExtraChecks, ModelDeclaration};
use crate::domain::ports::Model;
use crate::utils::error::Result;

/// A model that always produces the same number.
#[derive(Debug, Clone)]
pub struct ConstModel {
    name: String,
    constant: f64,
    declaration: ModelDeclaration,
    extra_checks: ExtraChecks,
}

impl ConstModel {
    pub fn new(constant: f64) -> Self {
        Self::named("ConstModel", constant)
    }

    pub fn named(name: impl Into<String>, constant: f64) -> Self {
        Self {
            name: name.into(),
            constant,
            declaration: ModelDeclaration::new().implements(&PRODUCES_NUMBER, ["produce_number"]),
            // A NaN or infinite constant is not a usable prediction.
            extra_checks: ExtraChecks::new().with(&PRODUCES_NUMBER, move || constant.is_finite()),
        }
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl Model for ConstModel {
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

impl ProducesNumber for ConstModel {
    fn produce_number(&self) -> Result<f64> {
        Ok(self.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produces_its_constant() {
        let model = ConstModel::new(5.0);
        assert_eq!(model.produce_number().unwrap(), 5.0);
        assert_eq!(model.name(), "ConstModel");
    }

    #[test]
    fn test_extra_check_rejects_non_finite_constant() {
        assert!(PRODUCES_NUMBER.check(&ConstModel::new(5.0), true));
        assert!(!PRODUCES_NUMBER.check(&ConstModel::named("nan", f64::NAN), true));
    }
}
