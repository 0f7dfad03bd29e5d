use crate::domain::model::{Implementation, ModelDeclaration};
use crate::utils::error::{CapcheckError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CapcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CapcheckError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Name is declared more than once".to_string(),
            });
        }
    }
    Ok(())
}

/// Every registered operation must be one the capability declares.
impl Validate for ModelDeclaration {
    fn validate(&self) -> Result<()> {
        for capability in self.capabilities() {
            if let Some(Implementation::Registered(operations)) = self.implementation(capability) {
                let mut names: Vec<_> = operations.iter().copied().collect();
                names.sort_unstable();
                for name in names {
                    if capability.operation(name).is_none() {
                        return Err(CapcheckError::UnknownOperation {
                            capability: capability.name.to_string(),
                            operation: name.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
