use crate::core::declarations::{ProducesNumber, PRODUCES_NUMBER};
use crate::domain::model::ModelDeclaration;
use crate::domain::ports::Model;

/// Declares [`ProducesNumber`] but never overrides `produce_number`.
#[derive(Debug, Clone)]
pub struct BrokenModel {
    name: String,
    declaration: ModelDeclaration,
}

impl BrokenModel {
    pub fn new() -> Self {
        Self::named("BrokenModel")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaration: ModelDeclaration::new().implements(&PRODUCES_NUMBER, []),
        }
    }
}

impl Default for BrokenModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for BrokenModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaration(&self) -> &ModelDeclaration {
        &self.declaration
    }
}

impl ProducesNumber for BrokenModel {}

/// Declares a capability without publishing which operations it overrides.
#[derive(Debug, Clone)]
pub struct DeclaredOnlyModel {
    name: String,
    declaration: ModelDeclaration,
}

impl DeclaredOnlyModel {
    pub fn new(name: impl Into<String>, declaration: ModelDeclaration) -> Self {
        Self {
            name: name.into(),
            declaration,
        }
    }
}

impl Model for DeclaredOnlyModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaration(&self) -> &ModelDeclaration {
        &self.declaration
    }
}
