use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// How a capability declares the body of one of its operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationBody {
    /// The body only signals "not implemented"; a model must override it.
    Stub,
    /// The capability ships real default behavior for this operation.
    Provided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub name: &'static str,
    pub signature: &'static str,
    pub body: OperationBody,
}

impl Operation {
    pub const fn stub(name: &'static str, signature: &'static str) -> Self {
        Self {
            name,
            signature,
            body: OperationBody::Stub,
        }
    }

    pub const fn provided(name: &'static str, signature: &'static str) -> Self {
        Self {
            name,
            signature,
            body: OperationBody::Provided,
        }
    }

    pub fn is_stub(&self) -> bool {
        self.body == OperationBody::Stub
    }
}

/// An abstract, checkable contract describing one behavior a model may
/// support. Capabilities are declared as `static` items and compared by name.
#[derive(Debug)]
pub struct Capability {
    pub name: &'static str,
    pub description: &'static str,
    pub operations: &'static [Operation],
}

impl Capability {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        operations: &'static [Operation],
    ) -> Self {
        Self {
            name,
            description,
            operations,
        }
    }

    /// Operations whose bodies are stubs, in declaration order.
    pub fn required_operations(&self) -> impl Iterator<Item = &'static Operation> {
        let operations: &'static [Operation] = self.operations;
        operations.iter().filter(|op| op.is_stub())
    }

    pub fn operation(&self, name: &str) -> Option<&'static Operation> {
        self.operations.iter().find(|op| op.name == name)
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Capability {}

impl Hash for Capability {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Name snapshot of a model, carried by errors and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRef {
    pub name: String,
}

impl ModelRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What a model publishes about its implementation of one capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Implementation {
    /// Operations the model overrides with real behavior.
    Registered(HashSet<&'static str>),
    /// Declared without an implementation table.
    Unregistered,
}

/// The capability tags a model declares, most specific first, together with
/// the operations it overrides for each of them.
#[derive(Debug, Clone, Default)]
pub struct ModelDeclaration {
    capabilities: Vec<&'static Capability>,
    implementations: HashMap<&'static str, Implementation>,
}

impl ModelDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `capability` and registers the operations overridden for it.
    pub fn implements<I>(mut self, capability: &'static Capability, operations: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.push_tag(capability);
        self.implementations.insert(
            capability.name,
            Implementation::Registered(operations.into_iter().collect()),
        );
        self
    }

    /// Declares `capability` without publishing which operations are overridden.
    pub fn declares(mut self, capability: &'static Capability) -> Self {
        self.push_tag(capability);
        self.implementations
            .entry(capability.name)
            .or_insert(Implementation::Unregistered);
        self
    }

    fn push_tag(&mut self, capability: &'static Capability) {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
    }

    pub fn capabilities(&self) -> &[&'static Capability] {
        &self.capabilities
    }

    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities.iter().any(|c| *c == capability)
    }

    pub fn most_specific(&self) -> Option<&'static Capability> {
        self.capabilities.first().copied()
    }

    pub fn implementation(&self, capability: &Capability) -> Option<&Implementation> {
        self.implementations.get(capability.name)
    }
}

/// A zero-argument instance-level verification supplied by a model author.
pub type ExtraCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// Typed mapping from capability to the extra check a model registers for it.
#[derive(Clone, Default)]
pub struct ExtraChecks {
    checks: HashMap<&'static str, ExtraCheck>,
}

impl ExtraChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, capability: &'static Capability, check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.insert(capability, check);
        self
    }

    pub fn insert<F>(&mut self, capability: &'static Capability, check: F)
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.checks.insert(capability.name, Arc::new(check));
    }

    pub fn get(&self, capability: &Capability) -> Option<&ExtraCheck> {
        self.checks.get(capability.name)
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for ExtraChecks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.checks.keys().collect();
        names.sort();
        f.debug_struct("ExtraChecks").field("capabilities", &names).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The model does not declare the capability.
    StructuralMismatch,
    /// The model declares the capability but leaves a stub in place.
    BehavioralMismatch,
    /// Conformance could not be decided; the check passed with a caveat.
    IndeterminateSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub capability: &'static str,
    pub model: String,
    pub message: String,
}

/// Result of one capability check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub capability: &'static str,
    pub model: String,
    pub class_conformant: bool,
    pub source_conformant: Option<bool>,
    pub instance_conformant: bool,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.class_conformant && self.source_conformant == Some(true) && self.instance_conformant
    }
}

/// Keyword-style parameters for running a simulation.
pub type RunParams = BTreeMap<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_OPERATIONS: &[Operation] = &[
        Operation::stub("measure", "fn measure(&self) -> f64"),
        Operation::provided("describe", "fn describe(&self) -> String"),
    ];

    static SAMPLE: Capability = Capability::new("Sample", "test capability", SAMPLE_OPERATIONS);

    static OTHER: Capability = Capability::new("Other", "", &[]);

    #[test]
    fn test_required_operations_skip_provided_bodies() {
        let names: Vec<_> = SAMPLE.required_operations().map(|op| op.name).collect();
        assert_eq!(names, vec!["measure"]);
        assert!(SAMPLE.operation("describe").is_some());
        assert!(SAMPLE.operation("missing").is_none());
    }

    #[test]
    fn test_declaration_keeps_declared_order() {
        let declaration = ModelDeclaration::new()
            .declares(&OTHER)
            .implements(&SAMPLE, ["measure"])
            .declares(&OTHER);

        assert_eq!(declaration.capabilities().len(), 2);
        assert_eq!(declaration.most_specific(), Some(&OTHER));
        assert!(declaration.has_capability(&SAMPLE));
        assert_eq!(
            declaration.implementation(&OTHER),
            Some(&Implementation::Unregistered)
        );
    }

    #[test]
    fn test_declares_does_not_drop_registered_operations() {
        let declaration = ModelDeclaration::new()
            .implements(&SAMPLE, ["measure"])
            .declares(&SAMPLE);

        match declaration.implementation(&SAMPLE) {
            Some(Implementation::Registered(ops)) => assert!(ops.contains("measure")),
            other => panic!("unexpected implementation record: {:?}", other),
        }
    }

    #[test]
    fn test_verdict_requires_source_conformance() {
        let verdict = Verdict {
            capability: "Sample",
            model: "m".to_string(),
            class_conformant: false,
            source_conformant: None,
            instance_conformant: true,
        };
        assert!(!verdict.passed());

        let verdict = Verdict {
            class_conformant: true,
            source_conformant: Some(true),
            ..verdict
        };
        assert!(verdict.passed());
    }

    #[test]
    fn test_extra_checks_lookup_by_capability() {
        let checks = ExtraChecks::new().with(&SAMPLE, || false);
        assert!(checks.get(&SAMPLE).map(|f| f()) == Some(false));
        assert!(checks.get(&OTHER).is_none());
    }
}
