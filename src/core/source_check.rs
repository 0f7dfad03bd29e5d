use crate::adapters::diagnostics::TracingSink;
use crate::domain::model::{Capability, Diagnostic, DiagnosticKind, Implementation};
use crate::domain::ports::{DiagnosticSink, Model};

/// Detailed outcome of comparing a model's implementation table against the
/// stubbed operations of a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceConformance {
    /// Every stubbed operation is overridden, or there are none.
    Conformant,
    /// The model does not declare the capability at all.
    Undeclared,
    /// The model declares the capability but left this operation as a stub.
    Stubbed { operation: &'static str },
    /// The model publishes no implementation table for the capability.
    Indeterminate,
}

impl Capability {
    pub fn inspect_source<M>(&self, model: &M) -> SourceConformance
    where
        M: Model + ?Sized,
    {
        let mut required = self.required_operations().peekable();
        if required.peek().is_none() {
            return SourceConformance::Conformant;
        }

        let overridden = match model.declaration().implementation(self) {
            None => return SourceConformance::Undeclared,
            Some(Implementation::Unregistered) => return SourceConformance::Indeterminate,
            Some(Implementation::Registered(ops)) => ops,
        };

        for operation in required {
            if !overridden.contains(operation.name) {
                tracing::debug!(
                    capability = self.name,
                    model = model.name(),
                    operation = operation.name,
                    "operation still routes through the stub"
                );
                return SourceConformance::Stubbed {
                    operation: operation.name,
                };
            }
        }

        SourceConformance::Conformant
    }

    /// Whether `model` overrides every stubbed operation of this capability.
    ///
    /// An indeterminate result counts as conformant and emits a caveat.
    pub fn source_check<M>(&self, model: &M) -> bool
    where
        M: Model + ?Sized,
    {
        self.source_check_with(model, &TracingSink)
    }

    pub fn source_check_with<M>(&self, model: &M, sink: &dyn DiagnosticSink) -> bool
    where
        M: Model + ?Sized,
    {
        match self.inspect_source(model) {
            SourceConformance::Conformant => true,
            SourceConformance::Undeclared | SourceConformance::Stubbed { .. } => false,
            SourceConformance::Indeterminate => {
                sink.emit(Diagnostic {
                    kind: DiagnosticKind::IndeterminateSource,
                    capability: self.name,
                    model: model.name().to_string(),
                    message: format!(
                        "{} publishes no implementation table for {}; it is not guaranteed \
                         that all required operations have been implemented",
                        model.name(),
                        self.name
                    ),
                });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::diagnostics::RecordingSink;
    use crate::core::declarations::{PRODUCES_NUMBER, RUNNABLE};
    use crate::domain::model::{ModelDeclaration, Operation};

    struct Fixture {
        declaration: ModelDeclaration,
    }

    impl Model for Fixture {
        fn declaration(&self) -> &ModelDeclaration {
            &self.declaration
        }
    }

    fn fixture(declaration: ModelDeclaration) -> Fixture {
        Fixture { declaration }
    }

    const DEFAULTED_OPERATIONS: &[Operation] =
        &[Operation::provided("describe", "fn describe(&self) -> String")];

    static DEFAULTED: Capability = Capability::new("Defaulted", "", DEFAULTED_OPERATIONS);

    #[test]
    fn test_all_operations_overridden() {
        let model = fixture(ModelDeclaration::new().implements(
            &RUNNABLE,
            ["run", "set_run_params", "set_default_run_params"],
        ));
        assert_eq!(RUNNABLE.inspect_source(&model), SourceConformance::Conformant);
        assert!(RUNNABLE.source_check(&model));
    }

    #[test]
    fn test_first_missing_operation_is_reported() {
        let model = fixture(ModelDeclaration::new().implements(&RUNNABLE, ["run"]));
        assert_eq!(
            RUNNABLE.inspect_source(&model),
            SourceConformance::Stubbed {
                operation: "set_run_params"
            }
        );
        assert!(!RUNNABLE.source_check(&model));
    }

    #[test]
    fn test_provided_operations_are_always_satisfied() {
        let model = fixture(ModelDeclaration::new().implements(&DEFAULTED, []));
        assert!(DEFAULTED.source_check(&model));

        let undeclared = fixture(ModelDeclaration::new());
        assert_eq!(
            DEFAULTED.inspect_source(&undeclared),
            SourceConformance::Conformant
        );
    }

    #[test]
    fn test_undeclared_capability_is_not_conformant() {
        let model = fixture(ModelDeclaration::new().implements(&RUNNABLE, ["run"]));
        assert_eq!(
            PRODUCES_NUMBER.inspect_source(&model),
            SourceConformance::Undeclared
        );
        assert!(!PRODUCES_NUMBER.source_check(&model));
    }

    #[test]
    fn test_indeterminate_passes_with_caveat() {
        let model = fixture(ModelDeclaration::new().declares(&PRODUCES_NUMBER));
        let sink = RecordingSink::new();

        assert!(PRODUCES_NUMBER.source_check_with(&model, &sink));
        assert_eq!(sink.kinds(), vec![DiagnosticKind::IndeterminateSource]);
    }

    #[test]
    fn test_conformant_check_is_silent() {
        let declaration = ModelDeclaration::new().implements(&PRODUCES_NUMBER, ["produce_number"]);
        let model = fixture(declaration);
        let sink = RecordingSink::new();

        assert!(PRODUCES_NUMBER.source_check_with(&model, &sink));
        assert!(sink.is_empty());
    }
}
