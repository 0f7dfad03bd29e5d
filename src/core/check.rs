use crate::adapters::diagnostics::TracingSink;
use crate::domain::model::{Capability, Diagnostic, DiagnosticKind, Verdict};
use crate::domain::ports::{DiagnosticSink, Model};

impl Capability {
    /// Checks whether `model` has this capability.
    ///
    /// The model must declare the capability, override each of its stubbed
    /// operations, and pass the extra check it registers for it. With
    /// `require_extra`, a missing extra check fails the verdict. Negative
    /// verdicts are advisory and reported through `tracing`.
    pub fn check<M>(&self, model: &M, require_extra: bool) -> bool
    where
        M: Model + ?Sized,
    {
        self.check_with(model, require_extra, &TracingSink).passed()
    }

    pub fn check_with<M>(
        &self,
        model: &M,
        require_extra: bool,
        sink: &dyn DiagnosticSink,
    ) -> Verdict
    where
        M: Model + ?Sized,
    {
        let class_conformant = model.declaration().has_capability(self);

        let source_conformant = if class_conformant {
            Some(self.source_check_with(model, sink))
        } else {
            None
        };

        let extra = model
            .extra_capability_checks()
            .and_then(|checks| checks.get(self));

        let instance_conformant = match extra {
            Some(check) => check(),
            None if require_extra => {
                tracing::debug!(
                    capability = self.name,
                    model = model.name(),
                    "extra check required but none registered"
                );
                false
            }
            None => true,
        };

        if !class_conformant {
            sink.emit(Diagnostic {
                kind: DiagnosticKind::StructuralMismatch,
                capability: self.name,
                model: model.name().to_string(),
                message: format!(
                    "{} does not declare the {} capability required by the test; \
                     the score may be unavailable",
                    model.name(),
                    self.name
                ),
            });
        } else if source_conformant == Some(false) {
            sink.emit(Diagnostic {
                kind: DiagnosticKind::BehavioralMismatch,
                capability: self.name,
                model: model.name().to_string(),
                message: format!(
                    "{} declares {} but does not implement all of its operations; \
                     the score may be unavailable",
                    model.name(),
                    self.name
                ),
            });
        }

        Verdict {
            capability: self.name,
            model: model.name().to_string(),
            class_conformant,
            source_conformant,
            instance_conformant,
        }
    }
}
