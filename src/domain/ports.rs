use crate::domain::model::{Diagnostic, ExtraChecks, ModelDeclaration, ModelRef};

/// Anything that can be checked against capabilities.
pub trait Model: Send + Sync {
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    fn declaration(&self) -> &ModelDeclaration;

    /// Instance-level checks the model registers per capability. `None` means
    /// no extra checks for any capability.
    fn extra_capability_checks(&self) -> Option<&ExtraChecks> {
        None
    }

    fn model_ref(&self) -> ModelRef {
        ModelRef::named(self.name())
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Receives the advisory diagnostics emitted while checking capabilities.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        declaration: ModelDeclaration,
    }

    struct Wrapper<M> {
        inner: M,
    }

    impl Model for Plain {
        fn declaration(&self) -> &ModelDeclaration {
            &self.declaration
        }
    }

    impl<M: Model> Model for Wrapper<M> {
        fn declaration(&self) -> &ModelDeclaration {
            self.inner.declaration()
        }
    }

    #[test]
    fn test_default_name_is_the_type_name() {
        let plain = Plain {
            declaration: ModelDeclaration::new(),
        };
        assert_eq!(plain.name(), "Plain");
        assert_eq!(plain.model_ref().name, "Plain");
    }

    #[test]
    fn test_default_name_drops_generic_arguments() {
        let wrapped = Wrapper {
            inner: Plain {
                declaration: ModelDeclaration::new(),
            },
        };
        assert_eq!(wrapped.name(), "Wrapper");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("a::b::C"), "C");
        assert_eq!(short_type_name("a::Outer<b::Inner<c::D>>"), "Outer");
        assert_eq!(short_type_name("Local"), "Local");
    }
}
