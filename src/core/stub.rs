use crate::domain::model::Capability;
use crate::domain::ports::Model;
use crate::utils::error::CapabilityNotImplementedError;

/// Builds the error a never-overridden capability operation returns.
///
/// The responsible capability is the most specific one the model declares,
/// or `None` when it declares nothing.
pub fn unimplemented<M>(model: &M, message: impl Into<String>) -> CapabilityNotImplementedError
where
    M: Model + ?Sized,
{
    let capability = model.declaration().most_specific();
    report(model, capability, message.into())
}

/// Like [`unimplemented`], naming the capability that owns the stubbed operation.
pub fn stub<M>(
    model: &M,
    capability: &'static Capability,
    message: impl Into<String>,
) -> CapabilityNotImplementedError
where
    M: Model + ?Sized,
{
    report(model, Some(capability), message.into())
}

fn report<M>(
    model: &M,
    capability: Option<&'static Capability>,
    message: String,
) -> CapabilityNotImplementedError
where
    M: Model + ?Sized,
{
    tracing::debug!(
        model = model.name(),
        capability = capability.map(|c| c.name).unwrap_or("<unknown>"),
        "unimplemented capability operation invoked"
    );
    CapabilityNotImplementedError::new(Some(model.model_ref()), capability, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::declarations::{PRODUCES_NUMBER, RUNNABLE};
    use crate::domain::model::ModelDeclaration;

    struct Tagged {
        declaration: ModelDeclaration,
    }

    impl Model for Tagged {
        fn declaration(&self) -> &ModelDeclaration {
            &self.declaration
        }
    }

    #[test]
    fn test_unimplemented_picks_most_specific_capability() {
        let model = Tagged {
            declaration: ModelDeclaration::new()
                .declares(&RUNNABLE)
                .declares(&PRODUCES_NUMBER),
        };

        let err = unimplemented(&model, "not yet");
        assert_eq!(err.capability, Some(&RUNNABLE));
        assert_eq!(err.model.map(|m| m.name), Some("Tagged".to_string()));
        assert_eq!(err.message, "not yet");
    }

    #[test]
    fn test_unimplemented_without_capabilities() {
        let model = Tagged {
            declaration: ModelDeclaration::new(),
        };

        let err = unimplemented(&model, "");
        assert!(err.capability.is_none());
        assert!(err.model.is_some());
    }

    #[test]
    fn test_stub_names_owning_capability() {
        let model = Tagged {
            declaration: ModelDeclaration::new()
                .declares(&RUNNABLE)
                .declares(&PRODUCES_NUMBER),
        };

        let err = stub(&model, &PRODUCES_NUMBER, "");
        assert_eq!(err.capability, Some(&PRODUCES_NUMBER));
    }
}
