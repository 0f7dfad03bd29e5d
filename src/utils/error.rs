use crate::domain::model::{Capability, ModelRef};
use thiserror::Error;

/// Returned when a capability operation is invoked on a model that never
/// provided a real implementation of it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "{} does not implement capability {}{}",
    model_label(.model),
    capability_label(.capability),
    message_suffix(.message)
)]
pub struct CapabilityNotImplementedError {
    pub model: Option<ModelRef>,
    pub capability: Option<&'static Capability>,
    pub message: String,
}

impl CapabilityNotImplementedError {
    pub fn new(
        model: Option<ModelRef>,
        capability: Option<&'static Capability>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            model,
            capability,
            message: message.into(),
        }
    }
}

fn model_label(model: &Option<ModelRef>) -> &str {
    model.as_ref().map(|m| m.name.as_str()).unwrap_or("<no model>")
}

fn capability_label(capability: &Option<&'static Capability>) -> &'static str {
    capability.map(|c| c.name).unwrap_or("<unknown>")
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

#[derive(Error, Debug)]
pub enum CapcheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown capability: {name}")]
    UnknownCapability { name: String },

    #[error("Capability already registered: {name}")]
    DuplicateCapability { name: String },

    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Capability {capability} has no operation named {operation}")]
    UnknownOperation {
        capability: String,
        operation: String,
    },

    #[error("Invalid run parameter {name}: {reason}")]
    InvalidRunParameter { name: String, reason: String },

    #[error(transparent)]
    CapabilityNotImplemented(#[from] CapabilityNotImplementedError),
}

impl CapcheckError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CapcheckError::IoError(_) => "Check that the plan file exists and is readable",
            CapcheckError::SerializationError(_) => "Report output could not be encoded",
            CapcheckError::ConfigValidationError { .. }
            | CapcheckError::InvalidConfigValueError { .. }
            | CapcheckError::MissingConfigError { .. } => {
                "Fix the check plan and run again"
            }
            CapcheckError::UnknownCapability { .. } => {
                "Use one of the registered capabilities (ProducesNumber, Runnable)"
            }
            CapcheckError::DuplicateCapability { .. } => "Give each capability a unique name",
            CapcheckError::UnknownModel { .. } => {
                "Declare the model under [[models]] before referencing it in a check"
            }
            CapcheckError::UnknownOperation { .. } => {
                "Only register operations the capability actually declares"
            }
            CapcheckError::InvalidRunParameter { .. } => {
                "Pass run parameters with the types the model expects"
            }
            CapcheckError::CapabilityNotImplemented(_) => {
                "Override the operation in the model before calling it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CapcheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::declarations::PRODUCES_NUMBER;

    #[test]
    fn test_not_implemented_message_names_model_and_capability() {
        let err = CapabilityNotImplementedError::new(
            Some(ModelRef::named("BrokenModel")),
            Some(&PRODUCES_NUMBER),
            "",
        );
        assert_eq!(
            err.to_string(),
            "BrokenModel does not implement capability ProducesNumber"
        );
    }

    #[test]
    fn test_not_implemented_message_without_context() {
        let err = CapabilityNotImplementedError::new(None, None, "no run loop");
        assert_eq!(
            err.to_string(),
            "<no model> does not implement capability <unknown>: no run loop"
        );
    }

    #[test]
    fn test_not_implemented_converts_into_crate_error() {
        let err: CapcheckError =
            CapabilityNotImplementedError::new(None, Some(&PRODUCES_NUMBER), "").into();
        assert!(matches!(err, CapcheckError::CapabilityNotImplemented(_)));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
