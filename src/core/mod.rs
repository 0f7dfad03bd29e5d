pub mod check;
pub mod declarations;
pub mod registry;
pub mod source_check;
pub mod stub;

pub use crate::domain::model::{Capability, ModelDeclaration, Verdict};
pub use crate::domain::ports::{DiagnosticSink, Model};
pub use crate::utils::error::{CapabilityNotImplementedError, Result};
