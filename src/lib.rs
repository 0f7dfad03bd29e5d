pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::diagnostics::{RecordingSink, TracingSink};
pub use crate::app::runner::{CheckReport, PlanRunner};
pub use crate::config::PlanConfig;
pub use crate::core::declarations::{ProducesNumber, Runnable, PRODUCES_NUMBER, RUNNABLE};
pub use crate::core::registry::CapabilityRegistry;
pub use crate::core::source_check::SourceConformance;
pub use crate::core::stub::{stub, unimplemented};
pub use crate::domain::model::{
    Capability, Diagnostic, DiagnosticKind, ExtraChecks, ModelDeclaration, Operation, RunParams,
    Verdict,
};
pub use crate::domain::ports::{DiagnosticSink, Model};
pub use crate::utils::error::{CapabilityNotImplementedError, CapcheckError, Result};
