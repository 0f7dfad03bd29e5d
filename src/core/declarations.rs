//! Capabilities shipped with the crate.
//!
//! Each capability is a `static` descriptor plus a trait whose default method
//! bodies are stubs. A model implements the trait, overrides the operations it
//! supports, and registers them in its [`ModelDeclaration`].
//!
//! [`ModelDeclaration`]: crate::domain::model::ModelDeclaration

use crate::core::stub::stub;
use crate::domain::model::{Capability, Operation, RunParams};
use crate::domain::ports::Model;
use crate::utils::error::Result;

const PRODUCES_NUMBER_OPERATIONS: &[Operation] = &[Operation::stub(
    "produce_number",
    "fn produce_number(&self) -> f64",
)];

pub static PRODUCES_NUMBER: Capability = Capability::new(
    "ProducesNumber",
    "An example capability for producing some generic number.",
    PRODUCES_NUMBER_OPERATIONS,
);

const RUNNABLE_OPERATIONS: &[Operation] = &[
    Operation::stub("run", "fn run(&mut self, params: RunParams)"),
    Operation::stub("set_run_params", "fn set_run_params(&mut self, params: RunParams)"),
    Operation::stub(
        "set_default_run_params",
        "fn set_default_run_params(&mut self, params: RunParams)",
    ),
];

pub static RUNNABLE: Capability = Capability::new(
    "Runnable",
    "Capability for models that can be run, i.e. simulated.",
    RUNNABLE_OPERATIONS,
);

pub trait ProducesNumber: Model {
    fn produce_number(&self) -> Result<f64> {
        Err(stub(self, &PRODUCES_NUMBER, "").into())
    }
}

pub trait Runnable: Model {
    /// Run, i.e. simulate the model.
    fn run(&mut self, _params: RunParams) -> Result<()> {
        Err(stub(self, &RUNNABLE, "").into())
    }

    /// Set parameters for the next run. These belong to the simulation, not
    /// the model.
    fn set_run_params(&mut self, _params: RunParams) -> Result<()> {
        Err(stub(self, &RUNNABLE, "").into())
    }

    /// Set default parameters for all runs.
    fn set_default_run_params(&mut self, _params: RunParams) -> Result<()> {
        Err(stub(self, &RUNNABLE, "").into())
    }
}
