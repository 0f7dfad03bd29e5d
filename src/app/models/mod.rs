pub mod broken_model;
pub mod const_model;
pub mod decay_model;

pub use broken_model::{BrokenModel, DeclaredOnlyModel};
pub use const_model::ConstModel;
pub use decay_model::DecayModel;
