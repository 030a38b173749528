//! Two-phase decoration.
//!
//! The compute phase ([`Decorator::compute`]) resolves selectors, samples
//! styles and rasterizes every frame without touching the host. It returns an
//! ordered [`MutationList`] that the commit phase ([`MutationList::commit`])
//! applies in one pass. A pass always runs to completion.

mod cmd;
mod decorator;
mod host;
mod list;

pub use cmd::Mutation;
pub use decorator::{Decorator, Rule};
pub use host::{ElementId, Host};
pub use list::MutationList;
