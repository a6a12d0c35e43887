//! Model publishers.
//!
//! A publisher consumes a validated [`ModelGraph`] and emits one artifact.
//! The UML/XMI publisher in [`uml`] is the representative implementation;
//! code generators, documentation renderers, and other interchange emitters
//! plug in at the same trait.

pub mod uml;

mod registry;

pub use uml::UmlXmiPublisher;

use schemaloom_core::ModelGraph;

use crate::error::ExportError;

/// A single-artifact exporter over the validated model.
///
/// Publishers never mutate the model and hold no state across calls, so a
/// publisher may run concurrently with validation against the same model.
/// Gating export on a clean validation run is the caller's decision;
/// publishers do not consult diagnostics.
pub trait Publisher {
    /// Export the model, writing the artifact to this publisher's target.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] for configuration and invariant failures;
    /// no partial artifact is left in place.
    fn publish(&self, model: &ModelGraph) -> Result<(), ExportError>;
}
