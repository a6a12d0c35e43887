//! Schemaloom - semantic validation and deterministic export for
//! model-driven schemas.
//!
//! An upstream loader parses a schema definition into a
//! [`ModelGraph`] of item types, reusable types, and settings. Before any
//! downstream artifact is generated the model is checked by [`validate`],
//! a rule pipeline that reports every finding as a severity-tagged
//! [`Diagnostic`]; afterwards a [`publish::Publisher`] such as
//! [`publish::UmlXmiPublisher`] serializes the model into its interchange
//! form. The two consumers are independent; by convention, callers export
//! only when no error-level diagnostics exist.
//!
//! # Examples
//!
//! ```
//! use schemaloom::{ItemType, ModelGraph, Property, validate};
//!
//! let model = ModelGraph::new()
//!     .with_setting("Title", "RestaurantMenu")
//!     .with_item_type(
//!         ItemType::new("Menu").with_property(Property::new("Name", "string")),
//!     );
//!
//! let diagnostics = validate(&model);
//! assert!(diagnostics.is_empty());
//! ```

pub mod diagnostic;
pub mod publish;
pub mod validate;

mod error;

pub use schemaloom_core::{builtin_types, cardinality, model};

pub use schemaloom_core::{ItemType, MaxCardinality, ModelGraph, Property, ReusableType};

pub use diagnostic::{Diagnostic, Severity};
pub use error::ExportError;
pub use publish::{Publisher, UmlXmiPublisher};
pub use validate::validate;
