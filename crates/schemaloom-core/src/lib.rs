//! Core model types for the Schemaloom schema toolkit.
//!
//! This crate defines the in-memory model shared by every downstream
//! consumer: the [`model::ModelGraph`] an upstream loader constructs from a
//! schema definition, the [`cardinality::MaxCardinality`] bound variants,
//! and the builtin type name catalogs property datatypes resolve against.
//! Validation and export live in the `schemaloom` crate; nothing here
//! carries behavior beyond construction and access.

pub mod builtin_types;
pub mod cardinality;
pub mod model;

pub use cardinality::MaxCardinality;
pub use model::{ItemType, ModelGraph, Property, ReusableType, TypeDef};
