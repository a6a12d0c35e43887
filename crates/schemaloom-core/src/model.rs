//! The in-memory model graph.
//!
//! [`ModelGraph`] is the immutable input shared by the validator and the
//! publishers. An upstream loader constructs it once per
//! validate-then-export cycle, preserving the declaration order of types,
//! of properties within a type, and of settings; nothing downstream
//! mutates it.
//!
//! Construction is builder-style:
//!
//! ```
//! use schemaloom_core::{ItemType, MaxCardinality, ModelGraph, Property};
//!
//! let model = ModelGraph::new()
//!     .with_setting("Title", "RestaurantMenu")
//!     .with_item_type(
//!         ItemType::new("Menu").with_property(
//!             Property::new("Items", "MenuItem")
//!                 .with_min_cardinality(0)
//!                 .with_max_cardinality(MaxCardinality::Unbounded),
//!         ),
//!     );
//!
//! assert_eq!(model.item_types().len(), 1);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cardinality::MaxCardinality;

/// Setting key whose value names the exported model.
pub const TITLE_SETTING: &str = "Title";

/// Setting key for the short, space-free identifier used to derive
/// external names such as URLs and namespaces.
pub const SLUG_SETTING: &str = "Slug";

/// A named, typed property of an item or reusable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    data_type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_cardinality: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_cardinality: Option<MaxCardinality>,
}

impl Property {
    /// Create a property with its name and datatype reference.
    ///
    /// The datatype is kept as an unresolved name; resolution against the
    /// model and the builtin catalogs is the validator's job.
    pub fn new(name: impl Into<String>, data_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type_name: data_type_name.into(),
            min_cardinality: None,
            max_cardinality: None,
        }
    }

    /// Set the minimum occurrence count.
    pub fn with_min_cardinality(mut self, min: u64) -> Self {
        self.min_cardinality = Some(min);
        self
    }

    /// Set the maximum occurrence bound.
    pub fn with_max_cardinality(mut self, max: MaxCardinality) -> Self {
        self.max_cardinality = Some(max);
        self
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The referenced datatype name, unresolved.
    pub fn data_type_name(&self) -> &str {
        &self.data_type_name
    }

    /// The minimum occurrence count, if declared.
    pub fn min_cardinality(&self) -> Option<u64> {
        self.min_cardinality
    }

    /// The maximum occurrence bound, if declared.
    pub fn max_cardinality(&self) -> Option<MaxCardinality> {
        self.max_cardinality
    }
}

/// A user-defined record-like entity with named, typed properties and an
/// optional single supertype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extends_type_name: Option<String>,
    #[serde(default)]
    properties: Vec<Property>,
}

impl ItemType {
    /// Create an item type with no properties and no supertype.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends_type_name: None,
            properties: Vec::new(),
        }
    }

    /// Declare the single supertype this item type extends.
    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.extends_type_name = Some(name.into());
        self
    }

    /// Append a property, keeping declaration order.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The supertype name, if declared.
    pub fn extends_type_name(&self) -> Option<&str> {
        self.extends_type_name.as_deref()
    }

    /// The properties in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// A user-defined type meant for reuse as a property datatype rather than
/// as a standalone modeled entity. Reusable types carry no supertype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReusableType {
    name: String,
    #[serde(default)]
    properties: Vec<Property>,
}

impl ReusableType {
    /// Create a reusable type with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property, keeping declaration order.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The properties in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// Borrowed view over one type definition, item or reusable.
///
/// The validator reasons over both kinds uniformly; this view is what
/// [`ModelGraph::type_defs`] yields for that traversal.
#[derive(Debug, Clone, Copy)]
pub struct TypeDef<'a> {
    /// The type name.
    pub name: &'a str,
    /// The properties in declaration order.
    pub properties: &'a [Property],
}

/// The model: item types, reusable types, and shared settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelGraph {
    #[serde(default)]
    item_types: Vec<ItemType>,
    #[serde(default)]
    reusable_types: Vec<ReusableType>,
    #[serde(default)]
    settings: IndexMap<String, String>,
}

impl ModelGraph {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item type, keeping declaration order.
    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_types.push(item_type);
        self
    }

    /// Append a reusable type, keeping declaration order.
    pub fn with_reusable_type(mut self, reusable_type: ReusableType) -> Self {
        self.reusable_types.push(reusable_type);
        self
    }

    /// Set a setting, keeping first-insertion order.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// The item types in declaration order.
    pub fn item_types(&self) -> &[ItemType] {
        &self.item_types
    }

    /// The reusable types in declaration order.
    pub fn reusable_types(&self) -> &[ReusableType] {
        &self.reusable_types
    }

    /// The settings mapping in declaration order.
    pub fn settings(&self) -> &IndexMap<String, String> {
        &self.settings
    }

    /// Look up one setting value.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// The `Slug` setting, if present.
    pub fn slug(&self) -> Option<&str> {
        self.setting(SLUG_SETTING)
    }

    /// The `Title` setting, if present.
    pub fn title(&self) -> Option<&str> {
        self.setting(TITLE_SETTING)
    }

    /// Every type definition: item types first, then reusable types, each
    /// in declaration order.
    pub fn type_defs(&self) -> impl Iterator<Item = TypeDef<'_>> {
        self.item_types
            .iter()
            .map(|item_type| TypeDef {
                name: &item_type.name,
                properties: &item_type.properties,
            })
            .chain(self.reusable_types.iter().map(|reusable_type| TypeDef {
                name: &reusable_type.name,
                properties: &reusable_type.properties,
            }))
    }

    /// Names of every user-defined type, in [`ModelGraph::type_defs`] order.
    pub fn user_type_names(&self) -> impl Iterator<Item = &str> {
        self.type_defs().map(|type_def| type_def.name)
    }
}
