//! The individual validation rules.
//!
//! Each rule is a pure function over the model. Iteration follows the
//! declaration order of types (item types before reusable types), then of
//! properties within a type, so the diagnostics a rule emits are
//! deterministic for a given model.

use indexmap::IndexMap;

use schemaloom_core::{ModelGraph, builtin_types};

use crate::{diagnostic::Diagnostic, validate::DiagnosticCollector};

/// Every name a property datatype may resolve against: user-defined types,
/// then the simple and builtin catalogs.
///
/// Exact and case-insensitive matching are two separate predicates so that
/// "undefined" and "miscased" stay distinct findings.
struct ResolutionCatalog<'a> {
    names: Vec<&'a str>,
}

impl<'a> ResolutionCatalog<'a> {
    fn from_model(model: &'a ModelGraph) -> Self {
        let names = model
            .user_type_names()
            .chain(builtin_types::SIMPLE_TYPE_NAMES.iter().copied())
            .chain(builtin_types::BUILTIN_TYPE_NAMES.iter().copied())
            .collect();
        Self { names }
    }

    /// Exact, case-sensitive membership.
    fn contains_exact(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| *candidate == name)
    }

    /// The first catalog entry matching `name` when ASCII case is ignored.
    fn find_case_insensitive(&self, name: &str) -> Option<&'a str> {
        self.names
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

fn starts_lowercase(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// A `Slug` setting value must not contain spaces.
pub(super) fn slug_contains_no_spaces(model: &ModelGraph, collector: &mut DiagnosticCollector) {
    // TODO: also reject characters that are invalid in URLs and generated
    // namespaces, not just spaces.
    if let Some(slug) = model.slug() {
        if slug.contains(' ') {
            collector.emit(Diagnostic::error(format!(
                "The slug '{slug}' cannot contain spaces"
            )));
        }
    }
}

/// Every property datatype must resolve, exactly or case-insensitively,
/// against the catalog. A case-insensitive-only match is not a resolution
/// failure; the casing rule reports it instead.
pub(super) fn datatypes_are_defined(model: &ModelGraph, collector: &mut DiagnosticCollector) {
    let catalog = ResolutionCatalog::from_model(model);
    for type_def in model.type_defs() {
        for property in type_def.properties {
            let datatype = property.data_type_name();
            if !catalog.contains_exact(datatype)
                && catalog.find_case_insensitive(datatype).is_none()
            {
                collector.emit(Diagnostic::error(format!(
                    "Undefined datatype: property '{}' in '{}' uses datatype '{}', which is not defined",
                    property.name(),
                    type_def.name,
                    datatype
                )));
            }
        }
    }
}

/// A property datatype that resolves only case-insensitively is a casing
/// defect; the finding names the correctly-cased type.
pub(super) fn datatype_references_match_case(
    model: &ModelGraph,
    collector: &mut DiagnosticCollector,
) {
    let catalog = ResolutionCatalog::from_model(model);
    for type_def in model.type_defs() {
        for property in type_def.properties {
            let datatype = property.data_type_name();
            if !catalog.contains_exact(datatype) {
                if let Some(correct) = catalog.find_case_insensitive(datatype) {
                    collector.emit(Diagnostic::warning(format!(
                        "Improper casing: property '{}' in '{}' uses datatype '{}', which should be '{}'",
                        property.name(),
                        type_def.name,
                        datatype,
                        correct
                    )));
                }
            }
        }
    }
}

/// User-defined type names must not shadow a simple or builtin type name,
/// even under a case change. One warning per conflicting name.
pub(super) fn type_names_avoid_builtins(model: &ModelGraph, collector: &mut DiagnosticCollector) {
    let mut reported: Vec<String> = Vec::new();
    for name in model.user_type_names() {
        if builtin_types::is_reserved_name(name) {
            let key = name.to_ascii_lowercase();
            if !reported.contains(&key) {
                reported.push(key);
                collector.emit(Diagnostic::warning(format!(
                    "Type name '{name}' conflicts with a builtin type name"
                )));
            }
        }
    }
}

/// Type names follow the PascalCase convention.
pub(super) fn type_names_are_pascal_case(model: &ModelGraph, collector: &mut DiagnosticCollector) {
    for name in model.user_type_names() {
        if starts_lowercase(name) {
            collector.emit(Diagnostic::warning(format!(
                "Type name '{name}' should be PascalCase and start with an uppercase letter"
            )));
        }
    }
}

/// Within one type, property names are unique. One error per duplicated
/// name, however many times it repeats.
pub(super) fn properties_are_unique_within_type(
    model: &ModelGraph,
    collector: &mut DiagnosticCollector,
) {
    for type_def in model.type_defs() {
        let mut occurrences: IndexMap<&str, usize> = IndexMap::new();
        for property in type_def.properties {
            *occurrences.entry(property.name()).or_default() += 1;
        }
        for (name, count) in occurrences {
            if count > 1 {
                collector.emit(Diagnostic::error(format!(
                    "Duplicate property '{}' in type '{}'",
                    name, type_def.name
                )));
            }
        }
    }
}

/// A property name reused across types must reference the same datatype,
/// case-sensitively, everywhere it appears. The finding enumerates each
/// distinct datatype with the types that used it.
pub(super) fn reused_property_names_share_datatype(
    model: &ModelGraph,
    collector: &mut DiagnosticCollector,
) {
    // property name -> datatype -> using types, all in first-seen order
    let mut uses: IndexMap<&str, IndexMap<&str, Vec<&str>>> = IndexMap::new();
    for type_def in model.type_defs() {
        for property in type_def.properties {
            uses.entry(property.name())
                .or_default()
                .entry(property.data_type_name())
                .or_default()
                .push(type_def.name);
        }
    }

    for (property_name, by_datatype) in &uses {
        if by_datatype.len() > 1 {
            let locations = by_datatype
                .iter()
                .map(|(datatype, type_names)| {
                    format!("datatype '{}' in {}", datatype, type_names.join(", "))
                })
                .collect::<Vec<_>>()
                .join("; ");
            collector.emit(Diagnostic::error(format!(
                "Property name '{property_name}' is reused with different datatypes; a property name may be reused only with one datatype: {locations}"
            )));
        }
    }
}

/// Property names follow the PascalCase convention.
pub(super) fn property_names_are_pascal_case(
    model: &ModelGraph,
    collector: &mut DiagnosticCollector,
) {
    for type_def in model.type_defs() {
        for property in type_def.properties {
            if starts_lowercase(property.name()) {
                collector.emit(Diagnostic::warning(format!(
                    "Property name '{}' in '{}' should be PascalCase and start with an uppercase letter",
                    property.name(),
                    type_def.name
                )));
            }
        }
    }
}
