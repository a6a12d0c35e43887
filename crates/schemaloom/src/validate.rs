//! The rule-based model consistency checker.
//!
//! [`validate`] applies every registered rule to the model and returns the
//! complete ordered diagnostic list. Rules are independent pure functions
//! over the model; none short-circuits another, so a model with many
//! defects yields many diagnostics rather than just the first. Whether
//! export may proceed despite errors is the caller's policy, not decided
//! here.

mod rules;

use log::{debug, trace};

use schemaloom_core::ModelGraph;

use crate::diagnostic::Diagnostic;

/// A validation rule: reads the model, appends findings to the collector.
pub type Rule = fn(&ModelGraph, &mut DiagnosticCollector);

/// The registered rules, applied in this order.
///
/// Adding a rule means appending an entry here; the control loop never
/// changes. Diagnostics are deterministic because every rule iterates the
/// model in declaration order.
const RULES: &[(&str, Rule)] = &[
    ("slug-contains-no-spaces", rules::slug_contains_no_spaces),
    ("datatypes-are-defined", rules::datatypes_are_defined),
    (
        "datatype-references-match-case",
        rules::datatype_references_match_case,
    ),
    ("type-names-avoid-builtins", rules::type_names_avoid_builtins),
    ("type-names-are-pascal-case", rules::type_names_are_pascal_case),
    (
        "properties-are-unique-within-type",
        rules::properties_are_unique_within_type,
    ),
    (
        "reused-property-names-share-datatype",
        rules::reused_property_names_share_datatype,
    ),
    (
        "property-names-are-pascal-case",
        rules::property_names_are_pascal_case,
    ),
];

/// Run every registered rule against the model.
///
/// Never fails: an empty model, or one with no settings, simply yields
/// fewer findings. The returned order is the rule registration order,
/// with each rule's findings in model declaration order.
///
/// # Examples
///
/// ```
/// use schemaloom::{ItemType, ModelGraph, Property, validate};
///
/// let model = ModelGraph::new().with_item_type(
///     ItemType::new("Menu").with_property(Property::new("Name", "string")),
/// );
///
/// assert!(validate(&model).is_empty());
/// ```
pub fn validate(model: &ModelGraph) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    for &(name, rule) in RULES {
        debug!(rule = name; "Running validation rule");
        rule(model, &mut collector);
    }
    trace!(findings = collector.len(); "Validation finished");
    collector.into_diagnostics()
}

/// Returns `true` when any diagnostic in the list is an error.
///
/// Convenience for the caller-side policy of gating export on a clean run.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|diag| diag.severity().is_error())
}

/// Accumulates diagnostics during a validation run.
///
/// Rules report every finding here instead of failing on the first; the
/// collector keeps them in emission order and tracks whether any finding
/// was an error.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any emitted diagnostic was an error.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collection, handing back every diagnostic in emission order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use schemaloom_core::{ItemType, Property};

    use super::*;
    use crate::diagnostic::Severity;

    #[test]
    fn test_collector_starts_empty() {
        let collector = DiagnosticCollector::new();

        assert!(collector.is_empty());
        assert!(!collector.has_errors());
        assert!(collector.into_diagnostics().is_empty());
    }

    #[test]
    fn test_collector_tracks_errors() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("warning 1"));
        assert!(!collector.has_errors());

        collector.emit(Diagnostic::error("error 1"));
        assert!(collector.has_errors());
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_collector_keeps_emission_order() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::error("first"));
        collector.emit(Diagnostic::warning("second"));
        collector.emit(Diagnostic::error("third"));

        let messages: Vec<&str> = collector
            .diagnostics
            .iter()
            .map(|diag| diag.message())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_validate_empty_model_yields_nothing() {
        assert!(validate(&ModelGraph::new()).is_empty());
    }

    #[test]
    fn test_validate_is_deterministic() {
        let model = ModelGraph::new()
            .with_setting("Slug", "has a space")
            .with_item_type(
                ItemType::new("menu").with_property(Property::new("items", "Missing")),
            );

        let first = validate(&model);
        let second = validate(&model);
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_orders_findings_by_rule_registration() {
        // Slug rule is registered before the datatype rules, which come
        // before the naming rules.
        let model = ModelGraph::new()
            .with_setting("Slug", "has a space")
            .with_item_type(
                ItemType::new("menu").with_property(Property::new("items", "Missing")),
            );

        let diagnostics = validate(&model);
        let severities: Vec<Severity> = diagnostics.iter().map(|diag| diag.severity()).collect();

        assert_eq!(
            severities,
            vec![
                Severity::Error,   // slug contains a space
                Severity::Error,   // undefined datatype
                Severity::Warning, // type name not PascalCase
                Severity::Warning, // property name not PascalCase
            ]
        );
    }

    #[test]
    fn test_has_errors_helper() {
        assert!(!has_errors(&[]));
        assert!(!has_errors(&[Diagnostic::warning("w")]));
        assert!(has_errors(&[
            Diagnostic::warning("w"),
            Diagnostic::error("e")
        ]));
    }
}
