//! Integration tests for the validation pipeline.
//!
//! These verify the public API over whole models: every rule runs, nothing
//! short-circuits, and the diagnostic list is complete and ordered.

use schemaloom::validate::has_errors;
use schemaloom::{ItemType, ModelGraph, Property, ReusableType, Severity, validate};

#[test]
fn test_clean_model_yields_no_diagnostics() {
    let model = ModelGraph::new()
        .with_setting("Title", "RestaurantMenu")
        .with_setting("Slug", "restaurant-menu")
        .with_item_type(
            ItemType::new("Menu")
                .with_property(Property::new("Name", "string"))
                .with_property(Property::new("Items", "MenuItem")),
        )
        .with_item_type(
            ItemType::new("MenuItem").with_property(Property::new("Price", "decimal")),
        )
        .with_reusable_type(
            ReusableType::new("Address").with_property(Property::new("Street", "string")),
        );

    let diagnostics = validate(&model);
    assert!(diagnostics.is_empty(), "Unexpected: {diagnostics:?}");
}

#[test]
fn test_defective_model_yields_every_finding() {
    // One defect per rule; no rule may mask another.
    let model = ModelGraph::new()
        .with_setting("Slug", "restaurant menu")
        .with_item_type(
            ItemType::new("menu")
                .with_property(Property::new("Items", "Unknown"))
                .with_property(Property::new("Name", "String"))
                .with_property(Property::new("Name", "String"))
                .with_property(Property::new("price", "decimal")),
        )
        .with_item_type(ItemType::new("Int").with_property(Property::new("price", "double")));

    let diagnostics = validate(&model);
    let messages: Vec<&str> = diagnostics.iter().map(|diag| diag.message()).collect();

    assert_eq!(
        messages,
        vec![
            "The slug 'restaurant menu' cannot contain spaces",
            "Undefined datatype: property 'Items' in 'menu' uses datatype 'Unknown', which is not defined",
            "Improper casing: property 'Name' in 'menu' uses datatype 'String', which should be 'string'",
            "Improper casing: property 'Name' in 'menu' uses datatype 'String', which should be 'string'",
            "Type name 'Int' conflicts with a builtin type name",
            "Type name 'menu' should be PascalCase and start with an uppercase letter",
            "Duplicate property 'Name' in type 'menu'",
            "Property name 'price' is reused with different datatypes; a property name may be reused only with one datatype: datatype 'decimal' in menu; datatype 'double' in Int",
            "Property name 'price' in 'menu' should be PascalCase and start with an uppercase letter",
            "Property name 'price' in 'Int' should be PascalCase and start with an uppercase letter",
        ]
    );
    assert!(has_errors(&diagnostics));
}

#[test]
fn test_severity_split_supports_caller_gating() {
    let warnings_only = ModelGraph::new().with_item_type(ItemType::new("menu"));

    let diagnostics = validate(&warnings_only);
    assert!(!diagnostics.is_empty());
    assert!(!has_errors(&diagnostics));
    assert!(
        diagnostics
            .iter()
            .all(|diag| diag.severity() == Severity::Warning)
    );
}
