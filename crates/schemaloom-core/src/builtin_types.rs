//! Builtin type name catalogs.
//!
//! A property datatype resolves against the user-defined type names plus
//! these two catalogs: [`SIMPLE_TYPE_NAMES`] covers the primitive value
//! space, [`BUILTIN_TYPE_NAMES`] the integer family. Resolution itself is
//! the validator's job; this module only names what is always available.

/// Primitive value types available to every model.
pub const SIMPLE_TYPE_NAMES: &[&str] = &[
    "anyURI",
    "boolean",
    "date",
    "dateTime",
    "decimal",
    "double",
    "duration",
    "float",
    "gDay",
    "gMonth",
    "gMonthDay",
    "gYear",
    "gYearMonth",
    "language",
    "string",
    "time",
];

/// Builtin integer types available to every model.
pub const BUILTIN_TYPE_NAMES: &[&str] = &[
    "byte",
    "int",
    "integer",
    "long",
    "negativeInteger",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "positiveInteger",
    "short",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
];

/// Returns `true` when `name` matches a simple or builtin type name,
/// ignoring ASCII case.
///
/// User-defined type names that collide with a catalog entry shadow it for
/// readers, so the validator warns on any case-insensitive match.
pub fn is_reserved_name(name: &str) -> bool {
    SIMPLE_TYPE_NAMES
        .iter()
        .chain(BUILTIN_TYPE_NAMES.iter())
        .any(|catalog_name| catalog_name.eq_ignore_ascii_case(name))
}
