//! Export-scoped identifier registry.

use indexmap::IndexSet;

use crate::error::ExportError;

/// Tracks every identifier assigned during one export.
///
/// A registry lives for exactly one publish call and is discarded with it;
/// repeated or concurrent exports must never see identifiers from another
/// run.
#[derive(Debug, Default)]
pub(crate) struct IdRegistry {
    assigned: IndexSet<String>,
}

impl IdRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `id` and hand it back for use as an attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::DuplicateId`] when `id` was already assigned
    /// in this export.
    pub(crate) fn assign(&mut self, id: String) -> Result<String, ExportError> {
        if !self.assigned.insert(id.clone()) {
            return Err(ExportError::DuplicateId(id));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_returns_the_id() {
        let mut registry = IdRegistry::new();

        let id = registry.assign("Menu".to_string()).unwrap();
        assert_eq!(id, "Menu");
    }

    #[test]
    fn test_distinct_ids_are_accepted() {
        let mut registry = IdRegistry::new();

        registry.assign("Menu".to_string()).unwrap();
        registry.assign("Menu.Items".to_string()).unwrap();
        registry.assign("Menu.Items.MinCardinality".to_string()).unwrap();
    }

    #[test]
    fn test_repeated_id_is_rejected() {
        let mut registry = IdRegistry::new();

        registry.assign("Menu".to_string()).unwrap();
        let err = registry.assign("Menu".to_string()).unwrap_err();

        assert!(matches!(err, ExportError::DuplicateId(id) if id == "Menu"));
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let mut registry = IdRegistry::new();

        registry.assign("Menu".to_string()).unwrap();
        registry.assign("menu".to_string()).unwrap();
    }

    #[test]
    fn test_fresh_registry_forgets_previous_run() {
        let mut first = IdRegistry::new();
        first.assign("Menu".to_string()).unwrap();

        let mut second = IdRegistry::new();
        second.assign("Menu".to_string()).unwrap();
    }
}
