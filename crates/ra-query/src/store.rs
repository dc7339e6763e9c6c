//! Name-to-relation store for one evaluation session

use crate::error::{QueryError, QueryResult};
use ra_core::{Relation, RelationName};
use std::collections::HashMap;
use std::sync::Arc;

/// Relations visible to an evaluation, keyed by name
///
/// Starts with the source relations and only ever grows: intermediates are
/// added as they are produced and no entry is replaced.
#[derive(Debug, Default)]
pub struct RelationStore {
    relations: HashMap<RelationName, Arc<Relation>>,
}

impl RelationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given source relations
    pub fn with_sources(relations: impl IntoIterator<Item = Relation>) -> QueryResult<Self> {
        let mut store = Self::new();
        for relation in relations {
            store.add_source(relation)?;
        }
        Ok(store)
    }

    /// Add a user-supplied relation.
    ///
    /// The relation must be named, the name must not use the intermediate
    /// naming scheme, and no relation of that name may exist yet.
    pub fn add_source(&mut self, relation: Relation) -> QueryResult<()> {
        let name = relation.name().cloned().ok_or(QueryError::UnnamedRelation)?;
        if name.is_synthetic() {
            return Err(QueryError::ReservedRelationName {
                name: name.into_inner(),
            });
        }
        self.register(name, Arc::new(relation))
    }

    /// Insert a relation under `name`, refusing to overwrite
    pub(crate) fn register(&mut self, name: RelationName, relation: Arc<Relation>) -> QueryResult<()> {
        if self.relations.contains_key(&name) {
            return Err(QueryError::DuplicateRelation {
                name: name.into_inner(),
            });
        }
        log::debug!("Registered relation '{}' ({} rows)", name, relation.len());
        self.relations.insert(name, relation);
        Ok(())
    }

    /// Look up a relation by name
    pub fn get(&self, name: &str) -> QueryResult<Arc<Relation>> {
        self.relations
            .get(name)
            .cloned()
            .ok_or_else(|| QueryError::UnknownRelation {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// All names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.relations.keys().map(RelationName::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ra_core::test_utils::{int, rel};

    #[test]
    fn test_with_sources_and_lookup() {
        let store = RelationStore::with_sources(vec![
            rel("R", &["a"], vec![vec![int(1)]]),
            rel("S", &["b"], vec![]),
        ])
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.names(), vec!["R", "S"]);
        assert_eq!(store.get("R").unwrap().len(), 1);
        assert!(store.contains("S"));
    }

    #[test]
    fn test_unknown_relation() {
        let store = RelationStore::new();
        assert!(store.is_empty());
        let err = store.get("missing").unwrap_err();
        assert!(matches!(err, QueryError::UnknownRelation { name } if name == "missing"));
    }

    #[test]
    fn test_duplicate_source_rejected() {
        let err = RelationStore::with_sources(vec![
            rel("R", &["a"], vec![]),
            rel("R", &["b"], vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, QueryError::DuplicateRelation { .. }));
    }

    #[test]
    fn test_reserved_name_rejected() {
        let err = RelationStore::with_sources(vec![rel("relation1", &["a"], vec![])]).unwrap_err();
        assert!(matches!(err, QueryError::ReservedRelationName { .. }));
    }

    #[test]
    fn test_unnamed_source_rejected() {
        let relation = Relation::new(vec!["a".to_string()], vec![]).unwrap();
        let err = RelationStore::new().add_source(relation).unwrap_err();
        assert!(matches!(err, QueryError::UnnamedRelation));
    }

    #[test]
    fn test_register_never_overwrites() {
        let mut store = RelationStore::new();
        let name = RelationName::synthetic(1);
        let relation = Arc::new(rel("relation1", &["a"], vec![]));
        store.register(name.clone(), relation.clone()).unwrap();
        assert!(store.register(name, relation).is_err());
    }
}
