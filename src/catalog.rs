// 🗂️ Subject Catalog - the registry of everything photographed
//
// Keys are unique across the WHOLE catalog, whatever the subject kind:
// a Person "K1" and an Artwork "K1" cannot coexist.
//
// `catalog()` is the process-wide instance (created on first access, never
// torn down). `Catalog::new()` builds an independent one for callers that
// prefer to pass the store around explicitly.

use crate::entities::subject::normalize;
use crate::entities::Subject;
use crate::error::{ArchiveError, Result};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

pub struct Catalog {
    /// normalized key → subject
    subjects: RwLock<HashMap<String, Arc<dyn Subject>>>,
}

static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The single process-wide catalog
pub fn catalog() -> &'static Catalog {
    GLOBAL_CATALOG.get_or_init(|| {
        debug!("Creating global subject catalog");
        Catalog::new()
    })
}

impl Catalog {
    /// Create an empty, independent catalog
    pub fn new() -> Self {
        Catalog {
            subjects: RwLock::new(HashMap::new()),
        }
    }

    // A panic while holding the lock cannot leave the map half-updated
    // (every mutation is a single insert/remove), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn Subject>>> {
        self.subjects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn Subject>>> {
        self.subjects.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a freshly built subject, returning the shared handle
    pub fn add<S: Subject + 'static>(&self, subject: S) -> Result<Arc<dyn Subject>> {
        let shared: Arc<dyn Subject> = Arc::new(subject);
        self.add_shared(Arc::clone(&shared))?;
        Ok(shared)
    }

    /// Register an already shared subject.
    ///
    /// Fails with InvalidArgument if another subject (of any kind) already
    /// uses the same key.
    pub fn add_shared(&self, subject: Arc<dyn Subject>) -> Result<()> {
        let key = subject.key().as_str().to_string();

        // Check and insert under the same write lock
        let mut subjects = self.write();
        if let Some(existing) = subjects.get(&key) {
            warn!(key = %key, existing = %existing.label(), "Rejected duplicate catalog key");
            return Err(ArchiveError::invalid(format!("key already exists: '{}'", key)));
        }

        debug!(key = %key, kind = %subject.kind(), "Added subject to catalog");
        subjects.insert(key, subject);
        Ok(())
    }

    /// Look a subject up by key (trimmed, case-insensitive)
    pub fn find_by_key(&self, key: &str) -> Result<Arc<dyn Subject>> {
        let normalized = normalize(key)
            .ok_or_else(|| ArchiveError::invalid("key cannot be null or blank"))?;

        self.read()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| ArchiveError::not_found(format!("no subject with key '{}'", normalized)))
    }

    /// Remove a subject by key. Blank keys and unknown keys return false.
    pub fn remove(&self, key: &str) -> bool {
        let Some(normalized) = normalize(key) else {
            return false;
        };

        let removed = self.write().remove(&normalized).is_some();
        if removed {
            debug!(key = %normalized, "Removed subject from catalog");
        }
        removed
    }

    pub fn contains(&self, key: &str) -> bool {
        normalize(key)
            .map(|k| self.read().contains_key(&k))
            .unwrap_or(false)
    }

    /// Snapshot of every subject, sorted by key.
    ///
    /// The returned Vec is detached from the store: changing it never
    /// touches the catalog.
    pub fn all(&self) -> Vec<Arc<dyn Subject>> {
        let mut all: Vec<Arc<dyn Subject>> = self.read().values().cloned().collect();
        all.sort_by(|a, b| a.key().cmp(b.key()));
        all
    }

    /// Subjects whose key contains `query` (see `Subject::matches_key`), sorted by key
    pub fn search(&self, query: Option<&str>) -> Vec<Arc<dyn Subject>> {
        let mut found: Vec<Arc<dyn Subject>> = self
            .read()
            .values()
            .filter(|s| s.matches_key(query))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.key().cmp(b.key()));
        found
    }

    pub fn size(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").field("size", &self.size()).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Artwork, PhysicalObject, Person};

    fn sample_catalog() -> Catalog {
        let catalog = Catalog::new();
        catalog
            .add(Person::new("P1", "Mario Rossi", 'M', false, 1990).unwrap())
            .unwrap();
        catalog
            .add(Artwork::new("ART1", "Guernica", "Picasso", "Madrid", 1937).unwrap())
            .unwrap();
        catalog
            .add(PhysicalObject::new("OBJ1", "Vaso", Some("ceramica")).unwrap())
            .unwrap();
        catalog
    }

    #[test]
    fn test_catalog_add_and_size() {
        let catalog = sample_catalog();
        assert_eq!(catalog.size(), 3);
        assert!(!catalog.is_empty());
        assert!(Catalog::new().is_empty());
    }

    #[test]
    fn test_find_by_key_returns_same_subject() {
        let catalog = Catalog::new();
        let added = catalog
            .add(Artwork::new("K2", "Guernica", "Picasso", "Madrid", 1937).unwrap())
            .unwrap();

        for query in ["K2", "k2", "  k2 ", "\tK2"] {
            let found = catalog.find_by_key(query).unwrap();
            assert!(Arc::ptr_eq(&added, &found));
        }
    }

    #[test]
    fn test_find_by_key_errors() {
        let catalog = sample_catalog();

        assert!(catalog.find_by_key("").unwrap_err().is_invalid_argument());
        assert!(catalog.find_by_key("   ").unwrap_err().is_invalid_argument());

        let err = catalog.find_by_key("missing").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_duplicate_key_rejected_across_kinds() {
        let catalog = sample_catalog();

        // Same key as the person, different kind
        let result = catalog.add(PhysicalObject::new(" p1 ", "Sedia", None).unwrap());
        let err = result.unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("P1"));

        // Original entry untouched
        assert_eq!(catalog.size(), 3);
        assert_eq!(catalog.find_by_key("p1").unwrap().kind(), crate::entities::SubjectKind::Person);
    }

    #[test]
    fn test_remove() {
        let catalog = sample_catalog();

        assert!(!catalog.remove("never-added"));
        assert!(!catalog.remove(""));
        assert!(!catalog.remove("   "));

        assert!(catalog.remove(" art1 "));
        assert_eq!(catalog.size(), 2);
        assert!(catalog.find_by_key("ART1").unwrap_err().is_not_found());

        // Second removal finds nothing
        assert!(!catalog.remove("ART1"));
    }

    #[test]
    fn test_key_reusable_after_remove() {
        let catalog = sample_catalog();
        assert!(catalog.remove("OBJ1"));
        assert!(catalog
            .add(Artwork::new("OBJ1", "David", "Michelangelo", "Firenze", 1504).unwrap())
            .is_ok());
    }

    #[test]
    fn test_all_is_detached_snapshot() {
        let catalog = sample_catalog();

        let mut snapshot = catalog.all();
        let keys: Vec<&str> = snapshot.iter().map(|s| s.key().as_str()).collect();
        assert_eq!(keys, vec!["ART1", "OBJ1", "P1"]);

        snapshot.clear();
        assert_eq!(catalog.size(), 3);
    }

    #[test]
    fn test_search_by_substring() {
        let catalog = sample_catalog();

        let found = catalog.search(Some("1"));
        assert_eq!(found.len(), 3);

        let found = catalog.search(Some(" obj "));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description(), "Vaso - ceramica");

        assert!(catalog.search(Some("zzz")).is_empty());
        assert!(catalog.search(None).is_empty());
    }

    #[test]
    fn test_contains() {
        let catalog = sample_catalog();
        assert!(catalog.contains("p1"));
        assert!(!catalog.contains("P2"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_downcast_stored_subject() {
        let catalog = sample_catalog();
        let found = catalog.find_by_key("P1").unwrap();
        let person = found.as_any().downcast_ref::<Person>().unwrap();
        assert_eq!(person.birth_year(), 1990);
    }

    #[test]
    fn test_concurrent_adds_same_key_admit_one() {
        let catalog = Arc::new(Catalog::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    catalog
                        .add(PhysicalObject::new("RACE", &format!("Oggetto {}", i), None).unwrap())
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(catalog.size(), 1);
    }

    #[test]
    fn test_global_catalog_is_singleton() {
        let first = catalog() as *const Catalog;
        let second = catalog() as *const Catalog;
        assert_eq!(first, second);

        catalog()
            .add(PhysicalObject::new("UNITGLOBAL1", "Lampada", None).unwrap())
            .unwrap();
        assert!(catalog().contains("unitglobal1"));
        assert!(catalog().remove("UNITGLOBAL1"));
    }
}
