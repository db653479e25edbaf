// 📷 Subject - anything that was photographed and catalogued
//
// Every subject has:
// - A normalized key (trimmed, uppercase, letters and digits only)
// - A kind (Person, Artwork, Object)
// - A human-readable description rendered by the concrete variant
//
// Two subjects are "the same subject" when kind and key match, unless the
// variant compares more strictly (Person compares every field).

use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

// ============================================================================
// SUBJECT KEY
// ============================================================================

/// Catalog identity: trimmed, uppercased, `[A-Z0-9]+`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectKey(String);

impl SubjectKey {
    /// Validate and normalize a raw key
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize(raw)
            .ok_or_else(|| ArchiveError::invalid("key cannot be null or blank"))?;

        if !normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ArchiveError::invalid(format!(
                "key '{}' may only contain letters and digits ([A-Z0-9]+)",
                normalized
            )));
        }

        Ok(SubjectKey(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against a trimmed, uppercased query.
    /// An absent query never matches.
    pub fn matches(&self, query: Option<&str>) -> bool {
        match query {
            Some(q) => self.0.contains(&q.trim().to_uppercase()),
            None => false,
        }
    }
}

/// Trim + uppercase; `None` when nothing is left
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SubjectKey {
    type Error = ArchiveError;

    fn try_from(raw: String) -> Result<Self> {
        SubjectKey::parse(&raw)
    }
}

impl From<SubjectKey> for String {
    fn from(key: SubjectKey) -> Self {
        key.0
    }
}

// ============================================================================
// SUBJECT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    Person,
    Artwork,
    Object,
}

impl SubjectKind {
    /// Variant name used when rendering a subject
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Person => "Person",
            SubjectKind::Artwork => "Artwork",
            SubjectKind::Object => "Object",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SUBJECT CONTRACT
// ============================================================================

/// Polymorphic contract shared by every catalogued subject.
///
/// The catalog only relies on `key()` for uniqueness; everything else is
/// rendered through `description()`.
pub trait Subject: fmt::Debug + Send + Sync {
    fn key(&self) -> &SubjectKey;

    fn kind(&self) -> SubjectKind;

    /// Variant-specific, human-readable description
    fn description(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    /// True iff the key contains the normalized query
    fn matches_key(&self, query: Option<&str>) -> bool {
        self.key().matches(query)
    }

    /// Equality as seen through `dyn Subject`: kind and key by default.
    /// Variants with richer equality override this.
    fn same_as(&self, other: &dyn Subject) -> bool {
        same_subject_key(self.kind(), self.key(), other)
    }

    /// `"<Variant>[key=<KEY>]"`
    fn label(&self) -> String {
        format!("{}[key={}]", self.kind(), self.key())
    }

    /// `"<Variant>[key=<KEY>] - <description>"`
    fn summary(&self) -> String {
        format!("{} - {}", self.label(), self.description())
    }
}

/// Catalog identity: same kind and same key, whatever the other fields
pub fn same_subject(a: &dyn Subject, b: &dyn Subject) -> bool {
    same_subject_key(a.kind(), a.key(), b)
}

fn same_subject_key(kind: SubjectKind, key: &SubjectKey, other: &dyn Subject) -> bool {
    kind == other.kind() && key == other.key()
}

impl<'a> PartialEq for dyn Subject + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<'a> Eq for dyn Subject + 'a {}

impl<'a> std::hash::Hash for dyn Subject + 'a {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalization() {
        let variants = ["k1", "K1", "  k1  ", "\tK1\n"];
        for raw in variants {
            assert_eq!(SubjectKey::parse(raw).unwrap().as_str(), "K1");
        }
    }

    #[test]
    fn test_key_rejects_blank() {
        assert!(SubjectKey::parse("").unwrap_err().is_invalid_argument());
        assert!(SubjectKey::parse("   ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_key_rejects_non_alphanumeric() {
        for raw in ["K-1", "K 1", "K_1", "chiave!", "città", "K.1"] {
            let err = SubjectKey::parse(raw).unwrap_err();
            assert!(err.is_invalid_argument(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_key_matches_substring() {
        let key = SubjectKey::parse("MONA2024").unwrap();
        assert!(key.matches(Some("mona")));
        assert!(key.matches(Some(" 2024 ")));
        assert!(key.matches(Some("MONA2024")));
        assert!(!key.matches(Some("LISA")));
        assert!(!key.matches(None));
    }

    #[test]
    fn test_key_serde_validates() {
        let key: SubjectKey = serde_json::from_str("\" abc1 \"").unwrap();
        assert_eq!(key.as_str(), "ABC1");
        assert!(serde_json::from_str::<SubjectKey>("\"a-b\"").is_err());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SubjectKind::Person.to_string(), "Person");
        assert_eq!(SubjectKind::Artwork.as_str(), "Artwork");
        assert_eq!(SubjectKind::Object.as_str(), "Object");
    }
}
