// 🏺 Physical Object - an inanimate photographed thing
//
// The description is optional: "Vaso" or "Vaso - ceramica del 1800"

use super::subject::{Subject, SubjectKey, SubjectKind};
use crate::error::{require_text, Result};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct PhysicalObject {
    key: SubjectKey,
    name: String,
    /// Caller-supplied description; empty when the caller gave none
    details: String,
}

impl PhysicalObject {
    pub fn new(key: &str, name: &str, description: Option<&str>) -> Result<Self> {
        let key = SubjectKey::parse(key)?;
        let name = require_text("object name", name)?;
        let details = description.map(|d| d.trim().to_string()).unwrap_or_default();

        Ok(PhysicalObject { key, name, details })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object's own free-text description ("" when absent).
    ///
    /// Named `details` so it does not shadow `Subject::description()`,
    /// which renders the full "<name> - <details>" text.
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Subject for PhysicalObject {
    fn key(&self) -> &SubjectKey {
        &self.key
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Object
    }

    fn description(&self) -> String {
        if self.details.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.details)
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for PhysicalObject {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PhysicalObject {}

impl Hash for PhysicalObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for PhysicalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
