// 🌱 Seed Files - raw subject records supplied by the caller as JSON
//
// {
//   "subjects": [
//     { "kind": "person",  "key": "P1", "name": "Mario Rossi", "gender": "M", "birth_year": 1990 },
//     { "kind": "artwork", "key": "A1", "title": "Guernica", "artist": "Picasso", "location": "Madrid", "year": 1937 },
//     { "kind": "object",  "key": "O1", "name": "Vaso", "description": "ceramica" }
//   ]
// }
//
// Records carry RAW values: every field is validated by the subject
// constructors when the file is registered, not when it is parsed.

use crate::catalog::Catalog;
use crate::entities::{Artwork, PhysicalObject, Person, Subject};
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SubjectRecord {
    Person {
        key: String,
        name: String,
        /// One-letter code: 'M', 'F' or 'A'
        gender: char,
        #[serde(default)]
        deceased: bool,
        birth_year: i32,
    },
    Artwork {
        key: String,
        title: String,
        artist: String,
        location: String,
        year: i32,
    },
    Object {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl SubjectRecord {
    /// Validate the raw values and build the subject
    pub fn build(&self) -> crate::Result<Arc<dyn Subject>> {
        let subject: Arc<dyn Subject> = match self {
            SubjectRecord::Person {
                key,
                name,
                gender,
                deceased,
                birth_year,
            } => Arc::new(Person::new(key, name, *gender, *deceased, *birth_year)?),
            SubjectRecord::Artwork {
                key,
                title,
                artist,
                location,
                year,
            } => Arc::new(Artwork::new(key, title, artist, location, *year)?),
            SubjectRecord::Object {
                key,
                name,
                description,
            } => Arc::new(PhysicalObject::new(key, name, description.as_deref())?),
        };
        Ok(subject)
    }
}

// ============================================================================
// SEED FILE
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
}

impl SeedFile {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse seed JSON")
    }

    /// Build and register every record in order.
    ///
    /// Stops at the first invalid or duplicate record; records before it
    /// remain registered. Returns how many subjects were added.
    pub fn register_into(&self, catalog: &Catalog) -> Result<usize> {
        for (index, record) in self.subjects.iter().enumerate() {
            let subject = record
                .build()
                .with_context(|| format!("Invalid subject record #{}", index))?;
            catalog
                .add_shared(subject)
                .with_context(|| format!("Could not register subject record #{}", index))?;
        }

        info!(
            "Registered {} subjects (catalog now holds {})",
            self.subjects.len(),
            catalog.size()
        );
        Ok(self.subjects.len())
    }
}

/// Read and parse a seed file from disk
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SeedFile> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read seed file: {:?}", path.as_ref()))?;

    SeedFile::from_json(&content)
}

// ============================================================================
// TESTS
// ============================================================================
