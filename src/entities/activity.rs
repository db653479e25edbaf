// 🎨 Predominant Activity - an artist's main field, with alias lookup
//
// "pittore", "PITTURA", "Painter" → Painting
// Anything present but unrecognised → Other (never an error)
// Blank input → InvalidArgument (missing is not the same as unknown)

use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredominantActivity {
    Painting,
    Sculpture,
    Photography,
    Architecture,
    Graphics,
    Design,
    Other,
}

/// Canonical code, display label and lowercase aliases for each activity
static ACTIVITY_TABLE: &[(PredominantActivity, &str, &str, &[&str])] = &[
    (
        PredominantActivity::Painting,
        "PITTURA",
        "Pittura",
        &["pittura", "pittore", "pittrice", "painting", "painter"],
    ),
    (
        PredominantActivity::Sculpture,
        "SCULTURA",
        "Scultura",
        &["scultura", "scultore", "scultrice", "sculpture", "sculptor"],
    ),
    (
        PredominantActivity::Photography,
        "FOTOGRAFIA",
        "Fotografia",
        &["fotografia", "fotografo", "fotografa", "photography", "photographer"],
    ),
    (
        PredominantActivity::Architecture,
        "ARCHITETTURA",
        "Architettura",
        &["architettura", "architetto", "architetta", "architecture", "architect"],
    ),
    (
        PredominantActivity::Graphics,
        "GRAFICA",
        "Grafica",
        &["grafica", "grafico", "graphics"],
    ),
    (
        PredominantActivity::Design,
        "DESIGN",
        "Design",
        &["design", "designer"],
    ),
    (
        PredominantActivity::Other,
        "ALTRO",
        "Attività personalizzata",
        &[],
    ),
];

static LOOKUP: OnceLock<HashMap<String, PredominantActivity>> = OnceLock::new();

/// Uppercased code and alias → activity, built once on first use
fn lookup_table() -> &'static HashMap<String, PredominantActivity> {
    LOOKUP.get_or_init(|| {
        let mut table = HashMap::new();
        for (activity, code, _, aliases) in ACTIVITY_TABLE {
            table.insert(code.to_uppercase(), *activity);
            for alias in aliases.iter() {
                table.insert(alias.to_uppercase(), *activity);
            }
        }
        table
    })
}

impl PredominantActivity {
    pub const ALL: [PredominantActivity; 7] = [
        PredominantActivity::Painting,
        PredominantActivity::Sculpture,
        PredominantActivity::Photography,
        PredominantActivity::Architecture,
        PredominantActivity::Graphics,
        PredominantActivity::Design,
        PredominantActivity::Other,
    ];

    fn entry(&self) -> &'static (PredominantActivity, &'static str, &'static str, &'static [&'static str]) {
        // ACTIVITY_TABLE is ordered like the enum declaration
        &ACTIVITY_TABLE[*self as usize]
    }

    /// Canonical code (e.g. "PITTURA")
    pub fn code(&self) -> &'static str {
        self.entry().1
    }

    /// Canonical display label (e.g. "Pittura")
    pub fn label(&self) -> &'static str {
        self.entry().2
    }

    /// Lowercase aliases that resolve to this activity
    pub fn aliases(&self) -> &'static [&'static str] {
        self.entry().3
    }

    /// Resolve an activity from its code or any alias.
    ///
    /// Unmatched input falls back to `Other`; blank input is an error.
    pub fn from_string(input: &str) -> Result<Self> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ArchiveError::invalid(
                "predominant activity is required and cannot be blank",
            ));
        }

        Ok(lookup_table()
            .get(&key.to_uppercase())
            .copied()
            .unwrap_or(PredominantActivity::Other))
    }
}

impl fmt::Display for PredominantActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PredominantActivity {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self> {
        PredominantActivity::from_string(s)
    }
}
