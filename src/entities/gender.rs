// 🚻 Gender - closed set with fixed display labels
//
// Parsed from a single char ('M', 'F', 'A') or from a word
// ("maschio", "femmina", "altro"), case-insensitive.

use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// 'M' - Maschio
    Male,

    /// 'F' - Femmina
    Female,

    /// 'A' - Altro
    Other,
}

impl Gender {
    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Maschio",
            Gender::Female => "Femmina",
            Gender::Other => "Altro",
        }
    }

    /// Single-letter code accepted by `from_char`
    pub fn code(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Other => 'A',
        }
    }

    /// Resolve a gender from its one-letter code (case-insensitive)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'M' => Ok(Gender::Male),
            'F' => Ok(Gender::Female),
            'A' => Ok(Gender::Other),
            _ => Err(ArchiveError::invalid(format!(
                "invalid gender '{}': use 'M', 'F' or 'A'",
                c
            ))),
        }
    }

    /// Resolve a gender from a code or full word (trimmed, case-insensitive)
    pub fn from_string(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MASCHIO" => Ok(Gender::Male),
            "F" | "FEMMINA" => Ok(Gender::Female),
            "A" | "ALTRO" => Ok(Gender::Other),
            _ => Err(ArchiveError::invalid(format!("invalid gender: '{}'", s))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self> {
        Gender::from_string(s)
    }
}
