// 🧑 Person - a human subject, living or deceased
//
// Unlike the other variants, two persons are equal only when EVERY field
// matches (key, name, gender, birth year, deceased flag).

use super::gender::Gender;
use super::subject::{Subject, SubjectKey, SubjectKind};
use crate::error::{require_text, ArchiveError, Result};
use chrono::Datelike;
use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

static CURRENT_YEAR: OnceLock<i32> = OnceLock::new();

/// Calendar year read from the local clock the first time it is needed,
/// then fixed for the rest of the process
pub fn current_year() -> i32 {
    *CURRENT_YEAR.get_or_init(|| chrono::Local::now().year())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    key: SubjectKey,
    name: String,
    gender: Gender,
    deceased: bool,
    birth_year: i32,
}

impl Person {
    /// Build a person from raw caller input.
    ///
    /// `gender` is a one-letter code ('M', 'F', 'A'); `birth_year` must be in
    /// `[0, current_year()]`.
    pub fn new(
        key: &str,
        name: &str,
        gender: char,
        deceased: bool,
        birth_year: i32,
    ) -> Result<Self> {
        let key = SubjectKey::parse(key)?;
        let name = require_text("name", name)?;
        let gender = Gender::from_char(gender)?;
        let birth_year = validate_birth_year(birth_year)?;

        Ok(Person {
            key,
            name,
            gender,
            deceased,
            birth_year,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn is_deceased(&self) -> bool {
        self.deceased
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }
}

fn validate_birth_year(year: i32) -> Result<i32> {
    let max = current_year();
    if !(0..=max).contains(&year) {
        return Err(ArchiveError::invalid(format!(
            "invalid birth year: {}. Must be between 0 and {}",
            year, max
        )));
    }
    Ok(year)
}

impl Subject for Person {
    fn key(&self) -> &SubjectKey {
        &self.key
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Person
    }

    fn description(&self) -> String {
        let base = format!(
            "{} ({}, nato nel {})",
            self.name,
            self.gender.label(),
            self.birth_year
        );
        if self.deceased {
            format!("{}, deceduto", base)
        } else {
            base
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Another person is equal only when every field matches
    fn same_as(&self, other: &dyn Subject) -> bool {
        other
            .as_any()
            .downcast_ref::<Person>()
            .map_or(false, |p| self == p)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
