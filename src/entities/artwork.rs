// 🖼️ Artwork - a photographed work of art
//
// "Guernica di Picasso (1937), Madrid"

use super::subject::{Subject, SubjectKey, SubjectKind};
use crate::error::{require_text, ArchiveError, Result};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const MIN_ARTWORK_YEAR: i32 = 0;
pub const MAX_ARTWORK_YEAR: i32 = 2100;

#[derive(Debug, Clone)]
pub struct Artwork {
    key: SubjectKey,
    title: String,
    artist: String,
    location: String,
    year: i32,
}

impl Artwork {
    pub fn new(key: &str, title: &str, artist: &str, location: &str, year: i32) -> Result<Self> {
        let key = SubjectKey::parse(key)?;
        let title = require_text("title", title)?;
        let artist = require_text("artist", artist)?;
        let location = require_text("location", location)?;

        if !(MIN_ARTWORK_YEAR..=MAX_ARTWORK_YEAR).contains(&year) {
            return Err(ArchiveError::invalid(format!(
                "invalid artwork year: {}. Must be between {} and {}",
                year, MIN_ARTWORK_YEAR, MAX_ARTWORK_YEAR
            )));
        }

        Ok(Artwork {
            key,
            title,
            artist,
            location,
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Subject for Artwork {
    fn key(&self) -> &SubjectKey {
        &self.key
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Artwork
    }

    fn description(&self) -> String {
        format!(
            "{} di {} ({}), {}",
            self.title, self.artist, self.year, self.location
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// Identity only: two artworks with the same key are the same artwork
impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Artwork {}

impl Hash for Artwork {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_description() {
        let art = Artwork::new("K2", "Guernica", "Picasso", "Madrid", 1937).unwrap();
        assert_eq!(art.description(), "Guernica di Picasso (1937), Madrid");
        assert_eq!(art.to_string(), "Artwork[key=K2]");
    }

    #[test]
    fn test_artwork_trims_fields() {
        let art = Artwork::new(" k2 ", " Guernica ", " Picasso", "Madrid  ", 1937).unwrap();
        assert_eq!(art.key().as_str(), "K2");
        assert_eq!(art.title(), "Guernica");
        assert_eq!(art.artist(), "Picasso");
        assert_eq!(art.location(), "Madrid");
        assert_eq!(art.year(), 1937);
    }

    #[test]
    fn test_artwork_required_fields() {
        assert!(Artwork::new("K2", "", "Picasso", "Madrid", 1937).is_err());
        assert!(Artwork::new("K2", "Guernica", "  ", "Madrid", 1937).is_err());

        let err = Artwork::new("K2", "Guernica", "Picasso", "", 1937).unwrap_err();
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_artwork_year_bounds() {
        assert!(Artwork::new("K2", "T", "A", "L", 0).is_ok());
        assert!(Artwork::new("K2", "T", "A", "L", 2100).is_ok());

        let err = Artwork::new("K2", "T", "A", "L", 2101).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("2100"));
        assert!(Artwork::new("K2", "T", "A", "L", -5).is_err());
    }

    #[test]
    fn test_artwork_equality_is_by_key() {
        let a = Artwork::new("K2", "Guernica", "Picasso", "Madrid", 1937).unwrap();
        let b = Artwork::new("k2", "Other title", "Someone", "Paris", 2000).unwrap();
        let c = Artwork::new("K3", "Guernica", "Picasso", "Madrid", 1937).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
