// Photo Archive - Core Library
// Catalog of photographed subjects (people, artworks, objects)

pub mod error;
pub mod entities;
pub mod catalog;
pub mod seed;

// Re-export commonly used types
pub use error::{ArchiveError, Result};
pub use entities::{
    Artwork, Gender, Person, PhysicalObject, PredominantActivity,
    Subject, SubjectKey, SubjectKind,
};
pub use catalog::{catalog, Catalog};
pub use seed::{load_file, SeedFile, SubjectRecord};
