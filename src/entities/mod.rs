// Subject Models
//
// Each subject has:
// - Normalized key that identifies it in the catalog
// - Validated, immutable field values
// - A description rendered through the `Subject` trait

pub mod activity;
pub mod artwork;
pub mod gender;
pub mod object;
pub mod person;
pub mod subject;

pub use activity::PredominantActivity;
pub use artwork::{Artwork, MAX_ARTWORK_YEAR, MIN_ARTWORK_YEAR};
pub use gender::Gender;
pub use object::PhysicalObject;
pub use person::{current_year, Person};
pub use subject::{same_subject, Subject, SubjectKey, SubjectKind};
