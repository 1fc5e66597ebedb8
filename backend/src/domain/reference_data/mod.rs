//! Reference data shown when organising events: categories, locations and
//! requirements.
//!
//! The entities are read-only from this crate's perspective. Their lifecycle
//! belongs to the storage layer; the listers here only fetch and return them.

mod category;
mod listers;
mod location;
mod requirement;

pub use category::Category;
pub use listers::{CategoryLister, LocationLister, RequirementLister};
pub use location::{Location, LocationDraft};
pub use requirement::Requirement;
