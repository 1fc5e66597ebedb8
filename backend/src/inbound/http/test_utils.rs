//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::FixtureReferenceDataRepository;
use crate::domain::{CategoryLister, LocationLister, RequirementLister};

use super::state::HttpState;

/// State whose every collection reads as empty.
///
/// Tests replace the field under test with a mock.
pub fn fixture_http_state() -> HttpState {
    let repository = Arc::new(FixtureReferenceDataRepository);
    HttpState::new(
        Arc::new(CategoryLister::new(repository.clone())),
        Arc::new(LocationLister::new(repository.clone())),
        Arc::new(RequirementLister::new(repository)),
    )
}
