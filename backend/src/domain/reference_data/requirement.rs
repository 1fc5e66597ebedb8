//! Event requirement reference entity.

/// Something an event needs in order to run, such as a projector or a
/// sound system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    id: i32,
    description: String,
}

impl Requirement {
    /// Construct a requirement from its stored fields.
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// What the event needs.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}
