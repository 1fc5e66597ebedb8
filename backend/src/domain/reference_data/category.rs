//! Event category reference entity.

/// Category under which events are grouped (for example "Music").
///
/// Categories are owned by the storage layer; this core only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: i32,
    name: String,
    description: String,
}

impl Category {
    /// Construct a category from its stored fields.
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Display name, such as "Music".
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description shown alongside the name.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}
