//! Event location reference entity.

/// Input payload for [`Location::new`].
///
/// The address is kept flat, exactly as it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDraft {
    pub id: i32,
    pub name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub reference_point: String,
    pub capacity: i32,
}

/// Venue where events take place, with its address and seating capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: i32,
    name: String,
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
    reference_point: String,
    capacity: i32,
}

impl Location {
    /// Construct a location from its stored fields.
    pub fn new(draft: LocationDraft) -> Self {
        Self::from(draft)
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Venue name, such as "Room 101".
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Street name.
    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    /// Street number. Kept as text because addresses use values like "12A"
    /// or "s/n".
    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    /// Neighbourhood or district.
    pub fn neighborhood(&self) -> &str {
        self.neighborhood.as_str()
    }

    /// City name.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// State or region code.
    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    /// Postal code, verbatim.
    pub fn zip_code(&self) -> &str {
        self.zip_code.as_str()
    }

    /// Landmark that helps visitors find the venue.
    pub fn reference_point(&self) -> &str {
        self.reference_point.as_str()
    }

    /// Seating capacity; never negative in storage.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

impl From<LocationDraft> for Location {
    fn from(draft: LocationDraft) -> Self {
        let LocationDraft {
            id,
            name,
            street,
            number,
            neighborhood,
            city,
            state,
            zip_code,
            reference_point,
            capacity,
        } = draft;
        Self {
            id,
            name,
            street,
            number,
            neighborhood,
            city,
            state,
            zip_code,
            reference_point,
            capacity,
        }
    }
}
