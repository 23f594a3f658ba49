/// Pure person model for in-process consumers (no serde/utoipa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub email: String,
}

/// Data for creating a person; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub email: String,
}

impl Person {
    /// Attach a store-assigned id to person data.
    pub fn with_id(id: i64, data: NewPerson) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            address: data.address,
            gender: data.gender,
            email: data.email,
        }
    }
}

impl From<Person> for NewPerson {
    fn from(p: Person) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            address: p.address,
            gender: p.gender,
            email: p.email,
        }
    }
}
