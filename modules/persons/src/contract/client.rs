use async_trait::async_trait;

use crate::contract::{
    error::PersonsError,
    model::{NewPerson, Person},
};

/// In-process API of the persons module.
#[async_trait]
pub trait PersonsApi: Send + Sync {
    /// Every stored person, ordered by id.
    async fn find_all(&self) -> Result<Vec<Person>, PersonsError>;

    /// A single person by id.
    async fn find_by_id(&self, id: i64) -> Result<Person, PersonsError>;

    /// Create a person; fails with `NotFound` when the email is already taken.
    async fn create(&self, person: NewPerson) -> Result<Person, PersonsError>;

    /// Overwrite every mutable field of the person identified by `person.id`.
    async fn update(&self, person: Person) -> Result<Person, PersonsError>;

    /// Remove a person by id.
    async fn delete(&self, id: i64) -> Result<(), PersonsError>;
}
