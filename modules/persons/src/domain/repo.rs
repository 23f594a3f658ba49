use crate::contract::model::{NewPerson, Person};
use async_trait::async_trait;

/// Port for the domain layer: persistence operations the service needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait PersonsRepository: Send + Sync {
    /// All persons, ordered by ascending id.
    async fn find_all(&self) -> anyhow::Result<Vec<Person>>;
    /// Load a person by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>>;
    /// Load a person by email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>>;
    /// Insert when `id` is `None` (the store assigns one), otherwise overwrite
    /// the row with that id. Returns the stored record.
    async fn save(&self, id: Option<i64>, data: NewPerson) -> anyhow::Result<Person>;
    /// Remove the row with that id.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
}
