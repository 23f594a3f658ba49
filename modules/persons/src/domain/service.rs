use std::sync::Arc;

use crate::contract::model::{NewPerson, Person};
use crate::domain::error::DomainError;
use crate::domain::repo::PersonsRepository;
use tracing::{debug, info, instrument, warn};

/// Domain service with the business rules for persons.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PersonsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn PersonsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "persons.service.find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        debug!("Finding all persons");
        let persons = self.repo.find_all().await?;
        debug!("Found {} persons", persons.len());
        Ok(persons)
    }

    #[instrument(name = "persons.service.find_by_id", skip(self), fields(person_id = id))]
    pub async fn find_by_id(&self, id: i64) -> Result<Person, DomainError> {
        debug!("Finding one person");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(id))
    }

    #[instrument(
        name = "persons.service.create",
        skip(self, person),
        fields(email = %person.email)
    )]
    pub async fn create(&self, person: NewPerson) -> Result<Person, DomainError> {
        info!("Creating one person");

        if let Some(existing) = self.repo.find_by_email(&person.email).await? {
            warn!(existing_id = existing.id, "Email already in use");
            return Err(DomainError::email_already_exists(person.email));
        }

        let created = self.repo.save(None, person).await?;
        info!(person_id = created.id, "Created person");
        Ok(created)
    }

    #[instrument(
        name = "persons.service.update",
        skip(self, person),
        fields(person_id = person.id)
    )]
    pub async fn update(&self, person: Person) -> Result<Person, DomainError> {
        info!("Updating one person");

        let mut current = self
            .repo
            .find_by_id(person.id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(person.id))?;

        current.first_name = person.first_name;
        current.last_name = person.last_name;
        current.address = person.address;
        current.gender = person.gender;
        current.email = person.email;

        let id = current.id;
        let updated = self.repo.save(Some(id), current.into()).await?;
        info!("Updated person");
        Ok(updated)
    }

    #[instrument(name = "persons.service.delete", skip(self), fields(person_id = id))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting one person");

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(id))?;

        self.repo.delete_by_id(existing.id).await?;
        info!("Deleted person");
        Ok(())
    }
}
