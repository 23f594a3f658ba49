use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::PersonsApi,
    error::PersonsError,
    model::{NewPerson, Person},
};
use crate::domain::service::Service;

/// Local implementation of the PersonsApi trait that delegates to the domain service
pub struct PersonsLocalClient {
    service: Arc<Service>,
}

impl PersonsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PersonsApi for PersonsLocalClient {
    async fn find_all(&self) -> Result<Vec<Person>, PersonsError> {
        self.service.find_all().await.map_err(PersonsError::from)
    }

    async fn find_by_id(&self, id: i64) -> Result<Person, PersonsError> {
        self.service.find_by_id(id).await.map_err(PersonsError::from)
    }

    async fn create(&self, person: NewPerson) -> Result<Person, PersonsError> {
        self.service.create(person).await.map_err(PersonsError::from)
    }

    async fn update(&self, person: Person) -> Result<Person, PersonsError> {
        self.service.update(person).await.map_err(PersonsError::from)
    }

    async fn delete(&self, id: i64) -> Result<(), PersonsError> {
        self.service.delete(id).await.map_err(PersonsError::from)
    }
}
