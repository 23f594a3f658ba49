use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::contract::model::{NewPerson, Person};
use crate::domain::repo::PersonsRepository;
use crate::infra::storage::entity::{Column, Entity as PersonEntity};
use crate::infra::storage::mapper::{entity_to_contract, to_active_model};

/// SeaORM-backed implementation of the persons repository.
///
/// Generic over the connection so it works with a `DatabaseConnection`
/// as well as with a transaction.
pub struct SeaOrmPersonsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPersonsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> PersonsRepository for SeaOrmPersonsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_all(&self) -> anyhow::Result<Vec<Person>> {
        let rows = PersonEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        let found = PersonEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>> {
        let found = PersonEntity::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::Id)
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn save(&self, id: Option<i64>, data: NewPerson) -> anyhow::Result<Person> {
        let am = to_active_model(id, data);
        let model = match id {
            Some(_) => am.update(&self.conn).await.context("update failed")?,
            None => am.insert(&self.conn).await.context("insert failed")?,
        };
        Ok(entity_to_contract(model))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        PersonEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete_by_id failed")?;
        Ok(())
    }
}
