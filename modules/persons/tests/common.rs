#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sea_orm_migration::MigratorTrait;

use persons::contract::model::{NewPerson, Person};
use persons::domain::repo::PersonsRepository;
use persons::domain::service::Service;
use persons::infra::storage::migrations::Migrator;

/// Repository double keeping rows in a map, with a monotonic id counter.
#[derive(Default)]
pub struct InMemoryPersonsRepository {
    rows: Mutex<BTreeMap<i64, Person>>,
    next_id: AtomicI64,
    saves: AtomicUsize,
    fail: bool,
}

impl InMemoryPersonsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like a broken database would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl PersonsRepository for InMemoryPersonsRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Person>> {
        self.check()?;
        Ok(self.rows.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        self.check()?;
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>> {
        self.check()?;
        Ok(self.rows.lock().values().find(|p| p.email == email).cloned())
    }

    async fn save(&self, id: Option<i64>, data: NewPerson) -> anyhow::Result<Person> {
        self.check()?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        let id = id.unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let person = Person::with_id(id, data);
        self.rows.lock().insert(id, person.clone());
        Ok(person)
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.check()?;
        self.rows.lock().remove(&id);
        Ok(())
    }
}

/// Fresh in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one long-lived connection: every new connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn create_test_db() -> DatabaseConnection {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn memory_service() -> (Arc<InMemoryPersonsRepository>, Service) {
    let repo = Arc::new(InMemoryPersonsRepository::new());
    let service = Service::new(repo.clone());
    (repo, service)
}

pub fn new_person(first_name: &str, email: &str) -> NewPerson {
    NewPerson {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        address: "1 Main St".to_string(),
        gender: "M".to_string(),
        email: email.to_string(),
    }
}
