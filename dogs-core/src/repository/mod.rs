//! Data access layer (Repository pattern)

pub mod dog;
pub mod memory;

pub use dog::{DogRepository, DogRepositoryImpl};
pub use memory::InMemoryDogRepository;

use crate::domain::{Dog, DogInput};
use crate::error::Result;
use async_trait::async_trait;

/// Storage backend selected at startup
pub enum DogStore {
    Memory(InMemoryDogRepository),
    MySql(DogRepositoryImpl),
}

impl DogStore {
    pub fn backend_name(&self) -> &'static str {
        match self {
            DogStore::Memory(_) => "memory",
            DogStore::MySql(_) => "mysql",
        }
    }
}

#[async_trait]
impl DogRepository for DogStore {
    async fn find_all(&self) -> Result<Vec<Dog>> {
        match self {
            DogStore::Memory(repo) => repo.find_all().await,
            DogStore::MySql(repo) => repo.find_all().await,
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>> {
        match self {
            DogStore::Memory(repo) => repo.find_by_id(id).await,
            DogStore::MySql(repo) => repo.find_by_id(id).await,
        }
    }

    async fn create(&self, input: &DogInput) -> Result<Dog> {
        match self {
            DogStore::Memory(repo) => repo.create(input).await,
            DogStore::MySql(repo) => repo.create(input).await,
        }
    }

    async fn update(&self, id: &str, input: &DogInput) -> Result<Option<Dog>> {
        match self {
            DogStore::Memory(repo) => repo.update(id, input).await,
            DogStore::MySql(repo) => repo.update(id, input).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>> {
        match self {
            DogStore::Memory(repo) => repo.delete(id).await,
            DogStore::MySql(repo) => repo.delete(id).await,
        }
    }

    async fn ping(&self) -> Result<()> {
        match self {
            DogStore::Memory(repo) => repo.ping().await,
            DogStore::MySql(repo) => repo.ping().await,
        }
    }
}
