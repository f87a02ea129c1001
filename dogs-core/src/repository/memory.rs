//! In-process dog store, used when no database is configured

use super::DogRepository;
use crate::domain::{Dog, DogInput};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Insertion-ordered store guarded by a single lock
#[derive(Default)]
pub struct InMemoryDogRepository {
    dogs: RwLock<Vec<Dog>>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that starts with the given records
    pub fn with_dogs(dogs: Vec<Dog>) -> Self {
        Self {
            dogs: RwLock::new(dogs),
        }
    }

    pub async fn len(&self) -> usize {
        self.dogs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.dogs.read().await.is_empty()
    }
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>> {
        Ok(self.dogs.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>> {
        let dogs = self.dogs.read().await;
        Ok(dogs.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, input: &DogInput) -> Result<Dog> {
        let dog = Dog {
            id: Uuid::new_v4().to_string(),
            name: input.name.clone(),
            weight: input.weight,
        };
        self.dogs.write().await.push(dog.clone());
        Ok(dog)
    }

    async fn update(&self, id: &str, input: &DogInput) -> Result<Option<Dog>> {
        let mut dogs = self.dogs.write().await;
        Ok(dogs.iter_mut().find(|d| d.id == id).map(|dog| {
            dog.name = input.name.clone();
            dog.weight = input.weight;
            dog.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>> {
        let mut dogs = self.dogs.write().await;
        Ok(dogs
            .iter()
            .position(|d| d.id == id)
            .map(|index| dogs.remove(index)))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
