//! API integration tests infrastructure
//!
//! This module provides test utilities for API handler testing without
//! external dependencies (no database).

pub mod dog_repository_test;
pub mod http;

use async_trait::async_trait;
use dogs_core::domain::{Dog, DogInput};
use dogs_core::error::{AppError, Result};
use dogs_core::repository::{DogRepository, InMemoryDogRepository};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// ============================================================================
// Test Repository Implementations
// ============================================================================

/// In-memory dog repository that can be switched into a failing mode
#[derive(Default)]
pub struct TestDogRepository {
    inner: InMemoryDogRepository,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl TestDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of repository calls made so far, `ping` excluded
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn add_dog(&self, name: &str, weight: f64) -> Dog {
        self.inner
            .create(&DogInput {
                name: name.to_string(),
                weight,
            })
            .await
            .unwrap()
    }

    pub async fn count(&self) -> usize {
        self.inner.len().await
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("connection refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl DogRepository for TestDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>> {
        self.enter()?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>> {
        self.enter()?;
        self.inner.find_by_id(id).await
    }

    async fn create(&self, input: &DogInput) -> Result<Dog> {
        self.enter()?;
        self.inner.create(input).await
    }

    async fn update(&self, id: &str, input: &DogInput) -> Result<Option<Dog>> {
        self.enter()?;
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>> {
        self.enter()?;
        self.inner.delete(id).await
    }

    async fn ping(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("connection refused")));
        }
        Ok(())
    }
}
