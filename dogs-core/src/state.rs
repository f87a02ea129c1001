//! Application state traits for dependency injection
//!
//! Handlers are generic over [`HasDogs`], so the production `AppState` and the
//! test states used by the HTTP tests run exactly the same handler code.

use crate::config::Config;
use crate::repository::DogRepository;

/// Trait for application state that provides access to the dog repository.
pub trait HasDogs: Clone + Send + Sync + 'static {
    /// The dog repository type
    type DogRepo: DogRepository;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the dog repository
    fn dog_repo(&self) -> &Self::DogRepo;

    /// Check if the backing store is reachable
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
