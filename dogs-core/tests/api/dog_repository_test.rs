//! Dog repository contract tests against the in-memory backend

use dogs_core::domain::{Dog, DogInput};
use dogs_core::repository::{DogRepository, DogStore, InMemoryDogRepository};
use pretty_assertions::assert_eq;

fn input(name: &str, weight: f64) -> DogInput {
    DogInput {
        name: name.to_string(),
        weight,
    }
}

#[tokio::test]
async fn test_store_dispatches_to_memory_backend() {
    let store = DogStore::Memory(InMemoryDogRepository::new());
    assert_eq!(store.backend_name(), "memory");

    let rex = store.create(&input("Rex", 40.0)).await.unwrap();
    let found = store.find_by_id(&rex.id).await.unwrap();

    assert_eq!(found, Some(rex));
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn test_update_and_delete_report_absent_records() {
    let store = DogStore::Memory(InMemoryDogRepository::new());

    assert_eq!(store.update("ghost", &input("Rex", 1.0)).await.unwrap(), None);
    assert_eq!(store.delete("ghost").await.unwrap(), None);
}

#[tokio::test]
async fn test_seeded_store_keeps_order_through_delete() {
    let dogs = vec![
        Dog {
            id: "a".to_string(),
            name: "Alpha".to_string(),
            weight: 10.0,
        },
        Dog {
            id: "b".to_string(),
            name: "Bravo".to_string(),
            weight: 20.0,
        },
        Dog {
            id: "c".to_string(),
            name: "Charlie".to_string(),
            weight: 30.0,
        },
    ];
    let repo = InMemoryDogRepository::with_dogs(dogs);

    let removed = repo.delete("b").await.unwrap().unwrap();
    assert_eq!(removed.name, "Bravo");

    let ids: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
}
