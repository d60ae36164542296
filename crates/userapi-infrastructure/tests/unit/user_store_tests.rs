//! JsonUserStore behavior

use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;
use userapi_domain::entities::{Role, UserRecord};
use userapi_domain::error::Error;
use userapi_domain::repositories::UserRepository;
use userapi_infrastructure::JsonUserStore;

fn user(username: &str) -> UserRecord {
    UserRecord::new(
        username.to_uppercase(),
        format!("{username}@example.com"),
        Some(30),
        username,
        "$argon2id$v=19$stub",
        Role::User,
    )
}

async fn store_in(dir: &TempDir) -> JsonUserStore {
    JsonUserStore::open(dir.path().join("users.json")).await
}

fn ids(users: &[UserRecord]) -> Vec<u64> {
    users.iter().filter_map(|u| u.id).collect()
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    assert!(store.find_all().await.is_empty());
    assert_eq!(store.next_id().await, Some(1));
}

#[tokio::test]
async fn test_sequential_ids_and_delete_keeps_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    let a = store.save(user("a")).await.unwrap();
    let b = store.save(user("b")).await.unwrap();
    let c = store.save(user("c")).await.unwrap();
    assert_eq!((a.id, b.id, c.id), (Some(1), Some(2), Some(3)));

    assert!(store.delete_by_id(2).await);

    let all = store.find_all().await;
    assert_eq!(ids(&all), vec![1, 3]);
    assert_eq!(all[0].username, "a");
    assert_eq!(all[1].username, "c");
}

#[tokio::test]
async fn test_restart_continues_after_highest_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let seeded = vec![
        user("a").with_id(1),
        user("b").with_id(3),
        user("c").with_id(7),
    ];
    std::fs::write(&path, serde_json::to_string(&seeded).unwrap()).unwrap();

    let store = JsonUserStore::open(&path).await;
    let next = store.save(user("d")).await.unwrap();

    assert_eq!(next.id, Some(8));
    assert_eq!(ids(&store.find_all().await), vec![1, 3, 7, 8]);
}

#[tokio::test]
async fn test_explicit_id_never_collides_with_counter() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    store.save(user("a")).await.unwrap();
    assert_eq!(store.next_id().await, Some(2));

    store.save(user("five").with_id(5)).await.unwrap();
    for name in ["b", "c", "d", "e"] {
        store.save(user(name)).await.unwrap();
    }

    let all = store.find_all().await;
    let unique: HashSet<u64> = ids(&all).into_iter().collect();
    assert_eq!(unique.len(), all.len());
    assert_eq!(ids(&all), vec![1, 5, 6, 7, 8, 9]);
}

#[tokio::test]
async fn test_loaded_record_without_id_gets_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, r#"[{"name":"Bob","username":"bob"}]"#).unwrap();

    let store = JsonUserStore::open(&path).await;
    let all = store.find_all().await;
    assert_eq!(ids(&all), vec![1]);
    assert!(all.iter().all(|u| u.id.is_some()));

    let bob = store.find_by_id(1).await.unwrap();
    assert_eq!(bob.username, "bob");

    let err = store.save(user("bob")).await.unwrap_err();
    assert!(matches!(err, Error::DuplicateUser { .. }));
    assert_eq!(store.count().await, 1);

    assert!(store.delete_by_id(1).await);
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_exhausted_id_space_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    let top = store.save(user("a").with_id(u64::MAX)).await.unwrap();
    assert_eq!(top.id, Some(u64::MAX));
    assert_eq!(store.next_id().await, None);

    let err = store.save(user("b")).await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert!(store.save(user("c")).await.is_err());
    assert_eq!(ids(&store.find_all().await), vec![u64::MAX]);
}

#[tokio::test]
async fn test_restart_at_max_id_does_not_reuse_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let seeded = vec![user("a").with_id(u64::MAX)];
    std::fs::write(&path, serde_json::to_string(&seeded).unwrap()).unwrap();

    let store = JsonUserStore::open(&path).await;
    assert!(store.save(user("b")).await.is_err());
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_replace_keeps_position() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    for name in ["a", "b", "c"] {
        store.save(user(name)).await.unwrap();
    }

    let mut b = store.find_by_id(2).await.unwrap();
    b.email = "new@example.com".to_string();
    store.save(b).await.unwrap();

    let all = store.find_all().await;
    assert_eq!(ids(&all), vec![1, 2, 3]);
    assert_eq!(all[1].email, "new@example.com");
    assert_eq!(store.next_id().await, Some(4));
}

#[tokio::test]
async fn test_find_all_returns_isolated_copy() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    store.save(user("a")).await.unwrap();

    let mut snapshot = store.find_all().await;
    snapshot.clear();
    snapshot.push(user("intruder").with_id(99));

    let again = store.find_all().await;
    assert_eq!(ids(&again), vec![1]);
    assert!(store.find_by_id(99).await.is_none());
}

#[tokio::test]
async fn test_delete_twice() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    let saved = store.save(user("a")).await.unwrap();
    let id = saved.id.unwrap();

    assert!(store.delete_by_id(id).await);
    assert!(store.find_by_id(id).await.is_none());
    assert!(!store.delete_by_id(id).await);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    store.save(user("a")).await.unwrap();
    store.save(user("b")).await.unwrap();
    store.delete_by_id(2).await;

    let c = store.save(user("c")).await.unwrap();
    assert_eq!(c.id, Some(3));
}

#[tokio::test]
async fn test_username_lookup_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    store.save(user("alice")).await.unwrap();

    assert!(store.find_by_username("alice").await.is_some());
    assert!(store.find_by_username("Alice").await.is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;
    store.save(user("alice")).await.unwrap();

    let err = store.save(user("alice")).await.unwrap_err();
    assert!(matches!(err, Error::DuplicateUser { ref field, .. } if field == "username"));
    assert_eq!(store.count().await, 1);

    // Renaming a different record onto the taken name is rejected too
    let bob = store.save(user("bob")).await.unwrap();
    let mut renamed = bob.clone();
    renamed.username = "alice".to_string();
    assert!(store.save(renamed).await.is_err());
    assert_eq!(store.find_by_id(bob.id.unwrap()).await.unwrap().username, "bob");
}

#[tokio::test]
async fn test_loaded_duplicates_resolve_to_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let mut first = user("dup").with_id(1);
    first.name = "First".to_string();
    let mut second = user("dup").with_id(2);
    second.name = "Second".to_string();
    std::fs::write(&path, serde_json::to_string(&vec![first, second]).unwrap()).unwrap();

    let store = JsonUserStore::open(&path).await;
    assert_eq!(store.find_by_username("dup").await.unwrap().name, "First");
}

#[tokio::test]
async fn test_every_mutation_rewrites_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let store = JsonUserStore::open(&path).await;

    store.save(user("a")).await.unwrap();
    store.save(user("b")).await.unwrap();
    let on_disk: Vec<UserRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(ids(&on_disk), vec![1, 2]);
    assert_eq!(on_disk[0].password, "$argon2id$v=19$stub");

    store.delete_by_id(1).await;
    let on_disk: Vec<UserRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(ids(&on_disk), vec![2]);

    let reopened = JsonUserStore::open(&path).await;
    assert_eq!(reopened.find_all().await, store.find_all().await);
}

#[tokio::test]
async fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = JsonUserStore::open(&path).await;
    assert!(store.find_all().await.is_empty());
    assert_eq!(store.save(user("a")).await.unwrap().id, Some(1));
}

#[tokio::test]
async fn test_write_failure_is_not_raised_and_not_rolled_back() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be written as a file
    let store = JsonUserStore::open(dir.path()).await;

    let saved = store.save(user("a")).await.unwrap();
    assert_eq!(saved.id, Some(1));
    assert_eq!(store.count().await, 1);
    assert!(store.delete_by_id(1).await);
    assert_eq!(store.count().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_get_unique_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let store = Arc::new(JsonUserStore::open(&path).await);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.save(user(&format!("user{i}"))).await })
        })
        .collect();

    let mut assigned = HashSet::new();
    for handle in handles {
        let saved = handle.await.unwrap().unwrap();
        assert!(assigned.insert(saved.id.unwrap()));
    }

    assert_eq!(assigned, (1..=32).collect::<HashSet<u64>>());

    let on_disk: Vec<UserRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 32);
}
