//! Integration tests for [`storage::UserRepository`].
//!
//! Each test opens a fresh SQLite file in a temp dir.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use storage::{SampleSize, StorageError, UserRecord, UserRepository, UserStore};
use tempfile::TempDir;

async fn open_repo(dir: &TempDir) -> UserRepository {
    let path = dir.path().join("users.db");
    UserRepository::new(path.to_str().unwrap())
        .await
        .expect("Failed to create repository")
}

fn record(id: &str, label: &str, size: i64) -> UserRecord {
    UserRecord::new(id, "Ada", "omnivore-token-123456", label, SampleSize::new(size).unwrap())
}

/// **Test: Saved record is returned by get_by_id with every field intact.**
#[tokio::test]
async fn test_save_then_get_by_id() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let saved = record("1001", "reading", 3);
    repo.save(&saved).await.expect("Failed to save");

    let found = repo.get_by_id("1001").await.unwrap().expect("record missing");
    assert_eq!(found.external_id, "1001");
    assert_eq!(found.display_name, "Ada");
    assert_eq!(found.credential, "omnivore-token-123456");
    assert_eq!(found.label, "reading");
    assert_eq!(found.sample_size.get(), 3);
    assert!(found.is_first_sync());
    assert_eq!(found.sync_timestamp.timestamp(), saved.sync_timestamp.timestamp());
}

/// **Test: Unknown id is "not registered".**
#[tokio::test]
async fn test_get_by_id_not_found() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    assert!(repo.get_by_id("404").await.unwrap().is_none());
}

/// **Test: A second save for the same external id is rejected.**
#[tokio::test]
async fn test_save_duplicate_rejected() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    repo.save(&record("7", "reading", 2)).await.unwrap();
    let err = repo.save(&record("7", "other", 5)).await.unwrap_err();

    assert!(matches!(err, StorageError::AlreadyExists(id) if id == "7"));
    assert_eq!(repo.get_by_id("7").await.unwrap().unwrap().label, "reading");
}

/// **Test: delete_by_id reports whether a record existed.**
#[tokio::test]
async fn test_delete_by_id() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    repo.save(&record("55", "reading", 1)).await.unwrap();

    assert!(repo.delete_by_id("55").await.unwrap());
    assert!(repo.get_by_id("55").await.unwrap().is_none());
    assert!(!repo.delete_by_id("55").await.unwrap());
}

/// **Test: get_all returns records in insertion order.**
#[tokio::test]
async fn test_get_all_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    for id in ["3", "1", "2"] {
        repo.save(&record(id, "reading", 1)).await.unwrap();
    }

    let ids: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.external_id)
        .collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

/// **Test: mark_synced stamps last_sync; unknown id is NotFound.**
#[tokio::test]
async fn test_mark_synced() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;
    repo.save(&record("9", "reading", 4)).await.unwrap();

    let at: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    repo.mark_synced("9", at).await.unwrap();

    let found = repo.get_by_id("9").await.unwrap().unwrap();
    assert_eq!(found.last_sync, Some(at));
    assert!(!found.is_first_sync());

    let err = repo.mark_synced("10", at).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

/// **Test: Concurrent saves of the same id leave exactly one record.**
///
/// **Setup:** Ten tasks race to save external id "race".
/// **Expected:** One save succeeds, nine fail with AlreadyExists; get_all has one row.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_are_serialized() {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(open_repo(&dir).await);

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let repo = repo.clone();
        tasks.push(tokio::spawn(async move { repo.save(&record("race", "reading", 1)).await }));
    }

    let mut ok = 0;
    let mut dup = 0;
    for t in tasks {
        match t.await.unwrap() {
            Ok(()) => ok += 1,
            Err(StorageError::AlreadyExists(_)) => dup += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(dup, 9);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

/// **Test: In-memory URL works for a single pool connection.**
#[tokio::test]
async fn test_in_memory_database() {
    let repo = UserRepository::new("sqlite::memory:").await.unwrap();
    repo.save(&record("1", "reading", 1)).await.unwrap();
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}
