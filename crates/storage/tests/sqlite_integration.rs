use mathbook_core::model::{ChapterId, ExerciseId, LessonId, QuizScore, UserProgress};
use mathbook_core::time::fixed_now;
use storage::record::{decode_progress, encode_progress};
use storage::repository::{SnapshotStore, Storage, StorageError};
use storage::sqlite::SqliteSnapshotStore;

const KEY: &str = "mathAppUserProgress";

#[tokio::test]
async fn sqlite_round_trips_progress_snapshot() {
    let repo = SqliteSnapshotStore::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut progress = UserProgress::new();
    progress.mark_lesson_completed(LessonId::from("l1-ch1"));
    progress.record_attempt(ExerciseId::from("mcq1-ch1-l1"), false);
    progress.record_attempt(ExerciseId::from("mcq1-ch1-l1"), true);
    progress.record_quiz_score(
        ChapterId::from("ch1"),
        QuizScore::new(200.0 / 3.0, 3, 2, fixed_now()).unwrap(),
    );

    let raw = encode_progress(&progress).unwrap();
    repo.save(KEY, &raw).await.expect("save");

    let loaded = repo.load(KEY).await.expect("load").expect("present");
    assert_eq!(decode_progress(&loaded).unwrap(), progress);
}

#[tokio::test]
async fn sqlite_save_overwrites_and_clear_deletes() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    let store = storage.snapshots;

    store.save(KEY, "first").await.unwrap();
    store.save(KEY, "second").await.unwrap();
    assert_eq!(store.load(KEY).await.unwrap().as_deref(), Some("second"));

    store.clear(KEY).await.unwrap();
    assert_eq!(store.load(KEY).await.unwrap(), None);
    store.clear(KEY).await.expect("clearing a missing key succeeds");
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteSnapshotStore::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
    repo.save(KEY, "{}").await.unwrap();
    assert!(repo.load(KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn sqlite_rejects_invalid_keys() {
    let repo = SqliteSnapshotStore::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    let err = repo.save("bad key", "x").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
}

#[tokio::test]
async fn file_storage_round_trips_through_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::file(dir.path()).expect("file storage");
    storage.snapshots.save(KEY, "{}").await.unwrap();
    assert_eq!(storage.snapshots.load(KEY).await.unwrap().as_deref(), Some("{}"));
}
