use mockall::mock;

use photo_namer_backend::entities::photo::{PhotoRecord, SavePhotoRequest};
use photo_namer_backend::errors::AppError;
use photo_namer_backend::repositories::photo::{MemoryPhotoStore, PhotoStore};
use photo_namer_backend::use_cases::photos::PhotoHandler;

// === Mock Trait for PhotoStore ===
mock! {
    pub PhotoRepo {}

    #[async_trait::async_trait]
    impl PhotoStore for PhotoRepo {
        async fn insert(&self, record: PhotoRecord) -> Result<(), AppError>;
        async fn list_all(&self) -> Result<Vec<PhotoRecord>, AppError>;
        async fn delete_by_name(&self, name: &str) -> Result<(), AppError>;
        async fn count(&self) -> Result<u64, AppError>;
    }
}

fn request(name: &str, data_uri: &str) -> SavePhotoRequest {
    SavePhotoRequest {
        photo_data_uri: data_uri.to_string(),
        new_name: name.to_string(),
    }
}

fn setup_handler() -> PhotoHandler<MemoryPhotoStore> {
    PhotoHandler::new(MemoryPhotoStore::new())
}

// === TESTS ===

#[tokio::test]
async fn test_save_then_list_grows_by_one_with_new_record_first() {
    let handler = setup_handler();

    handler
        .save_photo(request("First", "data:image/png;base64,AAA="))
        .await
        .unwrap();
    let before = handler.get_photos().await.unwrap();

    handler
        .save_photo(request("Second", "data:image/png;base64,BBB="))
        .await
        .unwrap();
    let after = handler.get_photos().await.unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].name, "Second");
}

#[tokio::test]
async fn test_save_alice_scenario() {
    let handler = setup_handler();

    let response = handler
        .save_photo(request("Alice", "data:image/png;base64,AAA="))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Photo saved successfully on the server.");

    let photos = handler.get_photos().await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].name, "Alice");
    assert_eq!(photos[0].data_uri, "data:image/png;base64,AAA=");
}

#[tokio::test]
async fn test_empty_name_fails_validation_and_leaves_store_untouched() {
    let handler = setup_handler();

    let result = handler
        .save_photo(request("", "data:image/png;base64,AAA="))
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(handler.count_photos().await.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_payload_fails_validation_and_leaves_store_untouched() {
    let handler = setup_handler();

    let result = handler.save_photo(request("Alice", "")).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(handler.count_photos().await.unwrap(), 0);
}

#[tokio::test]
async fn test_listing_is_most_recent_first() {
    let handler = setup_handler();

    for name in ["t1", "t2", "t3"] {
        handler
            .save_photo(request(name, "data:image/png;base64,AAA="))
            .await
            .unwrap();
    }

    let photos = handler.get_photos().await.unwrap();
    let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["t3", "t2", "t1"]);
}

#[tokio::test]
async fn test_timestamps_are_server_assigned_and_ordered() {
    let store = MemoryPhotoStore::new();
    let handler = PhotoHandler::new(store.clone());

    for name in ["t1", "t2", "t3"] {
        handler
            .save_photo(request(name, "data:image/png;base64,AAA="))
            .await
            .unwrap();
    }

    let records = store.list_all().await.unwrap();
    assert!(records[0].uploaded_at >= records[1].uploaded_at);
    assert!(records[1].uploaded_at >= records[2].uploaded_at);
}

#[tokio::test]
async fn test_delete_of_missing_name_is_a_noop() {
    let handler = setup_handler();

    handler
        .save_photo(request("Keeper", "data:image/png;base64,AAA="))
        .await
        .unwrap();

    handler.delete_photo("NoSuchPhoto").await.unwrap();

    let photos = handler.get_photos().await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].name, "Keeper");
}

#[tokio::test]
async fn test_delete_removes_only_the_first_matching_record() {
    let handler = setup_handler();

    // Duplicates are permitted; the second insert ends up first in order.
    handler
        .save_photo(request("Dup", "data:image/png;base64,AAA="))
        .await
        .unwrap();
    handler
        .save_photo(request("Dup", "data:image/png;base64,BBB="))
        .await
        .unwrap();
    handler
        .save_photo(request("Other", "data:image/png;base64,CCC="))
        .await
        .unwrap();

    handler.delete_photo("Dup").await.unwrap();

    let photos = handler.get_photos().await.unwrap();
    let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Other", "Dup"]);
    // The newest duplicate was scanned first and removed.
    assert_eq!(photos[1].data_uri, "data:image/png;base64,AAA=");
}

#[tokio::test]
async fn test_listing_returns_rfc3339_timestamps() {
    let handler = setup_handler();

    handler
        .save_photo(request("Stamped", "data:image/png;base64,AAA="))
        .await
        .unwrap();

    let photos = handler.get_photos().await.unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(&photos[0].uploaded_at);
    assert!(parsed.is_ok());
}

#[tokio::test]
async fn test_listing_surfaces_store_failure() {
    let mut store = MockPhotoRepo::new();
    store
        .expect_list_all()
        .returning(|| Err(AppError::InternalError("store unavailable".to_string())));

    let handler = PhotoHandler::new(store);

    let result = handler.get_photos().await;
    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[tokio::test]
async fn test_listing_snapshot_is_detached_from_the_store() {
    let store = MemoryPhotoStore::new();
    let handler = PhotoHandler::new(store.clone());

    handler
        .save_photo(request("Snapshot", "data:image/png;base64,AAA="))
        .await
        .unwrap();

    let mut snapshot = store.list_all().await.unwrap();
    snapshot.clear();

    assert_eq!(store.count().await.unwrap(), 1);
}
