use chrono::Utc;
use validator::Validate;

use crate::{
    entities::photo::{PhotoRecord, PhotoView, SavePhotoRequest, SavePhotoResponse},
    errors::AppError,
    repositories::photo::PhotoStore,
};

pub struct PhotoHandler<R>
where
    R: PhotoStore,
{
    pub photo_store: R,
}

impl<R> PhotoHandler<R>
where
    R: PhotoStore,
{
    pub fn new(photo_store: R) -> Self {
        PhotoHandler { photo_store }
    }

    /// Validates a submission and stores it with a server-assigned
    /// timestamp. The client never supplies `uploaded_at`.
    pub async fn save_photo(
        &self,
        request: SavePhotoRequest,
    ) -> Result<SavePhotoResponse, AppError> {
        request.validate()?;

        let record = PhotoRecord {
            name: request.new_name,
            data_uri: request.photo_data_uri,
            uploaded_at: Utc::now(),
        };

        tracing::info!(name = %record.name, "Received photo to be saved");

        self.photo_store.insert(record).await?;

        Ok(SavePhotoResponse {
            success: true,
            message: "Photo saved successfully on the server.".to_string(),
        })
    }

    /// Returns every stored photo, most recent first, with timestamps in
    /// RFC 3339 form for transport.
    pub async fn get_photos(&self) -> Result<Vec<PhotoView>, AppError> {
        let photos = self.photo_store.list_all().await?;

        Ok(photos.into_iter().map(PhotoView::from).collect())
    }

    /// Removes the first record matching `name`. At-most-once semantics:
    /// a missing name is not an error.
    pub async fn delete_photo(&self, name: &str) -> Result<(), AppError> {
        self.photo_store.delete_by_name(name).await?;

        tracing::info!(name = %name, "Deleted photo");

        Ok(())
    }

    pub async fn count_photos(&self) -> Result<u64, AppError> {
        self.photo_store.count().await
    }
}
