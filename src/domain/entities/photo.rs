use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One stored photo: its name, the MIME-tagged base64 payload, and the
/// server-assigned upload timestamp. Records are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub name: String,
    pub data_uri: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SavePhotoRequest {
    /// Expected format: `data:<mimetype>;base64,<encoded_data>`. The store
    /// treats it as opaque; only presence is validated here.
    #[validate(length(min = 1, message = "Photo data URI is required"))]
    pub photo_data_uri: String,

    #[validate(length(min = 1, message = "Photo name is required"))]
    pub new_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavePhotoResponse {
    pub success: bool,
    pub message: String,
}

/// Transport shape for listings: `uploaded_at` normalized to RFC 3339 text.
#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoView {
    pub name: String,
    pub data_uri: String,
    pub uploaded_at: String,
}

impl From<PhotoRecord> for PhotoView {
    fn from(record: PhotoRecord) -> Self {
        PhotoView {
            name: record.name,
            data_uri: record.data_uri,
            uploaded_at: record.uploaded_at.to_rfc3339(),
        }
    }
}
