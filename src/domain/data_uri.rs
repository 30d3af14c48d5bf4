use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::errors::DataUriError;

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A decoded `data:<mime>;base64,<data>` payload. Encoding preserves the
/// media type reported by the source byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        DataUri {
            media_type: media_type.into(),
            data,
        }
    }

    /// Renders the tagged textual form suitable for transport and inline
    /// rendering.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}",
            PREFIX,
            self.media_type,
            BASE64_MARKER,
            STANDARD.encode(&self.data)
        )
    }

    /// Parses a tagged string back into media type and raw bytes. Malformed
    /// input is a typed error, never a silent empty value.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .strip_prefix(PREFIX)
            .ok_or(DataUriError::MissingPrefix)?;

        let marker = rest
            .find(BASE64_MARKER)
            .ok_or(DataUriError::MissingBase64Marker)?;

        let media_type = &rest[..marker];
        if media_type.is_empty() {
            return Err(DataUriError::EmptyMediaType);
        }

        let data = STANDARD
            .decode(&rest[marker + BASE64_MARKER.len()..])
            .map_err(|e| DataUriError::InvalidBase64(e.to_string()))?;

        Ok(DataUri::new(media_type, data))
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_tagged_form() {
        let uri = DataUri::new("image/png", vec![0, 0, 0]).encode();
        assert_eq!(uri, "data:image/png;base64,AAAA");
    }

    #[test]
    fn round_trip_preserves_bytes_and_media_type() {
        let original = DataUri::new("image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0, 0x42]);
        let decoded = DataUri::parse(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trip_empty_payload() {
        let original = DataUri::new("image/gif", vec![]);
        assert_eq!(DataUri::parse(&original.encode()).unwrap(), original);
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        assert_eq!(
            DataUri::parse("image/png;base64,AAAA"),
            Err(DataUriError::MissingPrefix)
        );
    }

    #[test]
    fn parse_rejects_missing_marker() {
        assert_eq!(
            DataUri::parse("data:image/png,AAAA"),
            Err(DataUriError::MissingBase64Marker)
        );
    }

    #[test]
    fn parse_rejects_empty_media_type() {
        assert_eq!(
            DataUri::parse("data:;base64,AAAA"),
            Err(DataUriError::EmptyMediaType)
        );
    }

    #[test]
    fn parse_rejects_bad_base64() {
        assert!(matches!(
            DataUri::parse("data:image/png;base64,not-valid!"),
            Err(DataUriError::InvalidBase64(_))
        ));
    }

    #[test]
    fn is_image_checks_media_type_family() {
        assert!(DataUri::new("image/webp", vec![]).is_image());
        assert!(!DataUri::new("application/pdf", vec![]).is_image());
    }
}
