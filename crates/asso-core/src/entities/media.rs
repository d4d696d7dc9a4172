//! Media entity - an uploaded file stored in the object store

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Coarse media classification derived from the MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Classify a MIME type into a coarse kind.
    ///
    /// Anything that is not image/video/audio falls back to `Document`.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.starts_with("video/") {
            Self::Video
        } else if mime_type.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Document
        }
    }

    /// Lowercase name as stored and served
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "document" => Ok(Self::Document),
            other => Err(DomainError::UnknownMediaKind(other.to_string())),
        }
    }
}

/// Media entity - metadata row describing a stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: Uuid,
    pub file_name: String,
    pub url: String,
    pub kind: MediaKind,
    pub size_bytes: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

impl Media {
    /// Create a new Media row for a freshly stored object
    pub fn new(id: Uuid, file_name: String, url: String, mime_type: String, size_bytes: i64) -> Self {
        Self {
            id,
            file_name,
            url,
            kind: MediaKind::from_mime(&mime_type),
            size_bytes: Some(size_bytes),
            mime_type: Some(mime_type),
            uploaded_by: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Object-store path derived from the public URL (last two segments)
    #[must_use]
    pub fn object_path(&self) -> Option<String> {
        let segments: Vec<&str> = self.url.rsplit('/').take(2).collect();
        if segments.len() == 2 {
            Some(format!("{}/{}", segments[1], segments[0]))
        } else {
            None
        }
    }
}

/// Generate a collision-resistant object name for an upload:
/// millisecond timestamp, a random alphanumeric suffix, and the original
/// file extension.
pub fn generate_object_name(original_name: &str) -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LEN: usize = 10;

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    let timestamp = Utc::now().timestamp_millis();

    match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{timestamp}-{suffix}.{ext}"),
        _ => format!("{timestamp}-{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_classification() {
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Document);
        assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Document);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [MediaKind::Image, MediaKind::Video, MediaKind::Audio, MediaKind::Document] {
            assert_eq!(kind.as_str().parse::<MediaKind>().unwrap(), kind);
        }
        assert!("picture".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_object_name_keeps_extension() {
        let name = generate_object_name("photo de groupe.JPG");
        assert!(name.ends_with(".JPG"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_object_name_without_extension() {
        let name = generate_object_name("README");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_object_names_are_distinct() {
        let a = generate_object_name("a.png");
        let b = generate_object_name("a.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_path_from_url() {
        let media = Media::new(
            Uuid::new_v4(),
            "photo.png".to_string(),
            "http://localhost:8080/media/1700000000-abc123.png".to_string(),
            "image/png".to_string(),
            42,
        );
        assert_eq!(
            media.object_path().as_deref(),
            Some("media/1700000000-abc123.png")
        );
    }
}
