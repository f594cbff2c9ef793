//! Media format derivation from client-declared filenames.
//!
//! The extension is taken from the filename the client sent and matched
//! against a per-category allow-list. The resulting media type string is
//! synthesized as `"<category>/<extension>"` - it is NOT a content-sniffing
//! result, and a filename lie is not detected here.

use crate::error::AppError;

/// Upload category, which selects the extension allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Image,
    Video,
}

impl MediaCategory {
    /// Accepted extensions. Matching is case-sensitive: `Photo.PNG` is
    /// rejected. That mirrors the reference behavior and is a design choice
    /// to preserve, not an oversight.
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            MediaCategory::Image => &["jpeg", "png"],
            MediaCategory::Video => &["mp4"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
        }
    }
}

/// A validated extension plus its synthesized media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFormat {
    pub extension: String,
    pub media_type: String,
}

impl MediaFormat {
    /// Derive and validate a media format from a client-declared filename.
    ///
    /// The candidate extension is the substring after the last `.`.
    /// An unmatched extension fails with `UnsupportedMediaType` (422), not a
    /// generic bad request.
    pub fn from_filename(filename: &str, category: MediaCategory) -> Result<Self, AppError> {
        let extension = filename.rsplit('.').next().unwrap_or("");

        if extension.is_empty()
            || extension == filename
            || !category.allowed_extensions().contains(&extension)
        {
            return Err(AppError::UnsupportedMediaType(format!(
                "extension '{}' not accepted for {} upload (accepted: {})",
                extension,
                category.as_str(),
                category.allowed_extensions().join(", ")
            )));
        }

        Ok(MediaFormat {
            extension: extension.to_string(),
            media_type: format!("{}/{}", category.as_str(), extension),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allow_listed_thumbnail_extensions() {
        let f = MediaFormat::from_filename("photo.png", MediaCategory::Image).unwrap();
        assert_eq!(f.extension, "png");
        assert_eq!(f.media_type, "image/png");

        let f = MediaFormat::from_filename("shot.jpeg", MediaCategory::Image).unwrap();
        assert_eq!(f.media_type, "image/jpeg");
    }

    #[test]
    fn accepts_mp4_for_video() {
        let f = MediaFormat::from_filename("clip.mp4", MediaCategory::Video).unwrap();
        assert_eq!(f.media_type, "video/mp4");
    }

    #[test]
    fn rejects_unlisted_extensions_as_unsupported_media_type() {
        for name in ["anim.gif", "clip.mov", "page.html", "photo.jpg"] {
            let err = MediaFormat::from_filename(name, MediaCategory::Image).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedMediaType(_)), "{}", name);
        }
        let err = MediaFormat::from_filename("clip.webm", MediaCategory::Video).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(MediaFormat::from_filename("photo.PNG", MediaCategory::Image).is_err());
        assert!(MediaFormat::from_filename("clip.MP4", MediaCategory::Video).is_err());
    }

    #[test]
    fn uses_last_dot_for_extension() {
        let f = MediaFormat::from_filename("archive.tar.png", MediaCategory::Image).unwrap();
        assert_eq!(f.extension, "png");
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(MediaFormat::from_filename("noext", MediaCategory::Video).is_err());
        assert!(MediaFormat::from_filename("", MediaCategory::Video).is_err());
    }
}
