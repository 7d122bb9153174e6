//! Résumé attachment gate
//!
//! Both the picker path (typing a path and pressing Enter) and the drop path
//! (a file path pasted into the terminal) build an [`AttachmentCandidate`] and
//! pass it through [`admit`], so both enforce the same limits.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted résumé, 5 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted résumé formats
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Raw file descriptor supplied by the picker or a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: Option<PathBuf>,
}

impl AttachmentCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: None,
        }
    }

    /// Describe a file on disk; the declared type is guessed from its extension
    pub fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        let metadata = std::fs::metadata(path).map_err(|source| AttachmentError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(AttachmentError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(name, metadata.len(), mime_type)
        })
    }
}

/// A file that passed the gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Attachment {
    /// Size rendered for humans, e.g. `1.4 MB`
    pub fn display_size(&self) -> String {
        const KIB: f64 = 1024.0;
        let size = self.size as f64;
        if size < KIB {
            format!("{} B", self.size)
        } else if size < KIB * KIB {
            format!("{:.1} KB", size / KIB)
        } else {
            format!("{:.1} MB", size / (KIB * KIB))
        }
    }
}

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("File is too large (max 5 MB)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Allowed formats: .pdf, .doc, .docx")]
    UnsupportedFileType { mime_type: String },

    #[error("Cannot read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),
}

/// Check a candidate against the size and type limits
pub fn admit(candidate: AttachmentCandidate) -> Result<Attachment, AttachmentError> {
    if candidate.size > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::FileTooLarge {
            size: candidate.size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    if !ACCEPTED_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(AttachmentError::UnsupportedFileType {
            mime_type: candidate.mime_type,
        });
    }

    Ok(Attachment {
        name: candidate.name,
        size: candidate.size,
        mime_type: candidate.mime_type,
        path: candidate.path,
    })
}

/// Interpret pasted text as a dropped file path.
///
/// Terminals deliver drops as a paste of the (possibly quoted or
/// `file://`-prefixed) path. Returns `None` unless it names an existing file.
pub fn dropped_path(pasted: &str) -> Option<PathBuf> {
    let trimmed = pasted.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let raw = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let path = PathBuf::from(raw.replace("\\ ", " "));
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PDF: &str = "application/pdf";
    const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    fn temp_file(name: &str, bytes: usize) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("careers-tui-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![b'x'; bytes]).unwrap();
        path
    }

    fn remove_temp(path: &Path) {
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let attachment = admit(AttachmentCandidate::new("cv.pdf", MAX_ATTACHMENT_BYTES, PDF)).unwrap();
        assert_eq!(attachment.size, MAX_ATTACHMENT_BYTES);
    }

    #[test]
    fn test_one_byte_over_limit_is_rejected() {
        let result = admit(AttachmentCandidate::new("cv.pdf", MAX_ATTACHMENT_BYTES + 1, PDF));
        assert!(matches!(
            result,
            Err(AttachmentError::FileTooLarge { size, .. }) if size == MAX_ATTACHMENT_BYTES + 1
        ));
    }

    #[test]
    fn test_accepted_types() {
        for mime in ACCEPTED_MIME_TYPES {
            assert!(admit(AttachmentCandidate::new("cv", 10, mime)).is_ok(), "{mime}");
        }
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let result = admit(AttachmentCandidate::new("cv.png", 10, "image/png"));
        assert!(matches!(
            result,
            Err(AttachmentError::UnsupportedFileType { mime_type }) if mime_type == "image/png"
        ));
    }

    #[test]
    fn test_size_checked_before_type() {
        let result = admit(AttachmentCandidate::new("huge.png", MAX_ATTACHMENT_BYTES * 2, "image/png"));
        assert!(matches!(result, Err(AttachmentError::FileTooLarge { .. })));
    }

    #[test]
    fn test_error_messages() {
        let too_large = AttachmentError::FileTooLarge {
            size: 1,
            limit: MAX_ATTACHMENT_BYTES,
        };
        assert_eq!(too_large.to_string(), "File is too large (max 5 MB)");
        let wrong_type = AttachmentError::UnsupportedFileType {
            mime_type: "text/plain".to_string(),
        };
        assert_eq!(wrong_type.to_string(), "Allowed formats: .pdf, .doc, .docx");
    }

    #[test]
    fn test_from_path_guesses_type() {
        let path = temp_file("resume.docx", 64);
        let candidate = AttachmentCandidate::from_path(&path).unwrap();
        assert_eq!(candidate.name, "resume.docx");
        assert_eq!(candidate.size, 64);
        assert_eq!(candidate.mime_type, DOCX);
        assert_eq!(candidate.path.as_deref(), Some(path.as_path()));
        remove_temp(&path);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = AttachmentCandidate::from_path(Path::new("/definitely/not/here.pdf"));
        assert!(matches!(result, Err(AttachmentError::Unreadable { .. })));
    }

    #[test]
    fn test_from_path_directory() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            AttachmentCandidate::from_path(&dir),
            Err(AttachmentError::NotAFile(_))
        ));
    }

    #[test]
    fn test_dropped_path_variants() {
        let path = temp_file("cv.pdf", 1);
        let plain = path.display().to_string();
        assert_eq!(dropped_path(&plain), Some(path.clone()));
        assert_eq!(dropped_path(&format!("'{plain}'")), Some(path.clone()));
        assert_eq!(dropped_path(&format!("file://{plain}\n")), Some(path.clone()));
        assert_eq!(dropped_path("just some text"), None);
        assert_eq!(dropped_path(""), None);

        remove_temp(&path);
        assert_eq!(dropped_path(&plain), None);
    }

    #[test]
    fn test_display_size() {
        let mut attachment = admit(AttachmentCandidate::new("cv.pdf", 512, PDF)).unwrap();
        assert_eq!(attachment.display_size(), "512 B");
        attachment.size = 2048;
        assert_eq!(attachment.display_size(), "2.0 KB");
        attachment.size = MAX_ATTACHMENT_BYTES;
        assert_eq!(attachment.display_size(), "5.0 MB");
    }
}
