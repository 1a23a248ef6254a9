//! File discovery for dropped folders

use crate::{ImportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported media file extensions. `m4p` is the Apple Music download
/// format the catalog was built around; the rest are the common set.
const SUPPORTED_EXTENSIONS: &[&str] = &["m4p", "m4a", "mp3", "flac", "ogg", "wav", "aac", "opus"];

/// Scanner for media files under a dropped folder.
///
/// Files come back in directory-walk order, deliberately unsorted: that
/// order is the processing order of the batch, and callers who need a
/// deterministic resume point track the last imported item themselves.
#[derive(Default)]
pub struct FolderScanner {
    /// Whether to follow symbolic links
    follow_links: bool,
}

impl FolderScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Recursively collect every supported media file under `path`
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(ImportError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut media_files = Vec::new();
        let walker = WalkDir::new(path).follow_links(self.follow_links);

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if is_media_file(path) {
                media_files.push(path.to_path_buf());
            }
        }

        Ok(media_files)
    }
}

/// Check if a file has a supported media extension
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file(Path::new("song.m4p")));
        assert!(is_media_file(Path::new("song.M4P")));
        assert!(is_media_file(Path::new("song.mp3")));
        assert!(is_media_file(Path::new("song.flac")));
        assert!(!is_media_file(Path::new("liner-notes.txt")));
        assert!(!is_media_file(Path::new("song")));
    }

    #[test]
    fn test_scan_directory_recurses() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();

        fs::write(base.join("song1.m4p"), b"fake m4p").unwrap();
        fs::write(base.join("readme.txt"), b"not media").unwrap();

        let album = base.join("Artist").join("Album");
        fs::create_dir_all(&album).unwrap();
        fs::write(album.join("song2.m4p"), b"fake m4p").unwrap();

        let scanner = FolderScanner::new();
        let files = scanner.scan_directory(base).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("song1.m4p")));
        assert!(files.iter().any(|p| p.ends_with("Artist/Album/song2.m4p")));
        assert!(!files.iter().any(|p| p.ends_with("readme.txt")));
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        let scanner = FolderScanner::new();
        let result = scanner.scan_directory(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_file_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("song.m4p");
        fs::write(&file, b"fake").unwrap();

        let scanner = FolderScanner::new();
        assert!(matches!(
            scanner.scan_directory(&file),
            Err(ImportError::InvalidPath(_))
        ));
    }
}
