use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Returns true when the file name ends with one of the supported suffixes.
///
/// The comparison runs on the raw name bytes, so names that are not valid
/// UTF-8 still match.
pub fn has_supported_extension(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    SUPPORTED_IMAGE_EXTENSIONS
        .iter()
        .any(|extension| bytes.ends_with(extension.as_bytes()))
}

/// Lists the names of the top-level entries of `dir` that are not directories.
pub fn list_files(dir: &Path) -> Result<Vec<OsString>> {
    let mut files: Vec<OsString> = fs::read_dir(dir)
        .map_err(|_| AppError::FolderUnavailable(dir.to_path_buf()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.path().is_dir())
        .map(|entry| entry.file_name())
        .collect();

    files.sort();
    Ok(files)
}

/// Validates a folder and returns the names of its image files.
///
/// Fails with `EmptyFolder` when the folder holds no files at all and with
/// `NoValidExtensions` when none of its files has a supported suffix.
pub fn validate_folder(dir: &Path) -> Result<Vec<OsString>> {
    if !dir.is_dir() {
        return Err(AppError::FolderUnavailable(dir.to_path_buf()));
    }

    let files = list_files(dir)?;
    if files.is_empty() {
        return Err(AppError::EmptyFolder(dir.to_path_buf()));
    }

    let image_files: Vec<OsString> = files
        .into_iter()
        .filter(|name| has_supported_extension(name))
        .collect();

    if image_files.is_empty() {
        return Err(AppError::NoValidExtensions(dir.to_path_buf()));
    }

    Ok(image_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(has_supported_extension(OsStr::new("photo.jpg")));
        assert!(has_supported_extension(OsStr::new("photo.webp")));
        assert!(!has_supported_extension(OsStr::new("photo.JPG")));
        assert!(!has_supported_extension(OsStr::new("photo.tiff")));
        assert!(!has_supported_extension(OsStr::new("png")));
    }

    #[test]
    fn test_validate_filters_to_images() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "text").unwrap();
        fs::write(dir.path().join("b.png"), "not really").unwrap();

        let files = validate_folder(dir.path()).unwrap();
        assert_eq!(files, vec![OsString::from("b.png")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.png");
        image::RgbImage::new(4, 4)
            .save_with_format(dir.path().join(name), image::ImageFormat::Png)
            .unwrap();

        let files = validate_folder(dir.path()).unwrap();
        assert_eq!(files, vec![name.to_os_string()]);
    }

    #[test]
    fn test_validate_empty_folder() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let err = validate_folder(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::EmptyFolder(_)));
    }

    #[test]
    fn test_validate_no_valid_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "text").unwrap();
        fs::write(dir.path().join("photo.PNG"), "upper case").unwrap();

        let err = validate_folder(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::NoValidExtensions(_)));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("album.png")).unwrap();
        fs::write(dir.path().join("c.gif"), "gif").unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files, vec![OsString::from("c.gif")]);
    }

    #[test]
    fn test_missing_folder() {
        let dir = tempdir().unwrap();
        let err = validate_folder(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, AppError::FolderUnavailable(_)));
    }
}
