use std::path::{Path, PathBuf};

use crate::error::{EncodeError, InputKind};

/// Container extension of generated videos
pub const CONTAINER: &str = "mp4";

/// `<image dir>/<image stem>.mp4`
pub fn default_output(image: &Path) -> PathBuf {
    let stem = image.file_stem().unwrap_or_default();
    let mut filename = stem.to_os_string();
    filename.push(".");
    filename.push(CONTAINER);
    match image.parent() {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

pub fn check_input(kind: InputKind, path: &Path) -> Result<(), EncodeError> {
    if path.as_os_str().is_empty() || !path.exists() {
        tracing::debug!("{} input missing: {}", kind, path.display());
        return Err(EncodeError::MissingInput {
            kind,
            path: path.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_keeps_image_dir_and_stem() {
        assert_eq!(
            default_output(Path::new("/music/covers/photo.png")),
            PathBuf::from("/music/covers/photo.mp4")
        );
        assert_eq!(
            default_output(Path::new("covers/album.art.jpg")),
            PathBuf::from("covers/album.art.mp4")
        );
    }

    #[test]
    fn output_of_bare_filename_is_bare() {
        assert_eq!(default_output(Path::new("photo.png")), PathBuf::from("photo.mp4"));
        assert_eq!(default_output(Path::new("cover")), PathBuf::from("cover.mp4"));
    }

    #[test]
    fn check_input_rejects_missing_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("photo.png");
        std::fs::write(&present, b"png").unwrap();

        assert!(check_input(InputKind::Image, &present).is_ok());

        let missing = dir.path().join("nope.png");
        match check_input(InputKind::Image, &missing) {
            Err(EncodeError::MissingInput { kind, path }) => {
                assert_eq!(kind, InputKind::Image);
                assert_eq!(path, missing);
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            check_input(InputKind::Audio, Path::new("")),
            Err(EncodeError::MissingInput { kind: InputKind::Audio, .. })
        ));
    }
}
