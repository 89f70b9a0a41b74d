//! Turning command-line paths into image handles

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::IMAGE_EXTENSIONS;
use crate::error::InputError;
use crate::model::ImageRef;

/// Check whether a path has one of the recognised image extensions
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Expand files and directories into an ordered list of images.
///
/// Files keep their command-line order. A directory contributes its image
/// files sorted by name; subdirectories are not descended into. Paths that are
/// not images are skipped.
pub fn collect_images(paths: &[PathBuf]) -> Result<Vec<ImageRef>, InputError> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            images.extend(images_in_dir(path)?);
        } else if path.is_file() {
            if is_image_path(path) {
                images.push(ImageRef::from_path(path));
            } else {
                log::warn!("Skipping {}: not an image file", path.display());
            }
        } else {
            return Err(InputError::NotFound(path.clone()));
        }
    }

    Ok(images)
}

fn images_in_dir(dir: &Path) -> Result<Vec<ImageRef>, InputError> {
    let read_err = |source| InputError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        if is_image_path(&path) {
            files.push(path);
        } else {
            log::debug!("Ignoring non-image file {}", path.display());
        }
    }

    files.sort();
    log::info!("Found {} images in {}", files.len(), dir.display());

    Ok(files.iter().map(|p| ImageRef::from_path(p)).collect())
}
