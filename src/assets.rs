/// Gallery asset pipeline
///
/// Project screenshots live on disk under a `screenshots/` directory next to
/// the working directory or the executable. At startup a background task
/// decodes each referenced image and downscales it to a gallery tile; the
/// full-resolution image is handed to the toolkit as a path handle and
/// decoded lazily when the lightbox first shows it.
///
/// Missing or undecodable assets are skipped with a warning. The gallery
/// renders a placeholder tile for anything that never loads.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task;
use walkdir::WalkDir;

/// Longest edge of a gallery tile, in pixels.
pub const TILE_SIZE: u32 = 384;

/// Extensions the screenshots scan treats as images.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Why a single asset failed to load.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A loaded gallery entry: the downscaled tile shown on the project card
/// and the full-resolution handle the lightbox displays.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub tile: Handle,
    pub full: Handle,
}

/// Find the directory that contains `screenshots/`.
///
/// Checks the working directory first, then the directory holding the
/// executable. Returns None when neither has one; the page still renders,
/// with placeholder tiles.
pub fn find_asset_root() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }

    candidates
        .into_iter()
        .find(|dir| dir.join("screenshots").is_dir())
}

/// Count the image files under `<root>/screenshots`, for the startup report.
pub fn scan_screenshots(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root.join("screenshots"))
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_image_file(path))
        .collect()
}

fn is_image_file(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Load every referenced gallery asset in the background.
///
/// Decoding and resizing are CPU-bound, so the whole batch runs on a
/// blocking worker, mirroring how the editor offloads its thumbnail work.
/// Returns the assets that loaded; everything else is logged and skipped.
pub async fn load_gallery(
    root: Option<PathBuf>,
    references: Vec<String>,
) -> Vec<(String, GalleryImage)> {
    let Some(root) = root else {
        eprintln!("⚠️  No screenshots directory found, gallery tiles will show placeholders");
        return Vec::new();
    };

    let result = task::spawn_blocking(move || {
        let mut loaded = Vec::new();

        for reference in references {
            let path = root.join(&reference);

            if !path.exists() {
                eprintln!("⚠️  Missing asset: {}", path.display());
                continue;
            }

            match load_tile(&path) {
                Ok(tile) => {
                    let full = Handle::from_path(&path);
                    loaded.push((reference, GalleryImage { tile, full }));
                }
                Err(e) => {
                    eprintln!("⚠️  Skipping asset: {}", e);
                }
            }
        }

        loaded
    })
    .await;

    match result {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("⚠️  Gallery load task failed: {}", e);
            Vec::new()
        }
    }
}

/// Read, decode, and downscale one asset into an in-memory tile handle.
fn load_tile(path: &Path) -> Result<Handle, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let tile = downscale(decoded);
    let (width, height) = tile.dimensions();

    Ok(Handle::from_rgba(width, height, tile.into_raw()))
}

/// Fit an image inside the tile square, preserving aspect ratio.
fn downscale(decoded: image::DynamicImage) -> image::RgbaImage {
    decoded
        .resize(TILE_SIZE, TILE_SIZE, FilterType::Lanczos3)
        .to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn test_image_extension_filter() {
        assert!(is_image_file(Path::new("screenshots/ml1.jpeg")));
        assert!(is_image_file(Path::new("screenshots/pse-1_result.PNG")));
        assert!(!is_image_file(Path::new("screenshots/notes.txt")));
        assert!(!is_image_file(Path::new("screenshots/README")));
    }

    #[test]
    fn test_downscale_fits_tile_square() {
        let wide = DynamicImage::ImageRgba8(RgbaImage::new(1000, 800));
        let tile = downscale(wide);

        let (width, height) = tile.dimensions();
        assert_eq!(width, TILE_SIZE);
        assert!(height <= TILE_SIZE);
    }

    #[test]
    fn test_scan_finds_only_images() {
        let dir = tempfile::tempdir().unwrap();
        let shots = dir.path().join("screenshots");
        std::fs::create_dir_all(&shots).unwrap();

        RgbaImage::new(4, 4).save(shots.join("a.png")).unwrap();
        std::fs::write(shots.join("notes.txt"), b"not an image").unwrap();

        let found = scan_screenshots(dir.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.png"));
    }

    #[tokio::test]
    async fn test_load_gallery_skips_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        let shots = dir.path().join("screenshots");
        std::fs::create_dir_all(&shots).unwrap();

        RgbaImage::new(16, 16).save(shots.join("real.png")).unwrap();

        let loaded = load_gallery(
            Some(dir.path().to_path_buf()),
            vec![
                "screenshots/real.png".to_string(),
                "screenshots/missing.png".to_string(),
            ],
        )
        .await;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, "screenshots/real.png");
    }

    #[tokio::test]
    async fn test_load_gallery_without_root_is_empty() {
        let loaded = load_gallery(None, vec!["screenshots/x.png".to_string()]).await;
        assert!(loaded.is_empty());
    }
}
