use std::path::{Path, PathBuf};

/// `<dir>/<slug>.front.png` and `<dir>/<slug>.rear.png` (slug lowercased)
pub fn elevation_image_paths(dir: &Path, slug: &str) -> (PathBuf, PathBuf) {
    let slug = slug.to_lowercase();
    (
        dir.join(format!("{}.front.png", slug)),
        dir.join(format!("{}.rear.png", slug)),
    )
}

/// Read-only existence check for front/rear elevation images. A missing
/// directory simply reports both as absent.
pub fn find_elevation_images(dir: &Path, slug: &str) -> (bool, bool) {
    let (front, rear) = elevation_image_paths(dir, slug);
    (front.is_file(), rear.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cisco-x.rear.png"), b"").unwrap();
        assert_eq!(find_elevation_images(dir.path(), "cisco-x"), (false, true));
        assert_eq!(find_elevation_images(dir.path(), "CISCO-X"), (false, true));
    }

    #[test]
    fn directory_named_like_image_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("cisco-x.front.png")).unwrap();
        assert_eq!(find_elevation_images(dir.path(), "cisco-x"), (false, false));
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let (front, rear) = find_elevation_images(Path::new("/nonexistent/elevation"), "cisco-x");
        assert!(!front && !rear);
    }
}
