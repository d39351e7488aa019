//! Walkdir-based sequential directory walker.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use weldfile_core::{CollectConfig, CollectWarning};

/// Enumerate every file under `root`, depth-first, in traversal order.
///
/// Directories are descended into but not yielded. Walk-level failures
/// (unreadable directory, entry vanished mid-walk) become warnings and the
/// walk continues; a root that is missing or not a directory contributes no
/// files and a single [`WarningKind::MissingRoot`] warning.
///
/// [`WarningKind::MissingRoot`]: weldfile_core::WarningKind::MissingRoot
pub fn walk_root(
    root: &Path,
    config: &CollectConfig,
    warnings: &mut Vec<CollectWarning>,
) -> Vec<PathBuf> {
    if !root.is_dir() {
        warnings.push(CollectWarning::missing_root(root));
        return Vec::new();
    }

    let mut walker = WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

    if config.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warnings.push(CollectWarning::walk_error(path, &err.to_string()));
            }
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use weldfile_core::WarningKind;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), "alpha").unwrap();
        fs::write(root.join("z.txt"), "zeta").unwrap();
        fs::write(root.join("sub/b.txt"), "beta").unwrap();

        temp
    }

    #[test]
    fn test_walk_yields_files_only() {
        let temp = create_test_tree();
        let config = CollectConfig::new(vec![temp.path().to_path_buf()], "out.txt");
        let mut warnings = Vec::new();

        let files = walk_root(temp.path(), &config, &mut warnings);

        assert_eq!(files.len(), 3);
        assert!(warnings.is_empty());
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_walk_sorted_order() {
        let temp = create_test_tree();
        let config = CollectConfig::new(vec![temp.path().to_path_buf()], "out.txt");
        let mut warnings = Vec::new();

        let files = walk_root(temp.path(), &config, &mut warnings);

        // Sorted by name, depth-first: a.txt, sub/b.txt, z.txt
        assert_eq!(files[0], temp.path().join("a.txt"));
        assert_eq!(files[1], temp.path().join("sub/b.txt"));
        assert_eq!(files[2], temp.path().join("z.txt"));
    }

    #[test]
    fn test_walk_max_depth() {
        let temp = create_test_tree();
        let config = CollectConfig::builder()
            .roots(vec![temp.path().to_path_buf()])
            .max_depth(Some(1u32))
            .build()
            .unwrap();
        let mut warnings = Vec::new();

        let files = walk_root(temp.path(), &config, &mut warnings);

        // sub/b.txt is below the depth limit
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.parent() == Some(temp.path())));
    }

    #[test]
    fn test_walk_missing_root() {
        let config = CollectConfig::default();
        let mut warnings = Vec::new();

        let files = walk_root(Path::new("/no/such/root"), &config, &mut warnings);

        assert!(files.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MissingRoot);
    }

    #[test]
    fn test_walk_root_that_is_a_file() {
        let temp = create_test_tree();
        let config = CollectConfig::default();
        let mut warnings = Vec::new();

        let files = walk_root(&temp.path().join("a.txt"), &config, &mut warnings);

        assert!(files.is_empty());
        assert_eq!(warnings[0].kind, WarningKind::MissingRoot);
    }
}
