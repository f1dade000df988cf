use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Consulted when PATH is unset or empty.
const DEFAULT_PATH: &str = "/bin:/usr/bin";

/// Locate `name` the way `which` would: return the first executable,
/// non-directory match across the PATH directories, or `None`.
///
/// A name containing a path separator is treated as a literal path and
/// checked directly; the path list is never consulted in that case.
pub fn find_in(name: &str, path_var: Option<&str>) -> Option<PathBuf> {
    if name.chars().any(std::path::is_separator) {
        let candidate = Path::new(name);
        if is_executable_file(candidate) {
            return Some(candidate.to_path_buf());
        }
        return None;
    }

    let path_var = match path_var {
        Some(p) if !p.is_empty() => p,
        _ => DEFAULT_PATH,
    };

    for dir in search_dirs(path_var) {
        let candidate = dir.join(name);
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Split the path list, dropping repeated directories. The comparison is
/// case-normalized so spellings that collide on a case-insensitive
/// filesystem are probed once. First-seen order is preserved.
fn search_dirs(path_var: &str) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    std::env::split_paths(path_var)
        .filter(|dir| seen.insert(dir.to_string_lossy().to_lowercase()))
        .collect()
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(unix)]
    use std::fs;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn path_list(dirs: &[&Path]) -> String {
        std::env::join_paths(dirs)
            .unwrap()
            .into_string()
            .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn dedup_is_case_normalized_and_order_preserving() {
        let dirs = search_dirs("/a:/A:/b:/a");
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_in_later_directory() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let expected = make_executable(b.path(), "foo");

        let path_var = path_list(&[a.path(), b.path()]);
        assert_eq!(find_in("foo", Some(&path_var)), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn earlier_directory_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let expected = make_executable(a.path(), "foo");
        make_executable(b.path(), "foo");

        let path_var = path_list(&[a.path(), b.path()]);
        assert_eq!(find_in("foo", Some(&path_var)), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_file() {
        use std::os::unix::fs::PermissionsExt;
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let plain = a.path().join("foo");
        fs::write(&plain, "data").unwrap();
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();
        let expected = make_executable(b.path(), "foo");

        let path_var = path_list(&[a.path(), b.path()]);
        assert_eq!(find_in("foo", Some(&path_var)), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn skips_directory_with_matching_name() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::create_dir(a.path().join("foo")).unwrap();
        let expected = make_executable(b.path(), "foo");

        let path_var = path_list(&[a.path(), b.path()]);
        assert_eq!(find_in("foo", Some(&path_var)), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn literal_path_bypasses_search() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let target = make_executable(a.path(), "foo");

        // Absolute candidate hits directly even with an unrelated path list.
        let literal = target.to_string_lossy().into_owned();
        assert_eq!(find_in(&literal, Some("/nonexistent")), Some(target));

        // A literal miss stays a miss even when the path list could resolve it.
        make_executable(b.path(), "foo");
        let missing = a.path().join("bar").to_string_lossy().into_owned();
        let path_var = path_list(&[b.path()]);
        assert_eq!(find_in(&missing, Some(&path_var)), None);
    }

    #[cfg(unix)]
    #[test]
    fn literal_path_to_directory_is_a_miss() {
        let a = tempfile::tempdir().unwrap();
        let literal = a.path().to_string_lossy().into_owned();
        assert_eq!(find_in(&literal, Some("/nonexistent")), None);
    }

    #[test]
    fn absent_everywhere_returns_none() {
        let a = tempfile::tempdir().unwrap();
        let path_var = path_list(&[a.path()]);
        assert_eq!(find_in("no-such-command-xyz", Some(&path_var)), None);
    }

    #[test]
    fn empty_path_var_falls_back_to_default() {
        // The default list is consulted instead of the empty variable; a
        // name that cannot exist there comes back absent, not an error.
        assert_eq!(find_in("no-such-command-xyz", Some("")), None);
        assert_eq!(find_in("no-such-command-xyz", None), None);
    }
}
