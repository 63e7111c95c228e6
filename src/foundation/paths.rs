use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem.
///
/// Drops `.` components and folds `name/..` pairs. Leading `..` segments of a relative path
/// are kept, and `..` directly under the root is discarded. An empty result becomes `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    out.push(Component::ParentDir)
                }
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/paths.rs"]
mod tests;
