use std::path::{Component, Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    BadPath,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolvedStatic {
    File(PathBuf),
    Directory(PathBuf),
    /// Directory requested without its trailing slash. Holds the corrected path.
    Redirect(String),
}

/// Map a request path (no query string) onto a file or directory below `root`.
pub fn resolve_static_path(
    root: &Path,
    request_path: &str,
    index_files: &[String],
) -> Result<ResolvedStatic, ResolveError> {
    if !request_path.starts_with('/') {
        return Err(ResolveError::BadPath);
    }

    // Percent-decode ONCE
    let decoded = percent_encoding::percent_decode_str(request_path)
        .decode_utf8()
        .map_err(|_| ResolveError::BadPath)?;

    if decoded.contains('\0') {
        return Err(ResolveError::BadPath);
    }

    let wants_directory = decoded.ends_with('/');
    let relative_path = PathBuf::from(decoded.trim_start_matches('/'));

    // Path component validation (no traversal, no absolute paths)
    for component in relative_path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            // ParentDir, RootDir, Prefix (Windows)
            _ => return Err(ResolveError::Forbidden),
        }
    }

    let root_canon = root.canonicalize().map_err(|_| ResolveError::Forbidden)?;

    let target = root_canon
        .join(&relative_path)
        .canonicalize()
        .map_err(|_| ResolveError::NotFound)?;

    // Symlinks may still point outside the root.
    if !target.starts_with(&root_canon) {
        return Err(ResolveError::Forbidden);
    }

    if target.is_dir() {
        if !wants_directory {
            return Ok(ResolvedStatic::Redirect(format!("{request_path}/")));
        }

        for name in index_files {
            let Ok(index_path) = target.join(name).canonicalize() else {
                continue;
            };
            if !index_path.starts_with(&root_canon) {
                return Err(ResolveError::Forbidden);
            }
            if index_path.is_file() {
                return Ok(ResolvedStatic::File(index_path));
            }
        }

        return Ok(ResolvedStatic::Directory(target));
    }

    // "/page.html/" names a directory that does not exist.
    if wants_directory || !target.is_file() {
        return Err(ResolveError::NotFound);
    }

    Ok(ResolvedStatic::File(target))
}
