use std::path::Path;

/// Return true if the path is a file whose name ends with one of `suffixes`
pub fn has_accepted_suffix(path: &Path, suffixes: &[&str]) -> bool {
    path.is_file()
        && path
            .file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix)))
}
