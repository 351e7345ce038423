use std::path::{Path, PathBuf};

pub(super) fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    for candidate in candidates {
        let p = candidate.as_ref();
        if p.exists() {
            return Some(p.to_path_buf());
        }
    }
    None
}
