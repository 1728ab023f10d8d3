use std::fs;
use std::path::Path;

use crate::error::CatalogError;

/// Write the finished document, creating the parent directory if needed.
pub fn write_document(path: &Path, document: &str) -> Result<(), CatalogError> {
    let write_err = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, document).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("salon_catalog_{}_{}", std::process::id(), name))
    }

    #[test]
    fn creates_missing_parent_and_writes_utf8() {
        let dir = scratch("nested");
        let path = dir.join("assets").join("services.json");
        write_document(&path, "{\"Beauté\": {}}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"Beauté\": {}}");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unwritable_target_is_a_write_error() {
        let dir = scratch("blocked");
        fs::create_dir_all(&dir).unwrap();
        // the target path is an existing directory
        let err = write_document(&dir, "{}").unwrap_err();
        assert!(matches!(err, CatalogError::Write { .. }));
        fs::remove_dir_all(dir).unwrap();
    }
}
