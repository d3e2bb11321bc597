use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Load a JSON document, or the default value when the file does not exist.
pub fn load_or_default<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no saved state, starting empty");
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded state");
    Ok(value)
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MealError;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded: Vec<String> = load_or_default(dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("names.json");

        save_json(&path, &vec!["Breakfast Bowl".to_string()]).unwrap();
        let loaded: Vec<String> = load_or_default(&path).unwrap();
        assert_eq!(loaded, vec!["Breakfast Bowl".to_string()]);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let result: Result<Vec<String>> = load_or_default(file.path());
        assert!(matches!(result, Err(MealError::Json(_))));
    }
}
