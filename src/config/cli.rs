use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested/output");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        let written = storage.write_file("primes.csv", b"index,prime\n").unwrap();

        assert!(written.ends_with("primes.csv"));
        assert_eq!(std::fs::read(base.join("primes.csv")).unwrap(), b"index,prime\n");
    }
}
