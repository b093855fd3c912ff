use std::path::Path;

use crate::error::CodegenError;

/// A fully assembled output artifact. The content is complete before
/// anything touches the filesystem, so an aborted run never leaves a
/// partial file behind.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Overwrite the artifact under `output_dir`.
    pub fn write_to_disk(&self, output_dir: &Path) -> Result<(), CodegenError> {
        let full_path = output_dir.join(&self.path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, &self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile::new("Enums.hpp", "#pragma once\n");
        file.write_to_disk(dir.path()).unwrap();

        let replacement = GeneratedFile::new("Enums.hpp", "#pragma once\n// v2\n");
        replacement.write_to_disk(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("Enums.hpp")).unwrap();
        assert_eq!(content, "#pragma once\n// v2\n");
    }
}
