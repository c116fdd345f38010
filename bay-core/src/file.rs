use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A file the scaffolder knows how to place and render.
pub trait GeneratedFile {
    /// Get the file path under the given base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, creating parent directories as needed
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, self.rules(), || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    rules: FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    if rules.skip_existing && path.exists() {
        return Ok(WriteResult::Skipped);
    }
    write_file(path, &content())?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    /// Leave an existing file untouched instead of replacing it.
    pub skip_existing: bool,
}

impl FileRules {
    /// Rules for scaffolded sources the user is expected to edit.
    pub fn create_once() -> Self {
        Self {
            skip_existing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Stub;

    impl GeneratedFile for Stub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("src").join("stub.js")
        }

        fn rules(&self) -> FileRules {
            FileRules::create_once()
        }

        fn render(&self) -> String {
            "export const stub = true;\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        assert_eq!(Stub.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Stub.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("src/stub.js")).unwrap(),
            "export const stub = true;\n"
        );
    }

    #[test]
    fn test_rules_without_skip_replace_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.js");
        fs::write(&path, "old").unwrap();

        let rules = FileRules {
            skip_existing: false,
        };
        let result = write_with_rules(&path, rules, || "new".to_string()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
