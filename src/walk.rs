//! Source discovery: every `.cs` file under a root, minus generated code.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Suffixes of generated files that are never annotated (matched case-insensitively).
const GENERATED_SUFFIXES: &[&str] = &[".designer.cs", ".g.cs", ".g.i.cs"];

/// True for designer and source-generator output.
pub fn is_generated(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    GENERATED_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Recursively collect candidate source files under `root`, sorted.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("not a directory: {}", root.display());
    }

    let pattern = format!("{}/**/*.cs", glob::Pattern::escape(&root.to_string_lossy()));
    let entries =
        glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() && !is_generated(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry: {}", e),
        }
    }
    // Sort for deterministic processing order
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn generated_suffixes_ignore_case() {
        assert!(is_generated(Path::new("Views/Main.Designer.cs")));
        assert!(is_generated(Path::new("obj/App.g.i.cs")));
        assert!(is_generated(Path::new("obj/App.G.CS")));
        assert!(!is_generated(Path::new("Models/Config.cs")));
    }

    #[test]
    fn discovers_nested_sources() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("Root.cs"), "").unwrap();
        fs::write(dir.path().join("a/b/Deep.cs"), "").unwrap();
        fs::write(dir.path().join("a/Form.Designer.cs"), "").unwrap();
        fs::write(dir.path().join("a/notes.txt"), "").unwrap();

        let found = discover(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Root.cs".to_string()));
        assert!(names.contains(&"Deep.cs".to_string()));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(discover(&dir.path().join("nope")).is_err());
    }
}
