use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail when writing `output` would clobber `input`.
pub fn refuse_overwrite(output: &Path, input: &Path) -> Result<()> {
    if resolve(output)? == resolve(input)? {
        bail!(
            "refusing to overwrite source file {} with converted output",
            input.display()
        );
    }
    Ok(())
}

fn resolve(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(real) => Ok(real),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Not on disk yet: `..` segments stay unresolved.
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Ok(cwd.join(path))
        }
        Err(err) => Err(err).with_context(|| format!("failed to resolve {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::refuse_overwrite;

    #[test]
    fn rejects_same_file_through_relative_segments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("fw.conf");
        fs::write(&input, "config {\n}\n").expect("write");
        let alias = dir.path().join(".").join("fw.conf");

        assert!(refuse_overwrite(&alias, &input).is_err());
    }

    #[test]
    fn allows_new_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("fw.conf");
        fs::write(&input, "config {\n}\n").expect("write");

        assert!(refuse_overwrite(&dir.path().join("fw.set"), &input).is_ok());
    }

    #[test]
    fn missing_paths_compare_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("fw.conf");

        assert!(refuse_overwrite(&input, &input).is_err());
        assert!(refuse_overwrite(&dir.path().join("fw.set"), &input).is_ok());
    }
}
