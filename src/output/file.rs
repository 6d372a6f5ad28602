//! Output file sink

use crate::Result;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// Write the generated stream to `path`
///
/// Without `overwrite` an existing file is left untouched and an error is
/// returned. The existence check and the create are one `create_new` open, so
/// a file appearing between check and write is still refused.
pub fn write_output(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    let file = if overwrite {
        File::create(path)
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)
    };

    let file = match file {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!(
                "refusing to overwrite existing file: {}\nuse --overwrite to replace it",
                path.display()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create output file: {}", path.display()));
        }
    };

    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.bin");

        write_output(&path, &[1, 2, 3], false).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.bin");
        std::fs::write(&path, b"keep").unwrap();

        let err = write_output(&path, &[9, 9], false).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
        assert_eq!(std::fs::read(&path).unwrap(), b"keep");
    }

    #[test]
    fn test_overwrite_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.bin");
        std::fs::write(&path, b"old contents").unwrap();

        write_output(&path, &[7], true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![7]);
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("out.bin");

        let err = write_output(&path, &[1], false).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
