//! File system port
//!
//! The pipeline touches exactly two files: one read, one write. Both go
//! through [`FileSystem`] so tests can run against [`MockFileSystem`].

use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

/// Abstract file system interface
pub trait FileSystem {
    /// Read the whole file as raw bytes
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or fully replace `path` with `content`.
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Local disk implementation
///
/// Writes go to a temp file next to the target and are renamed over it, so a
/// failed run never leaves a truncated file behind. A symlinked target is
/// resolved first and the file it points at is replaced. An existing file
/// keeps its permissions; a new one gets `0o666` minus the umask.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let (target, existing) = resolve_target(path)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir)?;
        if let Some(permissions) = existing {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Follow symlinks to the file that actually gets replaced, along with its
/// current permissions. A missing file resolves to `path` itself.
fn resolve_target(path: &Path) -> io::Result<(PathBuf, Option<Permissions>)> {
    match std::fs::canonicalize(path) {
        Ok(target) => {
            let permissions = std::fs::metadata(&target)?.permissions();
            Ok((target, Some(permissions)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((path.to_path_buf(), None)),
        Err(e) => Err(e),
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, Vec<u8>>>,
    >,
    /// Make every write fail with `PermissionDenied`
    pub fail_writes: bool,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.as_bytes().to_vec());
        self
    }

    pub fn read_string(&self, path: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        files
            .get(Path::new(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }
}
