//! The path-scoped repository and its filesystem operations.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::RepositoryError;
use crate::permissions::Permissions;

/// A filesystem accessor bound to a root directory.
///
/// Every name passed to a method is resolved relative to the root before the
/// call is forwarded to the host filesystem. The value is immutable after
/// construction, holds no OS resource, and needs no close step. The root is
/// validated once, at construction; if it vanishes later, calls fail with an
/// ordinary I/O error.
///
/// All calls are synchronous and blocking. The repository provides no
/// locking: concurrent access to the same scoped path gets whatever the host
/// filesystem guarantees for the underlying primitive.
#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    root: PathBuf,
    permissions: Permissions,
}

impl Repository {
    /// Open a repository at `root` with the default permission pair.
    ///
    /// Fails with [`RepositoryError::NotExist`] if `root` is missing, or
    /// [`RepositoryError::NotDirectory`] if it names something other than a
    /// directory.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self, RepositoryError> {
        Self::open_with_permissions(root, Permissions::default())
    }

    /// Open a repository at `root` with explicit create permissions.
    ///
    /// The root is captured verbatim: no canonicalization, no symlink
    /// resolution. A relative root stays relative to the process working
    /// directory.
    pub fn open_with_permissions<P: Into<PathBuf>>(
        root: P,
        permissions: Permissions,
    ) -> Result<Self, RepositoryError> {
        let root = root.into();
        let meta = match fs::metadata(&root) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotExist(root.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        if !meta.is_dir() {
            return Err(RepositoryError::NotDirectory(root.display().to_string()));
        }
        Ok(Self { root, permissions })
    }

    /// The root directory this repository is bound to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The permission pair applied to newly created entries.
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Resolve `name` under the repository root.
    ///
    /// Pure join with no existence check. An empty `name` resolves to the
    /// root directory itself.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether an entry exists at the scoped path.
    ///
    /// Read-only stat; does not distinguish files from directories.
    pub fn is_file_exists(&self, name: &str) -> bool {
        self.file_path(name).exists()
    }

    /// Create the scoped directory and any missing ancestors with the
    /// directory permission.
    ///
    /// Idempotent: an already existing tree succeeds silently. Fails if an
    /// ancestor segment exists as a non-directory.
    pub fn create_directory(&self, name: &str) -> Result<(), RepositoryError> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.permissions.directory);
        }
        builder.create(self.file_path(name))?;
        Ok(())
    }

    /// Remove the scoped directory.
    ///
    /// Not recursive: a non-empty directory fails with the host not-empty
    /// error. Creation is recursive, removal is not.
    pub fn remove_directory(&self, name: &str) -> Result<(), RepositoryError> {
        self.remove_file(name)
    }

    /// Read the full contents of the scoped file.
    pub fn read_file(&self, name: &str) -> Result<Vec<u8>, RepositoryError> {
        let path = self.file_path(name);
        fs::read(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                RepositoryError::NotExist(path.display().to_string())
            } else {
                err.into()
            }
        })
    }

    /// Create or truncate the scoped file and write `data` in one pass,
    /// using the file permission for a newly created file.
    ///
    /// Missing parent directories are not created.
    pub fn write_file(&self, name: &str, data: &[u8]) -> Result<(), RepositoryError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.permissions.file);
        }
        let mut file = options.open(self.file_path(name))?;
        file.write_all(data)?;
        Ok(())
    }

    /// Append `data` to the scoped file, creating it with the file
    /// permission if absent.
    ///
    /// The handle is released on every exit path; when the write fails, the
    /// write error is what surfaces (the implicit close cannot mask it).
    pub fn append_file(&self, name: &str, data: &[u8]) -> Result<(), RepositoryError> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.permissions.file);
        }
        let mut file = options.open(self.file_path(name))?;
        file.write_all(data)?;
        Ok(())
    }

    /// Atomically rename the scoped `name` to the scoped `new_name`.
    ///
    /// Fails if the source is missing or the destination's parent does not
    /// exist.
    pub fn rename_file(&self, name: &str, new_name: &str) -> Result<(), RepositoryError> {
        fs::rename(self.file_path(name), self.file_path(new_name))?;
        Ok(())
    }

    /// Remove exactly one entry at the scoped path: a file or an empty
    /// directory.
    ///
    /// An empty `name` targets the root directory itself. Removing a
    /// non-empty root fails with the host not-empty error; there is no
    /// extra guard in this crate.
    pub fn remove_file(&self, name: &str) -> Result<(), RepositoryError> {
        let path = self.file_path(name);
        // Stat without following symlinks so a symlink is removed, not its
        // target.
        let meta = fs::symlink_metadata(&path)?;
        if meta.is_dir() {
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
