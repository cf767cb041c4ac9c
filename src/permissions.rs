//! Default create permissions for repository files and directories.

use serde::{Deserialize, Serialize};

/// Permission bits applied when the repository creates files and directories.
///
/// Values are Unix mode bits, still subject to the process umask like any
/// `open(2)`/`mkdir(2)` mode argument. On non-Unix targets they are carried
/// but not applied; the host default governs there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Mode for a file being created (`rw-rw-r--` by default).
    pub file: u32,
    /// Mode for a directory being created (`rwxrwxr-x` by default).
    pub directory: u32,
}

impl Permissions {
    /// Default file mode: `rw-rw-r--`.
    pub const DEFAULT_FILE: u32 = 0o664;
    /// Default directory mode: `rwxrwxr-x`.
    pub const DEFAULT_DIRECTORY: u32 = 0o775;

    pub const fn new(file: u32, directory: u32) -> Self {
        Self { file, directory }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE, Self::DEFAULT_DIRECTORY)
    }
}
