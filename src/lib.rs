//! repofs: a path-scoped filesystem repository.
//!
//! A [`Repository`] is bound to an existing root directory at construction
//! and resolves every name it is given relative to that root before
//! forwarding the call to the host filesystem. Construction validates the
//! root; every call after that is a stateless pass-through using the
//! repository's create [`Permissions`].
//!
//! ```no_run
//! use repofs::Repository;
//!
//! # fn main() -> Result<(), repofs::RepositoryError> {
//! let repo = Repository::open("data")?;
//! repo.create_directory("notes")?;
//! repo.write_file("notes/today.txt", b"hello")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod permissions;
pub mod repository;

pub use error::RepositoryError;
pub use permissions::Permissions;
pub use repository::Repository;
