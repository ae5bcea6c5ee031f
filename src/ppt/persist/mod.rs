//! Persist object directory.

pub mod directory;

pub use directory::{PersistDirectory, PersistDirectoryAtom, PersistDirectoryEntry};
