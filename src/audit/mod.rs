//! Folder-level auditing and the parallel runner on top of it.

mod folder;
mod runner;

pub use folder::{FolderOutcome, FolderProcessor};
pub use runner::{prepare_destination, Runner};
