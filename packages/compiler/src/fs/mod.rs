//! Filesystem access for the compiler: tree walking and atomic writes.

mod tree;
mod writer;

pub use tree::{markdown_files, transform_tree};
pub use writer::write_atomic;
