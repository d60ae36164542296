//! Infrastructure utilities

mod file;

pub use file::FileUtils;
