//! Bounded, sequential access to file content.

use std::{
	fs::File,
	io::{self, Read},
	path::Path,
};

/// Opens files for a single forward scan of at most `max_bytes`.
pub trait ContentSource: Send + Sync {
	fn open_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Box<dyn Read + '_>>;
}

/// Reads straight from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
	fn open_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Box<dyn Read + '_>> {
		Ok(Box::new(File::open(path)?.take(max_bytes)))
	}
}
