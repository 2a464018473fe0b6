use std::{
	fmt::{self, Display},
	io,
	path::Path,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	#[error("content oracle failed: {0}")]
	Sniff(#[from] SniffError),
	#[error(transparent)]
	FileIO(#[from] FileIOError),
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
	#[error("failed to parse configuration: {0}")]
	ConfigParse(#[from] toml::de::Error),
}

/// Failure modes of a content oracle.
///
/// Oracles fail closed: anything that prevents a trustworthy answer is
/// reported here instead of producing a guess.
#[derive(Error, Debug)]
pub enum SniffError {
	#[error("file not found: '{}'", .0.display())]
	NotFound(Box<Path>),
	#[error("file could not be read: {0}")]
	Unreadable(#[from] FileIOError),
	#[error("content oracle is not supported on this platform: {0}")]
	Unsupported(String),
	#[error("magic database error: {0}")]
	Database(String),
}

/// File I/O error that includes the path that caused the error
#[derive(Error, Debug)]
pub struct FileIOError {
	pub path: Box<Path>,
	#[source]
	pub source: io::Error,
	pub maybe_context: Option<&'static str>,
}

impl Display for FileIOError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"file I/O error{}: {}; path: '{}'",
			self.maybe_context
				.map(|ctx| format!(" ({ctx})"))
				.unwrap_or_default(),
			self.source,
			self.path.display()
		)
	}
}

impl FileIOError {
	pub fn from_std_io_err(path: impl AsRef<Path>, source: io::Error) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
			maybe_context: None,
		}
	}

	pub fn from_std_io_err_with_msg(
		path: impl AsRef<Path>,
		source: io::Error,
		msg: &'static str,
	) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
			maybe_context: Some(msg),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_io_error_mentions_path_and_context() {
		let err = FileIOError::from_std_io_err_with_msg(
			"/tmp/missing.bin",
			io::Error::new(io::ErrorKind::NotFound, "gone"),
			"opening prefix reader",
		);

		let rendered = err.to_string();
		assert!(rendered.contains("(opening prefix reader)"));
		assert!(rendered.contains("/tmp/missing.bin"));
		assert!(rendered.contains("gone"));
	}

	#[test]
	fn sniff_errors_convert_into_crate_error() {
		let err: Error = SniffError::Database("corrupt magic.mgc".into()).into();
		assert!(matches!(err, Error::Sniff(SniffError::Database(_))));
	}
}
