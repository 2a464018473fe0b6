//! Content oracle seam.

use std::path::Path;

use serde::Serialize;

use crate::error::SniffError;

/// What a content oracle reports about a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OracleSignal {
	/// Coarse media type, e.g. `text/plain`
	pub media_type: String,
	/// One line description, e.g. `Python script, ASCII text executable`
	pub description: String,
}

impl OracleSignal {
	pub fn new(media_type: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			media_type: media_type.into(),
			description: description.into(),
		}
	}
}

/// A magic-number oracle, such as libmagic.
///
/// Implementations fail closed: when the answer cannot be trusted they
/// return a [`SniffError`] instead of a guess.
pub trait Sniffer: Send + Sync {
	fn sniff(&self, path: &Path) -> Result<OracleSignal, SniffError>;
}

impl<S: Sniffer + ?Sized> Sniffer for Box<S> {
	fn sniff(&self, path: &Path) -> Result<OracleSignal, SniffError> {
		(**self).sniff(path)
	}
}

/// Reports the same signal for every existing path.
#[derive(Debug, Clone)]
pub struct StaticSniffer {
	signal: OracleSignal,
}

impl StaticSniffer {
	pub fn new(media_type: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			signal: OracleSignal::new(media_type, description),
		}
	}
}

impl Sniffer for StaticSniffer {
	fn sniff(&self, path: &Path) -> Result<OracleSignal, SniffError> {
		if !path.exists() {
			return Err(SniffError::NotFound(path.into()));
		}

		Ok(self.signal.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn static_sniffer_fails_closed_on_missing_files() {
		let sniffer = StaticSniffer::new("text/plain", "ASCII text");
		assert!(matches!(
			sniffer.sniff(Path::new("/no/such/file.txt")),
			Err(SniffError::NotFound(_))
		));
	}

	#[test]
	fn static_sniffer_reports_its_signal() {
		let file = tempfile::NamedTempFile::new().expect("temp file");
		let sniffer: Box<dyn Sniffer> = Box::new(StaticSniffer::new("text/plain", "ASCII text"));

		assert_eq!(
			sniffer.sniff(file.path()).expect("sniff"),
			OracleSignal::new("text/plain", "ASCII text")
		);
	}
}
