//! File extension values produced by the detector.

use std::{borrow::Cow, fmt, path::Path};

use serde::{Serialize, Serializer};

/// A file extension, always starting with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension(Cow<'static, str>);

impl Extension {
	/// Wrap a table literal. Literals are written with their leading dot.
	#[must_use]
	pub const fn from_static(ext: &'static str) -> Self {
		Self(Cow::Borrowed(ext))
	}

	/// Build an extension from user or OS supplied text, adding the leading
	/// dot when missing. Blank input yields `None`.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		let raw = raw.trim();
		match raw.strip_prefix('.') {
			Some("") => None,
			Some(_) => Some(Self(Cow::Owned(raw.to_owned()))),
			None if raw.is_empty() => None,
			None => Some(Self(Cow::Owned(format!(".{raw}")))),
		}
	}

	/// The extension of `path`, as [`Path::extension`] sees it.
	#[must_use]
	pub fn of_path(path: impl AsRef<Path>) -> Option<Self> {
		path.as_ref()
			.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::parse)
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[must_use]
	pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
		self.0.eq_ignore_ascii_case(other)
	}
}

impl fmt::Display for Extension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Extension {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<&str> for Extension {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl Serialize for Extension {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_adds_missing_dot() {
		assert_eq!(Extension::parse("txt").as_ref().map(Extension::as_str), Some(".txt"));
		assert_eq!(Extension::parse(".md").as_ref().map(Extension::as_str), Some(".md"));
		assert_eq!(Extension::parse("  "), None);
		assert_eq!(Extension::parse("."), None);
	}

	#[test]
	fn extension_of_path() {
		assert_eq!(Extension::of_path("/tmp/archive.tar.gz").unwrap(), ".gz");
		assert_eq!(Extension::of_path("/tmp/Makefile"), None);
		assert_eq!(Extension::of_path("/tmp/.bashrc"), None);
	}

	#[test]
	fn compares_with_str() {
		let ext = Extension::from_static(".HxC");
		assert!(ext == ".HxC");
		assert!(ext.eq_ignore_ascii_case(".hxc"));
		assert_eq!(ext.to_string(), ".HxC");
	}
}
